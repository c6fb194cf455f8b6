//! Landing View

pub mod controller;
pub mod page;
