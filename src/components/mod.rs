//! UI Components

pub mod layout;
pub mod primitives;
