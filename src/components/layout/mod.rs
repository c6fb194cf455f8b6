//! Layout Components

pub mod footer;
pub mod header;
