//! Feature Pages

pub mod landing;
