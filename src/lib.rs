//! LoL Meta AI Landing Library
//!
//! This crate provides the native landing screen for the LoL Meta AI
//! analytics platform: a hero section, a search bar, a feature grid,
//! a stats panel, and a footer.

pub mod app;
pub mod assets;
pub mod components;
pub mod domain;
pub mod error;
pub mod features;
pub mod i18n;
pub mod state;
pub mod theme;
pub mod utils;
