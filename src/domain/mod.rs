//! Domain - Static Display Data and Preferences

pub mod content;
pub mod prefs;
