//! State - GPUI Entity States

pub mod i18n_state;
pub mod search_state;
