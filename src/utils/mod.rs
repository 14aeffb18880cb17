//! Shared extraction and normalization helpers.

pub mod arrow;
pub mod date;
pub mod text;
