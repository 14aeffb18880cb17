//! Record models for the business snapshot.

pub mod business;

pub use business::{BusinessRecord, SurvivalRecord};
