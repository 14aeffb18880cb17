//! Error handling for the survival table.
//!
//! Only dataset ingestion can fail. The transform itself degrades by
//! dropping rows: unparsable dates and missing fields are filtering
//! conditions, not errors.

use thiserror::Error;

/// Specialized error type for survival table operations
#[derive(Debug, Error)]
pub enum SurvivalTableError {
    /// Error opening or reading a snapshot file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error processing Arrow data
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    /// Error with the dataset column contract
    #[error("Schema error: {0}")]
    Schema(String),
    /// Error with the dataset location or layout
    #[error("Dataset error: {0}")]
    Dataset(String),
}

/// Result type for survival table operations
pub type Result<T> = std::result::Result<T, SurvivalTableError>;
