//! A Rust library for deriving business survival durations and bucketed
//! lifespan distributions from registered-business snapshots.
//!
//! The pipeline is `derive → filter → bucketize`: raw snapshot rows become
//! validated survival records (duration in years plus a closure/censoring
//! flag), a `(license category, neighborhood)` selection filters them, and
//! the filtered set is counted into a fixed seven-bucket lifespan
//! distribution for presentation.

pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod schema;
pub mod survival;
pub mod utils;

// Re-export the most common types for easier use
// Core types
pub use config::TableConfig;
pub use error::{Result, SurvivalTableError};
pub use models::{BusinessRecord, SurvivalRecord};
pub use schema::ColumnContract;

// Pipeline operations
pub use survival::{
    DeriveStats, DistributionReport, FilterCriteria, LifespanBucket, RecordFilter, SurvivalTable,
    bucketize, derive_records, derive_records_with_stats, filter_records,
};

// Arrow types
pub use arrow::datatypes::Schema as ArrowSchema;
pub use arrow::record_batch::RecordBatch;

// Loading utilities
pub use loader::{load_parquet_dir, load_records, read_csv, read_parquet, records_from_batches};
