//! Configuration for the survival table.

use crate::schema::ColumnContract;
use crate::survival::DistributionReport;
use crate::utils::date::default_date_formats;

/// Configuration for loading a snapshot and deriving the survival table
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Column mapping for the snapshot contract
    pub columns: ColumnContract,
    /// Date formats attempted when parsing date cells
    pub date_formats: Vec<String>,
    /// Minimum sample size before a distribution should be presented
    pub min_sample_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: ColumnContract::default(),
            date_formats: default_date_formats(),
            min_sample_size: DistributionReport::MIN_SAMPLE_SIZE,
        }
    }
}
