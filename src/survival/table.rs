//! Session-level survival table.

use itertools::Itertools;

use crate::models::{BusinessRecord, SurvivalRecord};
use crate::survival::derive::derive_records;
use crate::survival::distribution::{DistributionReport, bucketize};
use crate::survival::filter::filter_records;

/// Immutable set of derived survival records for one loaded snapshot.
///
/// The table is built once per session and treated as read-only afterward;
/// every selection change runs the same filter → bucketize pipeline over it
/// fresh, with no caching or incremental recomputation.
#[derive(Debug, Clone)]
pub struct SurvivalTable {
    records: Vec<SurvivalRecord>,
}

impl SurvivalTable {
    /// Build a table from raw snapshot rows, dropping rows that cannot be
    /// validated
    #[must_use]
    pub fn from_raw(rows: &[BusinessRecord]) -> Self {
        Self {
            records: derive_records(rows),
        }
    }

    /// Build a table from already-derived records
    #[must_use]
    pub const fn from_records(records: Vec<SurvivalRecord>) -> Self {
        Self { records }
    }

    /// All derived records, in snapshot order
    #[must_use]
    pub fn records(&self) -> &[SurvivalRecord] {
        &self.records
    }

    /// Number of derived records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct license categories, sorted for selection widgets
    #[must_use]
    pub fn license_categories(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.license_category.clone())
            .sorted()
            .dedup()
            .collect()
    }

    /// Distinct neighborhoods, sorted for selection widgets
    #[must_use]
    pub fn neighborhoods(&self) -> Vec<String> {
        self.records
            .iter()
            .map(|record| record.neighborhood.clone())
            .sorted()
            .dedup()
            .collect()
    }

    /// Records matching one `(license category, neighborhood)` selection
    #[must_use]
    pub fn records_for(
        &self,
        license_category: &str,
        neighborhood: &str,
    ) -> Vec<&SurvivalRecord> {
        filter_records(&self.records, license_category, neighborhood)
    }

    /// Bucketed lifespan distribution for one selection
    #[must_use]
    pub fn report_for(&self, license_category: &str, neighborhood: &str) -> DistributionReport {
        bucketize(self.records_for(license_category, neighborhood))
    }
}
