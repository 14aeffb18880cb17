//! Exact-match filter criteria over survival records.

use crate::models::SurvivalRecord;

/// Defines a criterion for filtering records
pub trait FilterCriteria<T> {
    /// Determine if an entity meets the filter criteria
    fn meets_criteria(&self, entity: &T) -> bool;
}

/// A filter that can be applied to a survival record
#[derive(Debug, Clone)]
pub enum RecordFilter {
    /// Filter by license category (exact match; categories are title-cased
    /// at derivation, so the probe must be too)
    LicenseCategory(String),
    /// Filter by analysis neighborhood (exact match)
    Neighborhood(String),
    /// Combined filter that requires all criteria to be met
    All(Vec<RecordFilter>),
    /// Combined filter that requires any criterion to be met
    Any(Vec<RecordFilter>),
}

impl FilterCriteria<SurvivalRecord> for RecordFilter {
    fn meets_criteria(&self, record: &SurvivalRecord) -> bool {
        match self {
            Self::LicenseCategory(category) => record.license_category == *category,
            Self::Neighborhood(neighborhood) => record.neighborhood == *neighborhood,
            Self::All(filters) => filters.iter().all(|f| f.meets_criteria(record)),
            Self::Any(filters) => filters.iter().any(|f| f.meets_criteria(record)),
        }
    }
}

/// Narrow records to one `(license category, neighborhood)` selection.
///
/// An empty result is a legal outcome, not an error; it propagates as a
/// report with sample size 0.
#[must_use]
pub fn filter_records<'a>(
    records: &'a [SurvivalRecord],
    license_category: &str,
    neighborhood: &str,
) -> Vec<&'a SurvivalRecord> {
    let selection = RecordFilter::All(vec![
        RecordFilter::LicenseCategory(license_category.to_string()),
        RecordFilter::Neighborhood(neighborhood.to_string()),
    ]);

    records
        .iter()
        .filter(|record| selection.meets_criteria(record))
        .collect()
}
