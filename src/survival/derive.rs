//! Derivation of survival records from raw snapshot rows.

use crate::models::{BusinessRecord, SurvivalRecord};
use crate::utils::text::title_case;

/// Days per year, accounting for leap years
const DAYS_PER_YEAR: f64 = 365.25;

/// Counts of rows kept and dropped during derivation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeriveStats {
    /// Rows examined
    pub input: usize,
    /// Rows that produced a survival record
    pub kept: usize,
    /// Rows with no usable start date
    pub missing_start_date: usize,
    /// Rows with neither an end date nor a snapshot date to censor at
    pub missing_end_date: usize,
    /// Rows with no license category
    pub missing_license_category: usize,
    /// Rows with no neighborhood
    pub missing_neighborhood: usize,
    /// Rows whose end date precedes the start date (malformed source data)
    pub negative_duration: usize,
}

impl DeriveStats {
    /// Total rows dropped for any reason
    #[must_use]
    pub const fn dropped(&self) -> usize {
        self.input - self.kept
    }
}

/// Derive survival records from raw rows, dropping rows that cannot be
/// validated and logging the outcome
#[must_use]
pub fn derive_records(rows: &[BusinessRecord]) -> Vec<SurvivalRecord> {
    let (records, stats) = derive_records_with_stats(rows);

    log::info!(
        "derived {} survival records from {} rows ({} dropped)",
        stats.kept,
        stats.input,
        stats.dropped()
    );
    if stats.negative_duration > 0 {
        log::warn!(
            "excluded {} rows with an end date before the start date",
            stats.negative_duration
        );
    }

    records
}

/// Derive survival records and report why rows were dropped.
///
/// Dropping is filtering, not an error: unparsable dates arrive here as
/// missing, and a row is skipped when its start date, its effective end
/// date, or either categorical field cannot be established. A row whose end
/// date precedes its start date is excluded as malformed. The effective end
/// date is the closure date when observed, otherwise the snapshot date; a
/// missing closure date marks the record as right-censored. License
/// categories are title-cased so downstream filtering stays exact-match.
/// Output order follows input order, and every output record satisfies
/// `duration_years >= 0`.
pub fn derive_records_with_stats(rows: &[BusinessRecord]) -> (Vec<SurvivalRecord>, DeriveStats) {
    let mut stats = DeriveStats {
        input: rows.len(),
        ..DeriveStats::default()
    };
    let mut records = Vec::with_capacity(rows.len());

    for row in rows {
        let Some(start_date) = row.start_date else {
            stats.missing_start_date += 1;
            continue;
        };

        let (effective_end_date, event_observed) = match (row.end_date, row.as_of_date) {
            (Some(end_date), _) => (end_date, true),
            (None, Some(as_of_date)) => (as_of_date, false),
            (None, None) => {
                stats.missing_end_date += 1;
                continue;
            }
        };

        let Some(license_category) = normalized(row.license_category.as_deref()) else {
            stats.missing_license_category += 1;
            continue;
        };
        let Some(neighborhood) = normalized(row.neighborhood.as_deref()) else {
            stats.missing_neighborhood += 1;
            continue;
        };

        let days = (effective_end_date - start_date).num_days();
        if days < 0 {
            stats.negative_duration += 1;
            continue;
        }

        records.push(SurvivalRecord {
            start_date,
            effective_end_date,
            duration_years: days as f64 / DAYS_PER_YEAR,
            event_observed,
            license_category: title_case(&license_category),
            neighborhood,
        });
        stats.kept += 1;
    }

    (records, stats)
}

/// Trim a raw categorical value; blank-after-trim counts as missing
fn normalized(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
