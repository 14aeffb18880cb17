//! Business record models
//!
//! A [`BusinessRecord`] is one raw row of the snapshot: every field is
//! optional because date cells that fail to parse and blank categoricals
//! arrive as missing rather than as errors. A [`SurvivalRecord`] is the
//! validated form with the derived survival fields; it is computed once
//! during derivation and never mutated afterward.

use chrono::NaiveDate;
use serde::Serialize;

/// Raw business row as loaded from the snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BusinessRecord {
    /// Date the business location opened
    pub start_date: Option<NaiveDate>,
    /// Date the business location closed, absent while still active
    pub end_date: Option<NaiveDate>,
    /// Snapshot date of the data export
    pub as_of_date: Option<NaiveDate>,
    /// License code description
    pub license_category: Option<String>,
    /// Analysis neighborhood boundary
    pub neighborhood: Option<String>,
}

/// Validated record with derived survival fields
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurvivalRecord {
    /// Date the business location opened
    pub start_date: NaiveDate,
    /// Closure date if observed, otherwise the snapshot date
    pub effective_end_date: NaiveDate,
    /// Observed lifespan in years, never negative
    pub duration_years: f64,
    /// Whether a closure was observed (false = still active at the
    /// snapshot date, i.e. right-censored)
    pub event_observed: bool,
    /// License code description, trimmed and title-cased
    pub license_category: String,
    /// Analysis neighborhood boundary, trimmed
    pub neighborhood: String,
}

impl SurvivalRecord {
    /// Whether the record is right-censored: still active at the snapshot
    /// date, so its true lifespan is unknown
    #[must_use]
    pub const fn is_censored(&self) -> bool {
        !self.event_observed
    }
}
