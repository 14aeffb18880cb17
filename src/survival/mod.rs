//! Survival-duration derivation and lifespan distribution reporting.
//!
//! The module is a pure pipeline: [`derive_records`] validates raw rows and
//! computes durations, [`filter_records`] narrows to one `(license
//! category, neighborhood)` selection, and [`bucketize`] counts the
//! selection into the fixed lifespan buckets. Each step is re-run fresh per
//! selection; there is no caching or shared state.

pub mod buckets;
pub mod derive;
pub mod distribution;
pub mod filter;
pub mod table;

pub use buckets::LifespanBucket;
pub use derive::{DeriveStats, derive_records, derive_records_with_stats};
pub use distribution::{DistributionReport, bucketize};
pub use filter::{FilterCriteria, RecordFilter, filter_records};
pub use table::SurvivalTable;
