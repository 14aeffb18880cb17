//! Bucketed lifespan distribution reporting.

use serde::Serialize;

use crate::models::SurvivalRecord;
use crate::survival::buckets::LifespanBucket;

/// Bucketed lifespan counts for one filter selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistributionReport {
    /// Count per bucket in `LifespanBucket::ALL` order, zero-filled
    pub counts: [usize; LifespanBucket::ALL.len()],
    /// Number of records behind the counts
    pub total: usize,
    /// Bucket with the highest count; ties go to the earliest bucket in the
    /// fixed order. `None` when the report is empty.
    pub mode_bucket: Option<LifespanBucket>,
}

impl DistributionReport {
    /// Minimum sample size before a caller should present the distribution.
    /// Below it the caller shows a "not enough data" state instead of a
    /// chart; the report itself is still fully populated.
    pub const MIN_SAMPLE_SIZE: usize = 5;

    /// Whether the sample is large enough to present
    #[must_use]
    pub const fn has_sufficient_sample(&self) -> bool {
        self.total >= Self::MIN_SAMPLE_SIZE
    }

    /// Count for a single bucket
    #[must_use]
    pub const fn count(&self, bucket: LifespanBucket) -> usize {
        self.counts[bucket.index()]
    }

    /// `(label, count)` pairs in display order
    #[must_use]
    pub fn labeled_counts(&self) -> Vec<(&'static str, usize)> {
        LifespanBucket::ALL
            .into_iter()
            .map(|bucket| (bucket.label(), self.counts[bucket.index()]))
            .collect()
    }

    /// Generate the narrative insight shown beside the distribution
    #[must_use]
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Lifespan Distribution:\n");
        for (label, count) in self.labeled_counts() {
            summary.push_str(&format!("  {label}: {count}\n"));
        }
        summary.push_str(&format!("  Sample Size: {}\n", self.total));
        if let Some(mode) = self.mode_bucket {
            summary.push_str(&format!("  Most Common Lifespan: {}\n", mode.label()));
        }

        summary
    }
}

/// Count records into the fixed lifespan distribution.
///
/// Pure and total: empty input is legal and yields a zero-filled report
/// with no mode. The bucket counts always sum to the number of records
/// passed in.
#[must_use]
pub fn bucketize<'a, I>(records: I) -> DistributionReport
where
    I: IntoIterator<Item = &'a SurvivalRecord>,
{
    let mut counts = [0usize; LifespanBucket::ALL.len()];
    let mut total = 0;
    for record in records {
        counts[LifespanBucket::for_duration(record.duration_years).index()] += 1;
        total += 1;
    }

    // Strict comparison keeps the earliest bucket on ties.
    let mut mode_bucket = None;
    let mut best = 0;
    for bucket in LifespanBucket::ALL {
        let count = counts[bucket.index()];
        if count > best {
            best = count;
            mode_bucket = Some(bucket);
        }
    }

    DistributionReport {
        counts,
        total,
        mode_bucket,
    }
}
