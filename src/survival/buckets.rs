//! Fixed lifespan buckets for distribution reporting.

use std::fmt;

use serde::Serialize;

/// One interval of the fixed lifespan partition.
///
/// Intervals are half-open on the left, matching "years completed": a
/// duration of exactly 1.0 years falls in `1–3 yrs`, not `<1 yr`. The
/// terminal bucket is unbounded above. Every non-negative duration maps to
/// exactly one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum LifespanBucket {
    /// `[0, 1)` years
    UnderOne,
    /// `[1, 3)` years
    OneToThree,
    /// `[3, 5)` years
    ThreeToFive,
    /// `[5, 10)` years
    FiveToTen,
    /// `[10, 15)` years
    TenToFifteen,
    /// `[15, 20)` years
    FifteenToTwenty,
    /// `[20, ∞)` years
    TwentyPlus,
}

impl LifespanBucket {
    /// All buckets in fixed display order
    pub const ALL: [Self; 7] = [
        Self::UnderOne,
        Self::OneToThree,
        Self::ThreeToFive,
        Self::FiveToTen,
        Self::TenToFifteen,
        Self::FifteenToTwenty,
        Self::TwentyPlus,
    ];

    /// Assign a non-negative duration to its unique bucket
    #[must_use]
    pub fn for_duration(duration_years: f64) -> Self {
        match duration_years {
            d if d < 1.0 => Self::UnderOne,
            d if d < 3.0 => Self::OneToThree,
            d if d < 5.0 => Self::ThreeToFive,
            d if d < 10.0 => Self::FiveToTen,
            d if d < 15.0 => Self::TenToFifteen,
            d if d < 20.0 => Self::FifteenToTwenty,
            _ => Self::TwentyPlus,
        }
    }

    /// Display label, as shown on the distribution axis
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UnderOne => "<1 yr",
            Self::OneToThree => "1–3 yrs",
            Self::ThreeToFive => "3–5 yrs",
            Self::FiveToTen => "5–10 yrs",
            Self::TenToFifteen => "10–15 yrs",
            Self::FifteenToTwenty => "15–20 yrs",
            Self::TwentyPlus => "20+ yrs",
        }
    }

    /// Position in the fixed ordering
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for LifespanBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
