//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`Granularity`] - Time-bucketing level of the feed (weeks, months, years)
//! - [`InfiniteScrollingView`] - Continuous-scroll rendering mode
//! - [`TotalItems`] - Per-granularity item counts supplied by the data loader
//!
//! # Validation
//!
//! These types enforce validity at construction time. A granularity outside
//! the three known names cannot be represented, so every reader of the
//! timeline view handles exactly three cases.
//!
//! # Examples
//!
//! ```
//! use changelog_timeline::core::types::{Granularity, TotalItems};
//!
//! let view: Granularity = "months".parse().unwrap();
//! assert_eq!(view, Granularity::Months);
//! assert!("decades".parse::<Granularity>().is_err());
//!
//! let totals = TotalItems::new(25, 8, 2);
//! assert_eq!(totals.get(view), 8);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid granularity '{0}', must be one of: weeks, months, years")]
    InvalidGranularity(String),

    #[error("invalid infinite scrolling view '{0}', must be one of: year, month")]
    InvalidInfiniteView(String),
}

/// Time-bucketing level of the changelog feed.
///
/// Declaration order is the zoom-out order: `Weeks < Months < Years`.
/// The ordering is informational; nothing forbids jumping between any two
/// levels.
///
/// # Example
///
/// ```
/// use changelog_timeline::core::types::Granularity;
///
/// assert_eq!(Granularity::default(), Granularity::Weeks);
/// assert!(Granularity::Weeks < Granularity::Years);
/// assert_eq!(Granularity::Months.to_string(), "months");
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    #[default]
    Weeks,
    Months,
    Years,
}

impl Granularity {
    /// All granularities, finest first.
    pub const ALL: [Granularity; 3] = [Granularity::Weeks, Granularity::Months, Granularity::Years];

    /// Lowercase name, as used in hash fragments and link suffixes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Weeks => "weeks",
            Granularity::Months => "months",
            Granularity::Years => "years",
        }
    }

    /// Parse a name, falling back to `Weeks` for anything unknown.
    ///
    /// The mount rule reads the address-bar hash through this, since users
    /// can type anything there. Use [`FromStr`] where the caller wants the
    /// error.
    pub fn parse_lenient(name: &str) -> Self {
        match name.parse() {
            Ok(g) => g,
            Err(err) => {
                tracing::warn!(%err, "falling back to weeks");
                Granularity::Weeks
            }
        }
    }

    /// Stable index used for atomic storage.
    pub(crate) fn to_index(self) -> u8 {
        match self {
            Granularity::Weeks => 0,
            Granularity::Months => 1,
            Granularity::Years => 2,
        }
    }

    /// Inverse of [`Granularity::to_index`]. Out-of-range values map to `Weeks`.
    pub(crate) fn from_index(index: u8) -> Self {
        match index {
            1 => Granularity::Months,
            2 => Granularity::Years,
            _ => Granularity::Weeks,
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weeks" => Ok(Granularity::Weeks),
            "months" => Ok(Granularity::Months),
            "years" => Ok(Granularity::Years),
            other => Err(TypeError::InvalidGranularity(other.to_string())),
        }
    }
}

/// Continuous-scroll rendering mode.
///
/// When a page is rendered in one of these modes there are no discrete
/// previous/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfiniteScrollingView {
    Year,
    Month,
}

impl InfiniteScrollingView {
    pub fn as_str(&self) -> &'static str {
        match self {
            InfiniteScrollingView::Year => "year",
            InfiniteScrollingView::Month => "month",
        }
    }
}

impl fmt::Display for InfiniteScrollingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InfiniteScrollingView {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "year" => Ok(InfiniteScrollingView::Year),
            "month" => Ok(InfiniteScrollingView::Month),
            other => Err(TypeError::InvalidInfiniteView(other.to_string())),
        }
    }
}

/// Item counts per granularity.
///
/// The same changelog produces a different number of timeline buckets at
/// each zoom level, so pagination reads the count for the active view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalItems {
    pub weeks: usize,
    pub months: usize,
    pub years: usize,
}

impl TotalItems {
    pub fn new(weeks: usize, months: usize, years: usize) -> Self {
        Self {
            weeks,
            months,
            years,
        }
    }

    /// Count for the given granularity.
    pub fn get(&self, view: Granularity) -> usize {
        match view {
            Granularity::Weeks => self.weeks,
            Granularity::Months => self.months,
            Granularity::Years => self.years,
        }
    }
}
