//! feed::months
//!
//! Month buckets of the changelog, as shown in the months view.
//!
//! # Design
//!
//! The data loader hands over a map of month key to entries. This module
//! orders the buckets newest first, labels them, decides which preview
//! layout each bucket gets, and handles the click that drills a month down
//! into its weeks.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::Granularity;
use crate::pagination::PageLink;
use crate::state::Session;

/// Number of images a bucket preview shows before the overflow badge.
pub const PREVIEW_LIMIT: usize = 3;

/// Errors from loading month buckets.
#[derive(Debug, Error)]
pub enum MonthsError {
    #[error("failed to read months file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse months data: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// One changelog entry inside a month bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyChangelog {
    pub image_url: String,
    pub slug: String,
    pub published_at: String,
    /// Page of the weeks view that contains this entry
    pub weekly_view_page: usize,
}

/// Raw loader output: month key to entries.
pub type MonthBuckets = BTreeMap<String, Vec<MonthlyChangelog>>;

/// Parse loader output from JSON.
pub fn parse_months(json: &str) -> Result<MonthBuckets, MonthsError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse loader output from a file.
pub fn load_months(path: &Path) -> Result<MonthBuckets, MonthsError> {
    let contents = std::fs::read_to_string(path).map_err(|e| MonthsError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_months(&contents)
}

/// How a bucket's preview images are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewLayout {
    Empty,
    /// One full-width image
    Single,
    /// Two images side by side
    Pair,
    /// One large image with two stacked beside it
    Hero,
}

impl PreviewLayout {
    fn for_count(count: usize) -> Self {
        match count {
            0 => PreviewLayout::Empty,
            1 => PreviewLayout::Single,
            2 => PreviewLayout::Pair,
            _ => PreviewLayout::Hero,
        }
    }
}

/// A month bucket ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthCard {
    pub key: String,
    /// `"Mar 2023"`, or the raw key if it is not a date
    pub label: String,
    pub layout: PreviewLayout,
    pub images: Vec<String>,
    /// Entries beyond the preview, shown as a `+N` badge
    pub overflow: Option<usize>,
    pub entries: Vec<MonthlyChangelog>,
}

impl MonthCard {
    fn new(key: String, entries: Vec<MonthlyChangelog>) -> Self {
        let label = parse_month_key(&key)
            .map(|date| date.format("%b %Y").to_string())
            .unwrap_or_else(|| key.clone());
        let images = entries
            .iter()
            .take(PREVIEW_LIMIT)
            .map(|e| e.image_url.clone())
            .collect();
        let overflow = (entries.len() > PREVIEW_LIMIT).then(|| entries.len() - PREVIEW_LIMIT);

        Self {
            key,
            label,
            layout: PreviewLayout::for_count(entries.len()),
            images,
            overflow,
            entries,
        }
    }
}

/// Parse a month key: `YYYY-MM`, `YYYY-MM-DD` or an RFC 3339 timestamp.
pub fn parse_month_key(key: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(key, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{key}-01"), "%Y-%m-%d"))
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(key).ok().map(|dt| dt.date_naive()))
}

/// Order buckets newest first.
///
/// Keys that are not dates keep their relative order after all dated ones.
///
/// # Example
///
/// ```
/// use changelog_timeline::feed::months::{order_months, MonthBuckets};
///
/// let mut buckets = MonthBuckets::new();
/// buckets.insert("2023-01".to_string(), vec![]);
/// buckets.insert("2023-03".to_string(), vec![]);
/// buckets.insert("2022-12".to_string(), vec![]);
///
/// let labels: Vec<_> = order_months(buckets).into_iter().map(|c| c.label).collect();
/// assert_eq!(labels, ["Mar 2023", "Jan 2023", "Dec 2022"]);
/// ```
pub fn order_months(buckets: MonthBuckets) -> Vec<MonthCard> {
    let mut cards: Vec<(Option<NaiveDate>, MonthCard)> = buckets
        .into_iter()
        .map(|(key, entries)| (parse_month_key(&key), MonthCard::new(key, entries)))
        .collect();

    // Stable sort: undated buckets (None) sort last, dated ones descending.
    cards.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    cards.into_iter().map(|(_, card)| card).collect()
}

/// Handle a click on a month: switch to weeks and link to the weekly page
/// holding the month's first entry.
pub fn select_month(session: &Session, card: &MonthCard) -> Option<PageLink> {
    session.timeline().set_view(Granularity::Weeks);
    card.entries
        .first()
        .map(|entry| PageLink::new(entry.weekly_view_page, Granularity::Weeks))
}
