//! routing::url
//!
//! Destination URL parsing for the navigation rules.
//!
//! # Route Contract
//!
//! - `/page/<n>` - discrete pagination
//! - `.../<years>/...` - years drill-down (shows months)
//! - `.../<years>/.../<months>/...` - months drill-down (shows weeks)
//! - `/<detail>/<slug>...` - per-entry detail view
//!
//! Segment names come from [`RouteNames`] and are matched exactly against
//! whole path segments, so `/yearsly` is not a years drill-down.
//!
//! # Accepted Inputs
//!
//! Router events hand over either a root-relative path (`/page/2#months`)
//! or an absolute URL (`https://changelog.example.com/page/2`). Query and
//! fragment are split off before segment matching.

use thiserror::Error;

use crate::core::types::Granularity;

/// Errors from destination URL parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("empty url")]
    Empty,

    #[error("url path must start with '/': {0}")]
    RelativePath(String),

    #[error("invalid url scheme: {0}")]
    InvalidScheme(String),

    #[error("url contains control characters")]
    ControlCharacter,
}

/// Path segment names the navigation rules look for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNames {
    pub detail: String,
    pub years: String,
    pub months: String,
    pub page: String,
}

impl Default for RouteNames {
    fn default() -> Self {
        Self {
            detail: "changelogs".to_string(),
            years: "years".to_string(),
            months: "months".to_string(),
            page: "page".to_string(),
        }
    }
}

/// A parsed navigation target.
///
/// # Example
///
/// ```
/// use changelog_timeline::core::types::Granularity;
/// use changelog_timeline::routing::url::{Destination, RouteNames};
///
/// let names = RouteNames::default();
///
/// let dest = Destination::parse("/changelogs/2023/years#weeks").unwrap();
/// assert!(dest.is_detail_view(&names));
/// assert_eq!(dest.infer_view(&names), Some(Granularity::Months));
///
/// let dest = Destination::parse("https://example.com/page/3?ref=feed").unwrap();
/// assert_eq!(dest.page_number(&names), Some(3));
/// assert_eq!(dest.infer_view(&names), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    path: String,
    segments: Vec<String>,
    query: Option<String>,
    fragment: Option<String>,
}

impl Destination {
    /// Parse a router destination.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` for empty input, relative paths, malformed schemes
    /// and control characters.
    pub fn parse(url: &str) -> Result<Self, UrlError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(UrlError::Empty);
        }
        if url.chars().any(|c| c.is_control()) {
            return Err(UrlError::ControlCharacter);
        }

        let rest = strip_origin(url)?;

        let (rest, fragment) = match rest.split_once('#') {
            Some((before, fragment)) => (before, Some(fragment.to_string())),
            None => (rest, None),
        };
        let (path, query) = match rest.split_once('?') {
            Some((before, query)) => (before, Some(query.to_string())),
            None => (rest, None),
        };

        // An origin with nothing after it is the root.
        let path = if path.is_empty() { "/" } else { path };
        if !path.starts_with('/') {
            return Err(UrlError::RelativePath(url.to_string()));
        }

        let segments = path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            path: path.to_string(),
            segments,
            query,
            fragment,
        })
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Whether any path segment equals `name`.
    pub fn has_segment(&self, name: &str) -> bool {
        self.segments.iter().any(|s| s == name)
    }

    /// Whether the target is a per-entry detail view.
    ///
    /// True when the detail segment is followed by at least one more
    /// segment.
    pub fn is_detail_view(&self, names: &RouteNames) -> bool {
        self.segments
            .iter()
            .position(|s| *s == names.detail)
            .is_some_and(|i| i + 1 < self.segments.len())
    }

    /// Page index for `/page/<n>` targets.
    pub fn page_number(&self, names: &RouteNames) -> Option<usize> {
        match self.segments.as_slice() {
            [segment, n] if *segment == names.page => n.parse().ok(),
            _ => None,
        }
    }

    /// Granularity implied by drill-down segments.
    ///
    /// Drilling into a year shows its months; drilling into a month shows
    /// its weeks. Anything else leaves the view alone (`None`). This never
    /// yields `Years`.
    pub fn infer_view(&self, names: &RouteNames) -> Option<Granularity> {
        let years = self.has_segment(&names.years);
        let months = self.has_segment(&names.months);
        match (years, months) {
            (true, false) => Some(Granularity::Months),
            (true, true) => Some(Granularity::Weeks),
            _ => None,
        }
    }
}

/// Drop `scheme://authority` from absolute URLs.
fn strip_origin(url: &str) -> Result<&str, UrlError> {
    if url.starts_with('/') {
        return Ok(url);
    }
    let Some(sep) = url.find("://") else {
        return Ok(url);
    };
    // A "://" after the path, query or fragment has begun is data, not a scheme.
    if url[..sep].contains(['/', '?', '#']) {
        return Ok(url);
    }
    let (scheme, rest) = (&url[..sep], &url[sep + 3..]);

    let valid_scheme = scheme
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !valid_scheme {
        return Err(UrlError::InvalidScheme(scheme.to_string()));
    }

    match rest.find(['/', '?', '#']) {
        Some(i) => Ok(&rest[i..]),
        None => Ok(""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names() -> RouteNames {
        RouteNames::default()
    }

    mod parse {
        use super::*;

        #[test]
        fn splits_query_and_fragment() {
            let dest = Destination::parse("/page/2?utm=x#months").unwrap();
            assert_eq!(dest.path(), "/page/2");
            assert_eq!(dest.segments(), ["page", "2"]);
            assert_eq!(dest.query(), Some("utm=x"));
            assert_eq!(dest.fragment(), Some("months"));
        }

        #[test]
        fn absolute_url_keeps_path_only() {
            let dest = Destination::parse("https://changelog.example.com/changelogs/launch").unwrap();
            assert_eq!(dest.path(), "/changelogs/launch");
        }

        #[test]
        fn scheme_like_text_in_query_or_fragment_is_not_an_origin() {
            let dest = Destination::parse("/changelogs/2023/years?ref=https://news.example.com").unwrap();
            assert_eq!(dest.path(), "/changelogs/2023/years");
            assert_eq!(dest.query(), Some("ref=https://news.example.com"));
            assert_eq!(dest.infer_view(&names()), Some(Granularity::Months));

            let dest = Destination::parse("/page/2#from=https://x.example/feed").unwrap();
            assert_eq!(dest.path(), "/page/2");
            assert_eq!(dest.fragment(), Some("from=https://x.example/feed"));

            let dest =
                Destination::parse("https://changelog.example.com/page/1?next=http://a.example").unwrap();
            assert_eq!(dest.path(), "/page/1");
            assert_eq!(dest.query(), Some("next=http://a.example"));
        }

        #[test]
        fn relative_path_with_scheme_in_query_stays_relative() {
            assert!(matches!(
                Destination::parse("page?ref=https://x.example"),
                Err(UrlError::RelativePath(_))
            ));
        }

        #[test]
        fn bare_origin_is_root() {
            let dest = Destination::parse("https://changelog.example.com").unwrap();
            assert_eq!(dest.path(), "/");
            assert!(dest.segments().is_empty());

            let dest = Destination::parse("https://changelog.example.com#years").unwrap();
            assert_eq!(dest.path(), "/");
            assert_eq!(dest.fragment(), Some("years"));
        }

        #[test]
        fn rejects_malformed_input() {
            assert_eq!(Destination::parse(""), Err(UrlError::Empty));
            assert_eq!(Destination::parse("   "), Err(UrlError::Empty));
            assert!(matches!(
                Destination::parse("page/2"),
                Err(UrlError::RelativePath(_))
            ));
            assert!(matches!(
                Destination::parse("1http://x/page"),
                Err(UrlError::InvalidScheme(_))
            ));
            assert_eq!(
                Destination::parse("/page/\u{7}2"),
                Err(UrlError::ControlCharacter)
            );
        }

        #[test]
        fn empty_segments_ignored() {
            let dest = Destination::parse("//changelogs//2023/").unwrap();
            assert_eq!(dest.segments(), ["changelogs", "2023"]);
        }
    }

    mod inference {
        use super::*;

        #[test]
        fn years_without_months_shows_months() {
            let dest = Destination::parse("/changelogs/2023/years").unwrap();
            assert_eq!(dest.infer_view(&names()), Some(Granularity::Months));
        }

        #[test]
        fn years_and_months_shows_weeks() {
            let dest = Destination::parse("/changelogs/2023/years/03/months").unwrap();
            assert_eq!(dest.infer_view(&names()), Some(Granularity::Weeks));
        }

        #[test]
        fn top_level_leaves_view_alone() {
            for url in ["/", "/page/4", "/changelogs/launch-week", "/months"] {
                let dest = Destination::parse(url).unwrap();
                assert_eq!(dest.infer_view(&names()), None, "{url}");
            }
        }

        #[test]
        fn fragment_does_not_drive_inference() {
            let dest = Destination::parse("/page/1#years").unwrap();
            assert_eq!(dest.infer_view(&names()), None);
        }

        #[test]
        fn segments_match_whole_names() {
            let dest = Destination::parse("/yearsly/monthsly").unwrap();
            assert_eq!(dest.infer_view(&names()), None);
        }

        #[test]
        fn custom_segment_names() {
            let custom = RouteNames {
                years: "y".to_string(),
                months: "m".to_string(),
                ..RouteNames::default()
            };
            let dest = Destination::parse("/archive/y/2022/m/07").unwrap();
            assert_eq!(dest.infer_view(&custom), Some(Granularity::Weeks));
            assert_eq!(dest.infer_view(&names()), None);
        }
    }

    mod detail_and_page {
        use super::*;

        #[test]
        fn detail_view_needs_slug() {
            let n = names();
            assert!(Destination::parse("/changelogs/launch").unwrap().is_detail_view(&n));
            assert!(!Destination::parse("/changelogs").unwrap().is_detail_view(&n));
            assert!(!Destination::parse("/page/1").unwrap().is_detail_view(&n));
        }

        #[test]
        fn page_number_only_for_page_routes() {
            let n = names();
            assert_eq!(Destination::parse("/page/0").unwrap().page_number(&n), Some(0));
            assert_eq!(Destination::parse("/page/12#months").unwrap().page_number(&n), Some(12));
            assert_eq!(Destination::parse("/page/x").unwrap().page_number(&n), None);
            assert_eq!(Destination::parse("/page").unwrap().page_number(&n), None);
            assert_eq!(Destination::parse("/page/1/2").unwrap().page_number(&n), None);
        }
    }
}
