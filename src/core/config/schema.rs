//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Feed Config
//!
//! Located at (in order of precedence):
//! 1. `--config <path>` if given
//! 2. `$CLT_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/changelog-timeline/config.toml`
//! 4. `~/.changelog-timeline/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Config values are validated after parsing to ensure they conform to
//! expected formats (e.g., route segments must be single, non-empty path
//! components).

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::Granularity;

/// Feed configuration.
///
/// # Example
///
/// ```toml
/// site_title = "Twine Changelog"
/// items_per_page = 10
/// default_view = "weeks"
///
/// [routes]
/// detail_segment = "changelogs"
/// years_segment = "years"
/// months_segment = "months"
/// page_segment = "page"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FeedConfig {
    /// Site title used in page meta titles
    pub site_title: Option<String>,

    /// Items shown per discrete page
    pub items_per_page: Option<usize>,

    /// Granularity a fresh session starts in
    pub default_view: Option<Granularity>,

    /// Route segment names
    pub routes: Option<RouteSegments>,
}

impl FeedConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.items_per_page == Some(0) {
            return Err(ConfigError::InvalidValue(
                "items_per_page must be greater than zero".to_string(),
            ));
        }

        if let Some(title) = &self.site_title {
            if title.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "site_title cannot be empty".to_string(),
                ));
            }
        }

        if let Some(routes) = &self.routes {
            routes.validate()?;
        }

        Ok(())
    }
}

/// Path segment names the route synchronizer matches against.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RouteSegments {
    /// Segment that introduces a per-entry detail view
    pub detail_segment: Option<String>,

    /// Segment marking a years drill-down
    pub years_segment: Option<String>,

    /// Segment marking a months drill-down
    pub months_segment: Option<String>,

    /// Segment introducing a discrete page number
    pub page_segment: Option<String>,
}

impl RouteSegments {
    /// Validate the route segment names.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a segment is empty or contains
    /// URL delimiters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let named = [
            ("detail_segment", &self.detail_segment),
            ("years_segment", &self.years_segment),
            ("months_segment", &self.months_segment),
            ("page_segment", &self.page_segment),
        ];

        for (key, value) in named {
            if let Some(segment) = value {
                validate_segment(key, segment)?;
            }
        }

        Ok(())
    }
}

fn validate_segment(key: &str, segment: &str) -> Result<(), ConfigError> {
    if segment.is_empty() {
        return Err(ConfigError::InvalidValue(format!("{key} cannot be empty")));
    }
    if segment.contains(['/', '#', '?']) || segment.chars().any(|c| c.is_whitespace()) {
        return Err(ConfigError::InvalidValue(format!(
            "{key} must be a single path segment, got '{segment}'"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feed_config_roundtrip() {
        let config = FeedConfig {
            site_title: Some("Acme Changelog".to_string()),
            items_per_page: Some(12),
            default_view: Some(Granularity::Months),
            routes: Some(RouteSegments {
                detail_segment: Some("posts".to_string()),
                ..Default::default()
            }),
        };

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: FeedConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn empty_config_is_valid() {
        let parsed: FeedConfig = toml::from_str("").unwrap();
        assert_eq!(parsed, FeedConfig::default());
        assert!(parsed.validate().is_ok());
    }

    #[test]
    fn zero_items_per_page_rejected() {
        let config = FeedConfig {
            items_per_page: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_site_title_rejected() {
        let config = FeedConfig {
            site_title: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn segment_with_slash_rejected() {
        let routes = RouteSegments {
            years_segment: Some("by/year".to_string()),
            ..Default::default()
        };
        assert!(routes.validate().is_err());
    }

    #[test]
    fn unknown_default_view_fails_to_parse() {
        let result: Result<FeedConfig, _> = toml::from_str("default_view = \"days\"");
        assert!(result.is_err());
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: Result<FeedConfig, _> = toml::from_str("animate = true");
        assert!(result.is_err());
    }
}
