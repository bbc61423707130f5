//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file (first one found, see below)
//! 3. CLI flags (not handled here)
//!
//! # Config Locations
//!
//! Searched in order:
//! 1. Explicit path passed by the caller (`--config`)
//! 2. `$CLT_CONFIG` if set
//! 3. `$XDG_CONFIG_HOME/changelog-timeline/config.toml`
//! 4. `~/.changelog-timeline/config.toml` (canonical write location)
//!
//! # Example
//!
//! ```no_run
//! use changelog_timeline::core::config::Config;
//!
//! let config = Config::load(None).unwrap();
//! println!("Title: {}", config.site_title());
//! println!("Per page: {}", config.items_per_page());
//! println!("Start view: {}", config.default_view());
//! ```

pub mod schema;

pub use schema::{FeedConfig, RouteSegments};

use std::fs;
use std::io::Write;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::types::Granularity;
use crate::routing::url::RouteNames;

/// Default site title, matching the hosted changelog.
pub const DEFAULT_SITE_TITLE: &str = "Twine Changelog";

/// Default number of timeline buckets per discrete page.
pub const DEFAULT_ITEMS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "CLT_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config file not found: '{0}'")]
    NotFound(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration.
///
/// Accessors apply defaults for anything the file leaves unset.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed file contents
    pub feed: FeedConfig,
    /// Path the config was loaded from (if any)
    path: Option<PathBuf>,
}

impl Config {
    /// Build a config from already-parsed contents.
    pub fn from_feed(feed: FeedConfig) -> Result<Self, ConfigError> {
        feed.validate()?;
        Ok(Self { feed, path: None })
    }

    /// Load configuration, preferring `explicit` over the default locations.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing, or if a config file
    /// exists but cannot be parsed or fails validation. Missing default
    /// locations are not an error (defaults are used).
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            return Self::load_file(path);
        }

        match Self::discover() {
            Some(path) => Self::load_file(&path),
            None => {
                tracing::debug!("no config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a specific config file.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let feed = Self::read_feed_config(path)?;
        feed.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(Self {
            feed,
            path: Some(path.to_path_buf()),
        })
    }

    /// Find the first existing config file in the default locations.
    fn discover() -> Option<PathBuf> {
        // 1. Check $CLT_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/changelog-timeline/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("changelog-timeline/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.changelog-timeline/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".changelog-timeline/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    /// Read and parse a config file.
    fn read_feed_config(path: &Path) -> Result<FeedConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical config path.
    ///
    /// Returns `~/.changelog-timeline/config.toml`.
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".changelog-timeline/config.toml"))
    }

    /// Write a config file atomically.
    ///
    /// Creates parent directories if needed, writes to a temp file in the
    /// same directory and renames it into place.
    pub fn write(path: &Path, config: &FeedConfig) -> Result<(), ConfigError> {
        config.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents =
            toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Site title used in meta titles.
    ///
    /// Defaults to "Twine Changelog".
    pub fn site_title(&self) -> &str {
        self.feed.site_title.as_deref().unwrap_or(DEFAULT_SITE_TITLE)
    }

    /// Items per discrete page.
    ///
    /// Defaults to 10. Zero is rejected at load time, so the fallback only
    /// covers configs built without validation.
    pub fn items_per_page(&self) -> NonZeroUsize {
        self.feed
            .items_per_page
            .and_then(NonZeroUsize::new)
            .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
    }

    /// Granularity a new session starts in.
    ///
    /// Defaults to weeks.
    pub fn default_view(&self) -> Granularity {
        self.feed.default_view.unwrap_or_default()
    }

    /// Route segment names with defaults applied.
    pub fn route_names(&self) -> RouteNames {
        let mut names = RouteNames::default();
        if let Some(routes) = &self.feed.routes {
            if let Some(s) = &routes.detail_segment {
                names.detail = s.clone();
            }
            if let Some(s) = &routes.years_segment {
                names.years = s.clone();
            }
            if let Some(s) = &routes.months_segment {
                names.months = s.clone();
            }
            if let Some(s) = &routes.page_segment {
                names.page = s.clone();
            }
        }
        names
    }

    /// Get the path the config was loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}
