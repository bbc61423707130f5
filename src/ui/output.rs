//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Output is formatted consistently and respects the quiet flag.
//! When `--json` is enabled, output is machine-readable JSON. Diagnostics
//! go through `tracing`; this module only writes what the user asked for.

use std::fmt::Display;

use serde::Serialize;

use crate::pagination::{PageLink, PaginationControls};
use crate::state::SessionSnapshot;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Print a warning message (respects quiet mode).
pub fn warn(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        eprintln!("warning: {}", message);
    }
}

/// Print a value as pretty JSON (always shown; JSON output is the result).
pub fn json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Format a page link for display.
pub fn format_link(label: &str, link: &PageLink) -> String {
    format!("{}: {}", label, link.href)
}

/// Format pagination controls, one control per line.
pub fn format_controls(controls: &PaginationControls) -> String {
    match controls {
        PaginationControls::Hidden => "controls: hidden".to_string(),
        PaginationControls::LoadMore { link } => format_link("load more", link),
        PaginationControls::Pager { previous, next } => {
            let mut lines = Vec::new();
            if let Some(link) = previous {
                lines.push(format_link("previous", link));
            }
            if let Some(link) = next {
                lines.push(format_link("next", link));
            }
            if lines.is_empty() {
                lines.push("controls: none".to_string());
            }
            lines.join("\n")
        }
    }
}

/// Format a session snapshot on one line.
pub fn format_snapshot(snapshot: &SessionSnapshot) -> String {
    format!(
        "view={} loading={} animate={}",
        snapshot.view, snapshot.is_loading, snapshot.animate_page
    )
}

/// Format a list of items.
pub fn format_list<T: Display>(items: &[T], prefix: &str) -> String {
    items
        .iter()
        .map(|item| format!("{}{}", prefix, item))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Granularity;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn controls_formatting() {
        let load_more = PaginationControls::derive(0, true, Granularity::Weeks, None);
        assert_eq!(format_controls(&load_more), "load more: /page/1#weeks");

        let pager = PaginationControls::derive(2, true, Granularity::Months, None);
        assert_eq!(
            format_controls(&pager),
            "previous: /page/1#months\nnext: /page/3#months"
        );

        let empty = PaginationControls::derive(0, false, Granularity::Weeks, None);
        assert_eq!(format_controls(&empty), "controls: none");
    }

    #[test]
    fn snapshot_formatting() {
        let snapshot = SessionSnapshot {
            view: Granularity::Years,
            is_loading: true,
            animate_page: false,
        };
        assert_eq!(
            format_snapshot(&snapshot),
            "view=years loading=true animate=false"
        );
    }

    #[test]
    fn list_formatting() {
        assert_eq!(format_list(&["a", "b"], "- "), "- a\n- b");
    }
}
