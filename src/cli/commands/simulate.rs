//! simulate command - Replay navigation events against a fresh session
//!
//! Stands in for a router: the page is mounted with the given hash, then
//! each event is fed to the synchronizer (or to the stores directly, for
//! user interactions) and the session state printed after it.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context as _, Result};
use serde::Serialize;

use crate::cli::Context;
use crate::core::types::Granularity;
use crate::routing::{RecordingViewport, RouteNames, RouteSynchronizer};
use crate::state::{Session, SessionSnapshot};
use crate::ui::output::{self, Verbosity};

/// One replayable event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimEvent {
    Start(String),
    Complete(String),
    /// Start immediately followed by complete
    Navigate(String),
    Error(String),
    /// Explicit click on the timeline switcher
    Select(Granularity),
    /// Arm the entrance animation
    Animate,
    /// Consume the entrance animation
    Consume,
}

impl FromStr for SimEvent {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "animate" => return Ok(SimEvent::Animate),
            "consume" => return Ok(SimEvent::Consume),
            _ => {}
        }

        let (kind, arg) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("Unknown event '{}'", s))?;
        if arg.is_empty() {
            bail!("Event '{}' needs an argument", kind);
        }

        let arg = arg.to_string();
        match kind {
            "start" => Ok(SimEvent::Start(arg)),
            "complete" => Ok(SimEvent::Complete(arg)),
            "nav" => Ok(SimEvent::Navigate(arg)),
            "error" => Ok(SimEvent::Error(arg)),
            "select" => {
                let view = arg
                    .parse::<Granularity>()
                    .with_context(|| format!("Invalid event '{}'", s))?;
                Ok(SimEvent::Select(view))
            }
            _ => bail!("Unknown event kind '{}'", kind),
        }
    }
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::Start(url) => write!(f, "start {}", url),
            SimEvent::Complete(url) => write!(f, "complete {}", url),
            SimEvent::Navigate(url) => write!(f, "nav {}", url),
            SimEvent::Error(url) => write!(f, "error {}", url),
            SimEvent::Select(view) => write!(f, "select {}", view),
            SimEvent::Animate => f.write_str("animate"),
            SimEvent::Consume => f.write_str("consume"),
        }
    }
}

/// State after one replayed event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimStep {
    pub event: String,
    #[serde(flatten)]
    pub state: SessionSnapshot,
    /// Scroll-to-top calls so far
    pub scrolls: usize,
    /// For `consume`: whether an animation was pending
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed: Option<bool>,
}

/// Replay `events` against a session mounted with `hash`.
///
/// The mount rule decides the starting view (no hash means weeks), so the
/// configured `default_view` plays no part here. Pure apart from logging;
/// used by the command and by tests.
pub fn replay(
    routes: RouteNames,
    hash: Option<&str>,
    events: &[SimEvent],
) -> Vec<SimStep> {
    let session = Session::new();
    let viewport = Arc::new(RecordingViewport::new());
    let sync = RouteSynchronizer::with_viewport(session.clone(), routes, Arc::clone(&viewport));

    let mut steps = Vec::with_capacity(events.len() + 1);
    let step = |event: String, consumed: Option<bool>| SimStep {
        event,
        state: session.snapshot(),
        scrolls: viewport.scroll_count(),
        consumed,
    };

    sync.mount(hash);
    steps.push(step(format!("mount {}", hash.unwrap_or("(no hash)")), None));

    for event in events {
        let mut consumed = None;
        match event {
            SimEvent::Start(url) => {
                sync.start(url);
            }
            SimEvent::Complete(url) => {
                sync.complete(url);
            }
            SimEvent::Navigate(url) => {
                sync.start(url);
                sync.complete(url);
            }
            SimEvent::Error(url) => sync.fail(url),
            SimEvent::Select(view) => session.timeline().set_view(*view),
            SimEvent::Animate => {
                session.animate().request();
            }
            SimEvent::Consume => consumed = Some(session.animate().take_and_reset()),
        }
        steps.push(step(event.to_string(), consumed));
    }

    steps
}

/// Replay events and print the state after each.
pub fn simulate(ctx: &Context, hash: Option<&str>, events: &[String], json: bool) -> Result<()> {
    let config = ctx.load_config()?;

    let events = events
        .iter()
        .map(|raw| raw.parse::<SimEvent>())
        .collect::<Result<Vec<_>>>()?;

    let steps = replay(config.route_names(), hash, &events);

    if json {
        return output::json(&steps);
    }

    let verbosity = ctx.verbosity();
    for (i, step) in steps.iter().enumerate() {
        let is_last = i + 1 == steps.len();
        if verbosity == Verbosity::Quiet && !is_last {
            continue;
        }
        let mut line = format!(
            "{:<44} {} scrolls={}",
            step.event,
            output::format_snapshot(&step.state),
            step.scrolls
        );
        if let Some(consumed) = step.consumed {
            line.push_str(if consumed { " (animated)" } else { " (nothing pending)" });
        }
        // In quiet mode only the final state is printed.
        println!("{}", line);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(raw: &[&str]) -> Vec<SimEvent> {
        raw.iter().map(|s| s.parse().unwrap()).collect()
    }

    fn last(steps: &[SimStep]) -> &SimStep {
        steps.last().unwrap()
    }

    #[test]
    fn parses_events() {
        assert_eq!("animate".parse::<SimEvent>().unwrap(), SimEvent::Animate);
        assert_eq!(
            "start:/changelogs/2023/years".parse::<SimEvent>().unwrap(),
            SimEvent::Start("/changelogs/2023/years".to_string())
        );
        assert_eq!(
            "select:months".parse::<SimEvent>().unwrap(),
            SimEvent::Select(Granularity::Months)
        );
        // URLs may themselves contain colons.
        assert_eq!(
            "nav:https://example.com/page/2#years".parse::<SimEvent>().unwrap(),
            SimEvent::Navigate("https://example.com/page/2#years".to_string())
        );
    }

    #[test]
    fn rejects_bad_events() {
        assert!("jump".parse::<SimEvent>().is_err());
        assert!("start:".parse::<SimEvent>().is_err());
        assert!("select:days".parse::<SimEvent>().is_err());
        assert!("teleport:/x".parse::<SimEvent>().is_err());
    }

    #[test]
    fn mount_without_hash_starts_in_weeks() {
        let steps = replay(RouteNames::default(), None, &[]);
        assert_eq!(steps[0].state.view, Granularity::Weeks);
        assert_eq!(steps[0].event, "mount (no hash)");
    }

    #[test]
    fn mount_uses_hash() {
        let steps = replay(RouteNames::default(), Some("#months"), &[]);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].state.view, Granularity::Months);
    }

    #[test]
    fn drill_down_through_years_and_months() {
        let steps = replay(
            RouteNames::default(),
            None,
            &events(&[
                "nav:/changelogs/2023/years",
                "nav:/changelogs/2023/years/03/months",
            ]),
        );
        assert_eq!(steps[1].state.view, Granularity::Months);
        assert_eq!(steps[2].state.view, Granularity::Weeks);
        assert!(!last(&steps).state.is_loading);
        // Both targets sit under the detail segment.
        assert_eq!(last(&steps).scrolls, 0);
    }

    #[test]
    fn feed_navigation_scrolls_once_per_start() {
        let steps = replay(
            RouteNames::default(),
            None,
            &events(&["nav:/page/1", "nav:/page/2#months"]),
        );
        assert_eq!(last(&steps).scrolls, 2);
        // Paging keeps the current view; the hash only counts at mount.
        assert_eq!(last(&steps).state.view, Granularity::Weeks);
    }

    #[test]
    fn error_clears_loading() {
        let steps = replay(
            RouteNames::default(),
            None,
            &events(&["start:/page/3", "error:/page/3"]),
        );
        assert!(steps[1].state.is_loading);
        assert!(!steps[2].state.is_loading);
    }

    #[test]
    fn detail_navigation_does_not_scroll() {
        let steps = replay(
            RouteNames::default(),
            None,
            &events(&["start:/changelogs/new-editor"]),
        );
        assert_eq!(last(&steps).scrolls, 0);
    }

    #[test]
    fn animation_consumed_once() {
        let steps = replay(
            RouteNames::default(),
            None,
            &events(&["animate", "consume", "consume"]),
        );
        assert!(steps[1].state.animate_page);
        assert_eq!(steps[2].consumed, Some(true));
        assert_eq!(steps[3].consumed, Some(false));
        assert!(!last(&steps).state.animate_page);
    }
}
