//! months command - List month buckets and drill into one

use std::path::Path;

use anyhow::{bail, Context as _, Result};
use serde::Serialize;

use crate::cli::Context;
use crate::core::types::Granularity;
use crate::feed::months::{load_months, order_months, select_month, MonthCard, PreviewLayout};
use crate::pagination::PageLink;
use crate::state::Session;
use crate::ui::output::{self, Verbosity};

#[derive(Debug, Serialize)]
struct MonthsReport<'a> {
    months: &'a [MonthCard],
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<Selection>,
}

#[derive(Debug, Serialize)]
struct Selection {
    key: String,
    view: Granularity,
    link: Option<PageLink>,
}

/// List month buckets from `file`, newest first.
pub fn months(ctx: &Context, file: &Path, select: Option<&str>, json: bool) -> Result<()> {
    let config = ctx.load_config()?;
    let buckets = load_months(file)
        .with_context(|| format!("Failed to load months from {}", file.display()))?;
    let cards = order_months(buckets);

    let selected = match select {
        Some(key) => {
            let Some(card) = cards.iter().find(|c| c.key == key) else {
                bail!("No month '{}' in {}", key, file.display());
            };
            let session = Session::with_view(config.default_view());
            let link = select_month(&session, card);
            Some(Selection {
                key: card.key.clone(),
                view: session.timeline().view(),
                link,
            })
        }
        None => None,
    };

    if json {
        return output::json(&MonthsReport {
            months: &cards,
            selected,
        });
    }

    let verbosity = ctx.verbosity();
    if cards.is_empty() {
        output::print("No months.", verbosity);
    }
    for card in &cards {
        output::print(describe(card), verbosity);
        if verbosity == Verbosity::Debug {
            let images: Vec<_> = card.images.iter().map(String::as_str).collect();
            output::print(output::format_list(&images, "    "), verbosity);
        }
    }

    if let Some(selection) = selected {
        output::print(format!("selected {} (view {})", selection.key, selection.view), verbosity);
        match selection.link {
            Some(link) => println!("{}", output::format_link("weeks", &link)),
            None => output::warn(
                format!("month '{}' has no entries to link to", selection.key),
                verbosity,
            ),
        }
    }

    Ok(())
}

fn describe(card: &MonthCard) -> String {
    let layout = match card.layout {
        PreviewLayout::Empty => "empty",
        PreviewLayout::Single => "single",
        PreviewLayout::Pair => "pair",
        PreviewLayout::Hero => "hero",
    };
    let mut line = format!(
        "{:<10} {:>3} entries  {}",
        card.label,
        card.entries.len(),
        layout
    );
    if let Some(extra) = card.overflow {
        line.push_str(&format!(" +{}", extra));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::months::{MonthBuckets, MonthlyChangelog};

    fn entry(slug: &str) -> MonthlyChangelog {
        MonthlyChangelog {
            image_url: format!("{slug}.png"),
            slug: slug.to_string(),
            published_at: "2023-03-01".to_string(),
            weekly_view_page: 0,
        }
    }

    #[test]
    fn describes_hero_with_overflow() {
        let mut buckets = MonthBuckets::new();
        buckets.insert(
            "2023-03".to_string(),
            ["a", "b", "c", "d", "e"].iter().map(|s| entry(s)).collect(),
        );
        let cards = order_months(buckets);
        assert_eq!(describe(&cards[0]), "Mar 2023     5 entries  hero +2");
    }

    #[test]
    fn describes_empty_month() {
        let mut buckets = MonthBuckets::new();
        buckets.insert("2022-11".to_string(), vec![]);
        let cards = order_months(buckets);
        assert_eq!(describe(&cards[0]), "Nov 2022     0 entries  empty");
    }
}
