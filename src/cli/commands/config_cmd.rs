//! config command - Inspect or create configuration

use std::path::PathBuf;

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::config::{Config, FeedConfig, RouteSegments, DEFAULT_SITE_TITLE};
use crate::ui::output;

/// List effective configuration values.
pub fn list(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let verbosity = ctx.verbosity();
    let routes = config.route_names();

    match config.loaded_from() {
        Some(path) => output::print(format!("# {}", path.display()), verbosity),
        None => output::print("# defaults (no config file)", verbosity),
    }

    let lines = [
        format!("site_title = {}", config.site_title()),
        format!("items_per_page = {}", config.items_per_page()),
        format!("default_view = {}", config.default_view()),
        format!("routes.detail_segment = {}", routes.detail),
        format!("routes.years_segment = {}", routes.years),
        format!("routes.months_segment = {}", routes.months),
        format!("routes.page_segment = {}", routes.page),
    ];
    println!("{}", lines.join("\n"));

    Ok(())
}

/// Print the path of the loaded config, or where `init` would write one.
pub fn path(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let path = match config.loaded_from() {
        Some(path) => path.to_path_buf(),
        None => target_path(ctx)?,
    };
    println!("{}", path.display());
    Ok(())
}

/// Write a config file holding the default values.
pub fn init(ctx: &Context, force: bool) -> Result<()> {
    let path = target_path(ctx)?;

    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    let defaults = Config::default();
    let routes = defaults.route_names();
    let feed = FeedConfig {
        site_title: Some(DEFAULT_SITE_TITLE.to_string()),
        items_per_page: Some(defaults.items_per_page().get()),
        default_view: Some(defaults.default_view()),
        routes: Some(RouteSegments {
            detail_segment: Some(routes.detail),
            years_segment: Some(routes.years),
            months_segment: Some(routes.months),
            page_segment: Some(routes.page),
        }),
    };

    Config::write(&path, &feed).context("Failed to write config")?;
    output::print(format!("Wrote {}", path.display()), ctx.verbosity());

    Ok(())
}

fn target_path(ctx: &Context) -> Result<PathBuf> {
    match &ctx.config_path {
        Some(path) => Ok(path.clone()),
        None => Config::default_config_path().context("Failed to locate config directory"),
    }
}
