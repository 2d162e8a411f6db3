//! `bundle-url parse <url>` – decode a request URL into bundle options.

use std::collections::HashSet;

use anyhow::Result;
use bundle_url_core::config::BundleUrlConfig;
use bundle_url_core::BundleOptions;

/// Parses `url` with the configured parser; `platforms` replaces the configured set when non-empty.
pub fn run_parse(
    cfg: &BundleUrlConfig,
    url: &str,
    platforms: Vec<String>,
    compact: bool,
) -> Result<()> {
    let options = parse_with_config(cfg, url, platforms)?;
    println!("{}", render(&options, compact)?);
    Ok(())
}

pub(crate) fn parse_with_config(
    cfg: &BundleUrlConfig,
    url: &str,
    platforms: Vec<String>,
) -> Result<BundleOptions> {
    let platforms: HashSet<String> = if platforms.is_empty() {
        cfg.platform_set()
    } else {
        platforms.into_iter().collect()
    };
    let options = cfg.parser().parse(url, &platforms)?;
    tracing::info!("parsed {} -> entry {}", url, options.entry_file);
    Ok(options)
}

pub(crate) fn render(options: &BundleOptions, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(options)?
    } else {
        serde_json::to_string_pretty(options)?
    };
    Ok(json)
}
