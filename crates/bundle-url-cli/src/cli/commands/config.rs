//! `bundle-url config` – show where the config lives and what it contains.

use std::path::Path;

use anyhow::Result;
use bundle_url_core::config::BundleUrlConfig;

pub fn run_config(path: &Path, cfg: &BundleUrlConfig) -> Result<()> {
    println!("# {}", path.display());
    print!("{}", toml::to_string_pretty(cfg)?);
    Ok(())
}
