//! CLI command handlers.

mod completions;
mod config;
mod parse;

pub use completions::{run_completions, run_man};
pub use config::run_config;
pub use parse::run_parse;

#[cfg(test)]
pub(crate) use parse::{parse_with_config, render};
