//! The bundle options record and its boolean option defaults.

use serde::{Deserialize, Serialize};

use super::{BundleType, QueryParams};
use crate::custom_options::CustomTransformOptions;

/// Serialized names of every field a [`BundleOptions`] sets itself.
/// Custom transform options may not reuse them.
pub(crate) const RECORD_FIELDS: &[&str] = &[
    "bundleType",
    "bytecode",
    "dev",
    "entryFile",
    "excludeSource",
    "hot",
    "inlineSourceMap",
    "minify",
    "modulesOnly",
    "platform",
    "runModule",
    "shallow",
    "sourceMapUrl",
];

/// Values used for boolean options whose query parameter is absent or not
/// exactly `"true"`/`"false"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionDefaults {
    pub dev: bool,
    pub minify: bool,
    pub exclude_source: bool,
    pub inline_source_map: bool,
    pub run_module: bool,
    pub modules_only: bool,
    pub shallow: bool,
}

impl Default for OptionDefaults {
    fn default() -> Self {
        Self {
            dev: true,
            minify: false,
            exclude_source: false,
            inline_source_map: false,
            run_module: true,
            modules_only: false,
            shallow: false,
        }
    }
}

/// Bundling options decoded from one request URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleOptions {
    pub entry_file: String,
    pub bundle_type: BundleType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    pub source_map_url: String,
    pub hot: bool,
    pub bytecode: bool,
    pub dev: bool,
    pub minify: bool,
    pub exclude_source: bool,
    pub inline_source_map: bool,
    pub run_module: bool,
    pub modules_only: bool,
    pub shallow: bool,
    /// Contributions of the custom transform options parser, flattened into
    /// the serialized record. Never contains a name from the record itself.
    #[serde(flatten)]
    pub custom_transform_options: CustomTransformOptions,
}

/// Boolean option flags read from the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BoolOptions {
    pub dev: bool,
    pub minify: bool,
    pub exclude_source: bool,
    pub inline_source_map: bool,
    pub run_module: bool,
    pub modules_only: bool,
    pub shallow: bool,
}

impl BoolOptions {
    pub(crate) fn from_query(query: &QueryParams, defaults: &OptionDefaults) -> Self {
        Self {
            dev: bool_param(query, "dev", defaults.dev),
            minify: bool_param(query, "minify", defaults.minify),
            exclude_source: bool_param(query, "excludeSource", defaults.exclude_source),
            inline_source_map: bool_param(query, "inlineSourceMap", defaults.inline_source_map),
            run_module: bool_param(query, "runModule", defaults.run_module),
            modules_only: bool_param(query, "modulesOnly", defaults.modules_only),
            shallow: bool_param(query, "shallow", defaults.shallow),
        }
    }
}

/// Only the exact literals `true` and `false` override the default.
fn bool_param(query: &QueryParams, name: &str, default: bool) -> bool {
    match query.get(name) {
        Some("true") => true,
        Some("false") => false,
        _ => default,
    }
}
