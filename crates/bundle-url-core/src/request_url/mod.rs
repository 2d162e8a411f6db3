//! Request URL to bundle options.
//!
//! A dev server hands every `.bundle`, `.bytecodebundle` or `.map` request URL
//! to [`UrlOptionParser::parse`] together with the platform names it knows.
//! The result is a fully-defaulted [`BundleOptions`] record or a
//! [`ParseError`]; no partial record is ever produced.

mod bundle_type;
mod decompose;
mod error;
mod options;
mod query;
mod source_map;

use std::collections::HashSet;

use crate::custom_options::{CustomOptionsParser, CustomTransformOptions, PrefixedTransformOptions};

pub use bundle_type::BundleType;
pub use error::{MalformedReason, ParseError};
pub use options::{BundleOptions, OptionDefaults};
pub use query::QueryParams;

use decompose::{decode, decompose, BundlePath};
use options::{BoolOptions, RECORD_FIELDS};

/// Parses request URLs with fixed option defaults and an injected custom
/// transform options parser.
///
/// Holds no mutable state; share one instance across request handlers.
pub struct UrlOptionParser {
    defaults: OptionDefaults,
    custom_options: Box<dyn CustomOptionsParser>,
}

impl Default for UrlOptionParser {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for UrlOptionParser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UrlOptionParser")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

impl UrlOptionParser {
    /// Stock defaults and `transform.*` custom options.
    pub fn new() -> Self {
        Self {
            defaults: OptionDefaults::default(),
            custom_options: Box::new(PrefixedTransformOptions::default()),
        }
    }

    pub fn with_defaults(mut self, defaults: OptionDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn with_custom_options(mut self, parser: impl CustomOptionsParser + 'static) -> Self {
        self.custom_options = Box::new(parser);
        self
    }

    pub fn defaults(&self) -> &OptionDefaults {
        &self.defaults
    }

    /// Parses `url` into bundle options.
    ///
    /// `platforms` are the names eligible for inference from the pathname
    /// (`index.ios.bundle`); a non-empty `platform` query parameter is used
    /// as-is whether or not it is listed.
    pub fn parse(
        &self,
        url: &str,
        platforms: &HashSet<String>,
    ) -> Result<BundleOptions, ParseError> {
        let malformed = |reason: MalformedReason| ParseError::malformed(url, reason);
        let (parsed, origin) =
            decompose(url).map_err(|e| malformed(MalformedReason::InvalidUrl(e)))?;
        let path = BundlePath::split(parsed.path()).map_err(malformed)?;
        let query = QueryParams::from_url(&parsed);

        let (entry_stem, platform) = match query.get("platform").filter(|p| !p.is_empty()) {
            Some(p) => (path.stem, Some(p.to_string())),
            None => match path.platform_segment(platforms).map_err(malformed)? {
                Some((rest, p)) => (rest, Some(p)),
                None => (path.stem, None),
            },
        };

        let entry_file = {
            let decoded = decode(&format!("{}{}", path.prefix, entry_stem)).map_err(malformed)?;
            if origin.has_scheme_or_host() {
                decoded
            } else {
                format!("./{}", decoded.trim_start_matches('/'))
            }
        };
        let source_map_url =
            source_map::source_map_url(&parsed, origin, &path, platform.as_deref());
        let flags = BoolOptions::from_query(&query, &self.defaults);
        let custom_transform_options = self
            .custom_options
            .parse(&query)
            .map(without_record_fields)
            .map_err(|e| ParseError::CustomOptions(e.into()))?;

        tracing::debug!(
            url,
            entry_file = %entry_file,
            bundle_type = ?path.suffix.bundle_type(),
            platform = platform.as_deref().unwrap_or("-"),
            "parsed bundle request"
        );

        Ok(BundleOptions {
            entry_file,
            bundle_type: path.suffix.bundle_type(),
            platform,
            source_map_url,
            hot: true,
            bytecode: path.suffix.is_bytecode(),
            dev: flags.dev,
            minify: flags.minify,
            exclude_source: flags.exclude_source,
            inline_source_map: flags.inline_source_map,
            run_module: flags.run_module,
            modules_only: flags.modules_only,
            shallow: flags.shallow,
            custom_transform_options,
        })
    }
}

/// Parses `url` with the stock defaults and `transform.*` custom options.
pub fn parse_options_from_url(
    url: &str,
    platforms: &HashSet<String>,
) -> Result<BundleOptions, ParseError> {
    UrlOptionParser::new().parse(url, platforms)
}

fn without_record_fields(mut custom: CustomTransformOptions) -> CustomTransformOptions {
    custom.retain(|key, _| {
        let shadows = RECORD_FIELDS.contains(&key.as_str());
        if shadows {
            tracing::debug!(
                key = %key,
                "dropping custom transform option that shadows a record field"
            );
        }
        !shadows
    });
    custom
}
