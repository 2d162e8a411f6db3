//! Custom transform options: extra, transformer-specific values carried in
//! the request query and merged into the bundle options record.

mod prefixed;

use std::collections::BTreeMap;

use anyhow::Result;

use crate::request_url::QueryParams;

pub use prefixed::PrefixedTransformOptions;

/// Options contributed by a [`CustomOptionsParser`], keyed by option name.
pub type CustomTransformOptions = BTreeMap<String, serde_json::Value>;

/// Maps request query parameters to extra transform options.
///
/// Implementations must not keep state between calls; one parser serves all
/// concurrent requests.
pub trait CustomOptionsParser: Send + Sync {
    fn parse(&self, query: &QueryParams) -> Result<CustomTransformOptions>;
}

impl<F> CustomOptionsParser for F
where
    F: Fn(&QueryParams) -> Result<CustomTransformOptions> + Send + Sync,
{
    fn parse(&self, query: &QueryParams) -> Result<CustomTransformOptions> {
        self(query)
    }
}

/// Contributes nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoCustomOptions;

impl CustomOptionsParser for NoCustomOptions {
    fn parse(&self, _query: &QueryParams) -> Result<CustomTransformOptions> {
        Ok(CustomTransformOptions::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_custom_options_is_empty() {
        let q: QueryParams = [("transform.foo", "bar")].into_iter().collect();
        assert!(NoCustomOptions.parse(&q).unwrap().is_empty());
    }

    #[test]
    fn closures_are_parsers() {
        let parser = |q: &QueryParams| -> Result<CustomTransformOptions> {
            let mut out = CustomTransformOptions::new();
            out.insert("count".to_string(), serde_json::json!(q.len()));
            Ok(out)
        };
        let q: QueryParams = [("a", "1"), ("b", "2")].into_iter().collect();
        let opts = CustomOptionsParser::parse(&parser, &q).unwrap();
        assert_eq!(opts.get("count"), Some(&serde_json::json!(2)));
    }
}
