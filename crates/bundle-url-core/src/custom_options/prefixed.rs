//! `transform.<name>=<value>` query parameters as custom options.

use anyhow::Result;
use serde_json::Value;

use super::{CustomOptionsParser, CustomTransformOptions};
use crate::request_url::QueryParams;

const DEFAULT_PREFIX: &str = "transform.";

/// Collects every query parameter starting with a prefix (`transform.` by
/// default) as a string-valued custom option named after the remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixedTransformOptions {
    prefix: String,
}

impl Default for PrefixedTransformOptions {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }
}

impl PrefixedTransformOptions {
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl CustomOptionsParser for PrefixedTransformOptions {
    fn parse(&self, query: &QueryParams) -> Result<CustomTransformOptions> {
        Ok(query
            .iter()
            .filter_map(|(name, value)| {
                let key = name.strip_prefix(self.prefix.as_str())?;
                (!key.is_empty()).then(|| (key.to_string(), Value::String(value.to_string())))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_prefixed_params() {
        let q: QueryParams = [
            ("transform.engine", "hermes"),
            ("transform.routerRoot", "app"),
            ("platform", "ios"),
            ("transformer", "x"),
        ]
        .into_iter()
        .collect();
        let opts = PrefixedTransformOptions::default().parse(&q).unwrap();
        assert_eq!(opts.len(), 2);
        assert_eq!(opts.get("engine"), Some(&Value::String("hermes".into())));
        assert_eq!(opts.get("routerRoot"), Some(&Value::String("app".into())));
    }

    #[test]
    fn ignores_empty_names() {
        let q: QueryParams = [("transform.", "x")].into_iter().collect();
        assert!(PrefixedTransformOptions::default().parse(&q).unwrap().is_empty());
    }

    #[test]
    fn custom_prefix() {
        let p = PrefixedTransformOptions::with_prefix("t:");
        assert_eq!(p.prefix(), "t:");
        let q: QueryParams = [("t:a", "1"), ("transform.b", "2")].into_iter().collect();
        let opts = p.parse(&q).unwrap();
        assert_eq!(opts.keys().collect::<Vec<_>>(), vec!["a"]);
    }
}
