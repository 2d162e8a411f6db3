//! Decoded query-string mapping.

use std::collections::BTreeMap;

use url::Url;

/// Query parameters of a request URL, form-urlencoded decoded.
///
/// Repeated names resolve to the last occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    comps: BTreeMap<String, String>,
}

impl QueryParams {
    pub(crate) fn from_url(url: &Url) -> Self {
        url.query_pairs()
            .map(|(name, value)| (name.into_owned(), value.into_owned()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.comps.get(name).map(|v| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.comps.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.comps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut comps = BTreeMap::new();
        for (name, value) in iter {
            comps.insert(name.into(), value.into());
        }
        Self { comps }
    }
}
