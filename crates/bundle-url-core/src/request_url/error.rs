//! Error types for request URL parsing.

/// Why a request URL could not be turned into bundle options.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedReason {
    #[error("invalid URL syntax: {0}")]
    InvalidUrl(url::ParseError),
    /// The last path segment has no `.bundle`/`.bytecodebundle`/`.map` suffix at all.
    #[error("missing bundle type suffix")]
    MissingSuffix,
    #[error("unrecognized bundle type suffix `.{0}`")]
    UnknownSuffix(String),
    /// A percent-escape in the path does not decode to UTF-8.
    #[error("path `{0}` is not valid percent-encoded UTF-8")]
    InvalidEncoding(String),
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("malformed bundle request {url:?}: {reason}")]
    MalformedRequest { url: String, reason: MalformedReason },
    /// The injected custom transform options parser failed; its error is kept as the source.
    #[error("custom transform options parser failed")]
    CustomOptions(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl ParseError {
    pub(crate) fn malformed(url: &str, reason: MalformedReason) -> Self {
        ParseError::MalformedRequest {
            url: url.to_string(),
            reason,
        }
    }

    /// True when the request itself is at fault (an HTTP layer answers 4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(self, ParseError::MalformedRequest { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_malformed() {
        let err = ParseError::malformed(
            "http://localhost/index.js",
            MalformedReason::UnknownSuffix("js".to_string()),
        );
        assert_eq!(
            err.to_string(),
            "malformed bundle request \"http://localhost/index.js\": unrecognized bundle type suffix `.js`"
        );
        assert!(err.is_client_error());
    }

    #[test]
    fn custom_options_keeps_source() {
        let err = ParseError::CustomOptions(anyhow::anyhow!("bad transform option").into());
        assert!(!err.is_client_error());
        assert_eq!(err.to_string(), "custom transform options parser failed");
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "bad transform option");
        assert_eq!(
            format!("{:#}", anyhow::Error::from(err)),
            "custom transform options parser failed: bad transform option"
        );
    }
}
