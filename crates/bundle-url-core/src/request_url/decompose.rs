//! Splits a request URL into origin, pathname parts and type suffix.

use std::collections::HashSet;

use percent_encoding::percent_decode_str;
use url::{Position, Url};

use super::bundle_type::TypeSuffix;
use super::MalformedReason;

/// Base used to resolve bare `path?query` requests (HMR clients send those).
const SYNTHETIC_BASE: &str = "http://localhost/";

/// How the request URL was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Origin {
    /// `scheme:...`
    Absolute,
    /// `//host/...` (no scheme, but a host).
    NetworkPath,
    /// Bare path; `rooted` when it started with `/`.
    Path { rooted: bool },
}

impl Origin {
    /// `host[:port]` of the request, if it was written with one.
    pub(crate) fn authority<'u>(&self, url: &'u Url) -> Option<&'u str> {
        match self {
            Origin::Path { .. } => None,
            Origin::Absolute | Origin::NetworkPath => url
                .host_str()
                .filter(|h| !h.is_empty())
                .map(|_| &url[Position::BeforeHost..Position::AfterPort]),
        }
    }

    pub(crate) fn has_scheme_or_host(&self) -> bool {
        !matches!(self, Origin::Path { .. })
    }
}

pub(crate) fn decompose(input: &str) -> Result<(Url, Origin), url::ParseError> {
    match Url::parse(input) {
        Ok(url) => Ok((url, Origin::Absolute)),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let url = Url::parse(SYNTHETIC_BASE)?.join(input)?;
            let origin = if input.starts_with("//") {
                Origin::NetworkPath
            } else {
                Origin::Path {
                    rooted: input.starts_with('/'),
                }
            };
            Ok((url, origin))
        }
        Err(e) => Err(e),
    }
}

/// Percent-encoded pathname split around its type suffix.
///
/// `/my/bundle.ios.bundle` becomes prefix `/my/`, stem `bundle.ios`, suffix `Bundle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BundlePath<'a> {
    /// Everything up to and including the last `/`.
    pub prefix: &'a str,
    /// File name without the type suffix.
    pub stem: &'a str,
    pub suffix: TypeSuffix,
}

impl<'a> BundlePath<'a> {
    pub(crate) fn split(path: &'a str) -> Result<Self, MalformedReason> {
        let file_start = path.rfind('/').map_or(0, |i| i + 1);
        let (prefix, file) = path.split_at(file_start);
        let (stem, ext) = file
            .rsplit_once('.')
            .filter(|(stem, _)| !stem.is_empty())
            .ok_or(MalformedReason::MissingSuffix)?;
        let suffix = TypeSuffix::from_extension(ext)
            .ok_or_else(|| MalformedReason::UnknownSuffix(ext.to_string()))?;
        Ok(Self {
            prefix,
            stem,
            suffix,
        })
    }

    /// The dot-segment right before the type suffix, when it names a known platform.
    ///
    /// Returns the stem without that segment and the platform name.
    pub(crate) fn platform_segment(
        &self,
        platforms: &HashSet<String>,
    ) -> Result<Option<(&'a str, String)>, MalformedReason> {
        let Some((rest, candidate)) = self.stem.rsplit_once('.') else {
            return Ok(None);
        };
        let candidate = decode(candidate)?;
        if rest.is_empty() || !platforms.contains(&candidate) {
            return Ok(None);
        }
        Ok(Some((rest, candidate)))
    }
}

/// Percent-decodes a path fragment; escapes that are not valid UTF-8 are rejected.
pub(crate) fn decode(s: &str) -> Result<String, MalformedReason> {
    percent_decode_str(s)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| MalformedReason::InvalidEncoding(s.to_string()))
}
