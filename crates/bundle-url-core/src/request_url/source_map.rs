//! Source map URL derived from the bundle form of a request URL.

use url::Url;

use super::decompose::{BundlePath, Origin};

/// Platforms whose runtimes need an explicit `http:` scheme to fetch source maps.
const HTTP_SOURCE_MAP_PLATFORMS: [&str; 2] = ["ios", "android"];

fn forces_http(platform: &str) -> bool {
    HTTP_SOURCE_MAP_PLATFORMS.contains(&platform)
}

/// Builds the URL of the companion source map.
///
/// The type suffix is replaced with `map`; the platform path segment and the
/// raw query string are kept as requested. With a host the URL is
/// protocol-relative (`//host/path.map`), or `http://host/path.map` for
/// platforms in [`HTTP_SOURCE_MAP_PLATFORMS`]. Without one it is a bare path
/// in the same rooted/unrooted form as the request.
pub(crate) fn source_map_url(
    url: &Url,
    origin: Origin,
    path: &BundlePath<'_>,
    platform: Option<&str>,
) -> String {
    let map_path = format!("{}{}.map", path.prefix, path.stem);
    let mut out = String::with_capacity(map_path.len() + 32);

    match origin.authority(url) {
        Some(authority) => {
            if platform.is_some_and(forces_http) {
                out.push_str("http:");
            }
            out.push_str("//");
            out.push_str(authority);
            out.push_str(&map_path);
        }
        None => match origin {
            Origin::Path { rooted: false } => {
                out.push_str(map_path.strip_prefix('/').unwrap_or(&map_path));
            }
            _ => out.push_str(&map_path),
        },
    }

    if let Some(query) = url.query() {
        out.push('?');
        out.push_str(query);
    }
    out
}
