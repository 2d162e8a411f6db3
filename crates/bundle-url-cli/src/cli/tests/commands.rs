//! Tests for command handlers that do not touch the config directory.

use bundle_url_core::config::BundleUrlConfig;
use bundle_url_core::ParseError;

use crate::cli::commands::{parse_with_config, render};

#[test]
fn parse_uses_configured_platforms() {
    let cfg = BundleUrlConfig::default();
    let opts = parse_with_config(&cfg, "http://localhost/index.android.bundle", vec![]).unwrap();
    assert_eq!(opts.platform.as_deref(), Some("android"));
    assert_eq!(opts.source_map_url, "http://localhost/index.android.map");
}

#[test]
fn platform_flags_replace_configured_set() {
    let cfg = BundleUrlConfig::default();
    let opts = parse_with_config(
        &cfg,
        "http://localhost/index.android.bundle",
        vec!["vr".to_string()],
    )
    .unwrap();
    assert_eq!(opts.platform, None);
    assert_eq!(opts.entry_file, "/index.android");
}

#[test]
fn malformed_request_is_reported() {
    let cfg = BundleUrlConfig::default();
    let err = parse_with_config(&cfg, "http://localhost/index.js", vec![]).unwrap_err();
    let parse_err = err.downcast_ref::<ParseError>().unwrap();
    assert!(parse_err.is_client_error());
}

#[test]
fn render_compact_and_pretty() {
    let cfg = BundleUrlConfig::default();
    let opts = parse_with_config(&cfg, "my/bundle.bundle", vec![]).unwrap();
    let compact = render(&opts, true).unwrap();
    assert!(!compact.contains('\n'));
    assert!(compact.contains("\"entryFile\":\"./my/bundle\""));
    let pretty = render(&opts, false).unwrap();
    assert!(pretty.contains('\n'));
    let value: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(value["hot"], serde_json::json!(true));
}
