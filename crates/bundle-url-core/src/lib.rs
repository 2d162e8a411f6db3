pub mod config;
pub mod logging;

pub mod custom_options;
pub mod request_url;

pub use request_url::{
    parse_options_from_url, BundleOptions, BundleType, MalformedReason, OptionDefaults, ParseError,
    QueryParams, UrlOptionParser,
};
