//! Bundle type detection from the pathname's type suffix.

use serde::{Deserialize, Serialize};

/// Kind of artifact the client asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundleType {
    Bundle,
    Map,
}

/// Terminal type suffix of a request pathname (`.bundle`, `.bytecodebundle`, `.map`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TypeSuffix {
    Bundle,
    BytecodeBundle,
    Map,
}

impl TypeSuffix {
    pub(crate) fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            "bundle" => Some(Self::Bundle),
            "bytecodebundle" => Some(Self::BytecodeBundle),
            "map" => Some(Self::Map),
            _ => None,
        }
    }

    pub(crate) fn bundle_type(self) -> BundleType {
        match self {
            Self::Bundle | Self::BytecodeBundle => BundleType::Bundle,
            Self::Map => BundleType::Map,
        }
    }

    pub(crate) fn is_bytecode(self) -> bool {
        self == Self::BytecodeBundle
    }
}
