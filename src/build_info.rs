//! Build information for the compiled library.
//!
//! # Examples
//!
//! ```
//! use terminus_outcome::build_info::build_info;
//!
//! let info = build_info();
//! assert_eq!(info["name"], "terminus-outcome");
//! for (key, value) in &info {
//!     println!("{key}: {value}");
//! }
//! ```
use crate::types::alloc_type::{BTreeMap, String};

/// Returns package metadata, enabled features, and how narrow-contract
/// violations are handled in this build, ordered by key.
pub fn build_info() -> BTreeMap<&'static str, String> {
    let mut info = BTreeMap::new();
    info.insert("name", env!("CARGO_PKG_NAME").into());
    info.insert("version", env!("CARGO_PKG_VERSION").into());
    info.insert("description", env!("CARGO_PKG_DESCRIPTION").into());
    info.insert("features", enabled_features());
    info.insert("narrow_checks", narrow_checks().into());
    info
}

/// How [`Narrow`](crate::policy::Narrow) handles a violation in this build.
fn narrow_checks() -> &'static str {
    if cfg!(debug_assertions) || !cfg!(feature = "std") {
        "panic"
    } else {
        "abort"
    }
}

fn enabled_features() -> String {
    let flags = [
        ("std", cfg!(feature = "std")),
        ("serde", cfg!(feature = "serde")),
        ("tracing", cfg!(feature = "tracing")),
    ];

    let mut features = String::new();
    for (name, _) in flags.iter().filter(|(_, enabled)| *enabled) {
        if !features.is_empty() {
            features.push(',');
        }
        features.push_str(name);
    }
    features
}
