// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities.
use crate::{AccessLevel, AccessMap, PermissionsRecord, Visibility};

pub fn setup_logging() {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .try_init();
    }
}

/// Build an access map from name/level pairs.
pub fn access_map(entries: &[(&str, AccessLevel)]) -> AccessMap {
    entries
        .iter()
        .map(|(name, level)| (name.to_string(), *level))
        .collect()
}

/// Build a record from a visibility and member/group pairs.
pub fn record(
    value: Visibility,
    members: &[(&str, AccessLevel)],
    groups: &[(&str, AccessLevel)],
) -> PermissionsRecord {
    PermissionsRecord {
        value,
        members: access_map(members),
        groups: access_map(groups),
    }
}
