// SPDX-License-Identifier: MIT OR Apache-2.0

use tracing::debug;

use crate::{AccessLevel, AccessMap, PermissionsRecord, Visibility};

/// Change resulting from picking a visibility in the data pack list filter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterChange {
    /// The selected visibility is already active.
    Unchanged,

    /// Only the visibility changes, grants are kept.
    Visibility(Visibility),

    /// The filter is replaced by the given record.
    Replace(PermissionsRecord),
}

impl FilterChange {
    /// Apply the change to the current filter record.
    pub fn apply(self, mut current: PermissionsRecord) -> PermissionsRecord {
        match self {
            FilterChange::Unchanged => current,
            FilterChange::Visibility(value) => {
                current.value = value;
                current
            }
            FilterChange::Replace(record) => record,
        }
    }
}

/// Decide how the filter changes when `selected` is picked.
///
/// Any selection other than private resets the filter to public without grants. Member and group
/// selections are made afterwards through a share session.
pub fn select_visibility(current: &PermissionsRecord, selected: Visibility) -> FilterChange {
    if selected == current.value {
        return FilterChange::Unchanged;
    }

    match selected {
        Visibility::Private => FilterChange::Visibility(Visibility::Private),
        Visibility::Shared | Visibility::Public => {
            FilterChange::Replace(PermissionsRecord::new(Visibility::Public))
        }
    }
}

/// Set the visibility of a persisted record from the status page drop-down.
///
/// Shared and public only replace the value. Going private drops every group and every member
/// except `username`, who keeps their entry only when they hold admin access.
pub fn change_visibility(
    mut permissions: PermissionsRecord,
    value: Visibility,
    username: Option<&str>,
) -> PermissionsRecord {
    permissions.value = value;
    if value != Visibility::Private {
        return permissions;
    }

    let admin = username.filter(|username| {
        permissions.members.get(*username) == Some(&AccessLevel::Admin)
    });

    permissions.groups = AccessMap::new();
    permissions.members = AccessMap::new();
    if let Some(username) = admin {
        permissions.members.insert(username.to_string(), AccessLevel::Admin);
    }

    debug!(kept_admin = admin.is_some(), "make private");
    permissions
}
