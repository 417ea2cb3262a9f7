// SPDX-License-Identifier: MIT OR Apache-2.0

//! Editable permissions of a single shareable resource.
use tracing::{debug, trace};

use crate::record::AccessMap;
use crate::{AccessLevel, PermissionsRecord, Visibility};

/// Visibility and member/group access levels of one resource, mutated in place during an editing
/// session.
///
/// The model additionally tracks the username of the acting user. Their own entry can be moved
/// out of the member list with [`PermissionsModel::extract_current_user`] while other members are
/// bulk-edited, and written back with [`PermissionsModel::insert_current_user`].
///
/// All operations are total, removing an absent key or inserting without a prior extraction is a
/// no-op.
#[derive(Clone, Debug, Default)]
pub struct PermissionsModel {
    permissions: PermissionsRecord,
    username: Option<String>,
    user_permissions: Option<(String, AccessLevel)>,
}

impl PermissionsModel {
    /// Create a model from a persisted record, defaulting to a private record without grants.
    pub fn new(permissions: Option<PermissionsRecord>, username: Option<String>) -> Self {
        Self {
            permissions: permissions.unwrap_or_default(),
            username,
            user_permissions: None,
        }
    }

    pub fn set_permissions(&mut self, permissions: PermissionsRecord) {
        trace!(visibility = %permissions.value, "replace permissions");
        self.permissions = permissions;
    }

    /// Track the acting user. `None` stops tracking.
    pub fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_members(&mut self, members: AccessMap) {
        self.permissions.members = members;
    }

    pub fn set_groups(&mut self, groups: AccessMap) {
        self.permissions.groups = groups;
    }

    /// Grant or overwrite the access level of a single member.
    pub fn set_member_permission(&mut self, username: &str, level: AccessLevel) {
        trace!(%username, %level, "set member permission");
        self.permissions.members.insert(username.to_string(), level);
    }

    /// Remove the member's entry entirely.
    pub fn remove_member_permission(&mut self, username: &str) {
        trace!(%username, "remove member permission");
        self.permissions.members.remove(username);
    }

    /// Grant or overwrite the access level of a single group.
    pub fn set_group_permission(&mut self, groupname: &str, level: AccessLevel) {
        trace!(%groupname, %level, "set group permission");
        self.permissions.groups.insert(groupname.to_string(), level);
    }

    /// Remove the group's entry entirely.
    pub fn remove_group_permissions(&mut self, groupname: &str) {
        trace!(%groupname, "remove group permission");
        self.permissions.groups.remove(groupname);
    }

    /// Independent copy of the current record.
    pub fn permissions(&self) -> PermissionsRecord {
        self.permissions.clone()
    }

    /// Entry captured by the last [`PermissionsModel::extract_current_user`] call.
    pub fn user_permissions(&self) -> Option<(&str, AccessLevel)> {
        self.user_permissions
            .as_ref()
            .map(|(username, level)| (username.as_str(), *level))
    }

    pub fn members(&self) -> AccessMap {
        self.permissions.members.clone()
    }

    pub fn member_count(&self) -> usize {
        self.permissions.members.len()
    }

    pub fn groups(&self) -> AccessMap {
        self.permissions.groups.clone()
    }

    pub fn group_count(&self) -> usize {
        self.permissions.groups.len()
    }

    pub fn visibility(&self) -> Visibility {
        self.permissions.value
    }

    pub fn is_public(&self) -> bool {
        self.visibility() == Visibility::Public
    }

    pub fn is_private(&self) -> bool {
        self.visibility() == Visibility::Private
    }

    pub fn is_shared(&self) -> bool {
        self.visibility() == Visibility::Shared
    }

    /// Move the acting user's entry out of the member list.
    ///
    /// Does nothing when no username is tracked. When the tracked user holds no entry the member
    /// list is kept as is and a previously captured entry stays in place.
    pub fn extract_current_user(&mut self) {
        let Some(username) = self.username.as_ref() else {
            return;
        };

        if let Some(level) = self.permissions.members.remove(username) {
            debug!(%username, %level, "extract current user");
            self.user_permissions = Some((username.clone(), level));
        }
    }

    /// Write the captured entry of the acting user back into the member list.
    ///
    /// The captured entry is kept, so repeated calls restore the same level again.
    pub fn insert_current_user(&mut self) {
        let Some(username) = self.username.as_ref() else {
            return;
        };

        let Some((extracted, level)) = self.user_permissions.as_ref() else {
            return;
        };

        // The cache only ever holds an entry for the user who was tracked while extracting.
        if extracted != username {
            return;
        }

        debug!(%username, %level, "insert current user");
        self.permissions.members.insert(username.clone(), *level);
    }

    /// Make the resource public, keeping only admin members. Groups are left untouched.
    pub fn make_public(&mut self) {
        self.permissions.members.retain(|_, level| level.is_admin());
        self.permissions.value = Visibility::Public;
        debug!(
            members = self.member_count(),
            groups = self.group_count(),
            "make public"
        );
    }

    /// Make the resource private, discarding every explicit grant.
    pub fn make_private(&mut self) {
        self.permissions = PermissionsRecord::new(Visibility::Private);
        debug!("make private");
    }

    /// Share the resource, granting `Read` to every listed member and group without an entry.
    ///
    /// Existing entries keep their level and entries not listed are retained.
    pub fn make_shared(&mut self, usernames: &[&str], groupnames: &[&str]) {
        for username in usernames {
            if !self.user_has_permission(username, None) {
                self.set_member_permission(username, AccessLevel::Read);
            }
        }

        for groupname in groupnames {
            if !self.group_has_permission(groupname, None) {
                self.set_group_permission(groupname, AccessLevel::Read);
            }
        }

        self.permissions.value = Visibility::Shared;
        debug!(
            members = self.member_count(),
            groups = self.group_count(),
            "make shared"
        );
    }

    /// With a level, `true` if the group holds exactly that level. Without, `true` if the group
    /// holds any entry.
    pub fn group_has_permission(&self, groupname: &str, level: Option<AccessLevel>) -> bool {
        has_permission(&self.permissions.groups, groupname, level)
    }

    /// `true` if every listed group holds an entry. Vacuously `true` for an empty list.
    pub fn groups_have_permissions(&self, groupnames: &[&str]) -> bool {
        groupnames
            .iter()
            .all(|groupname| self.group_has_permission(groupname, None))
    }

    /// With a level, `true` if the member holds exactly that level. Without, `true` if the member
    /// holds any entry.
    pub fn user_has_permission(&self, username: &str, level: Option<AccessLevel>) -> bool {
        has_permission(&self.permissions.members, username, level)
    }

    /// `true` if every listed member holds an entry. Vacuously `true` for an empty list.
    pub fn users_have_permissions(&self, usernames: &[&str]) -> bool {
        usernames
            .iter()
            .all(|username| self.user_has_permission(username, None))
    }
}

impl From<PermissionsRecord> for PermissionsModel {
    fn from(permissions: PermissionsRecord) -> Self {
        Self::new(Some(permissions), None)
    }
}

fn has_permission(entries: &AccessMap, name: &str, level: Option<AccessLevel>) -> bool {
    match (entries.get(name), level) {
        (Some(held), Some(level)) => *held == level,
        (Some(_), None) => true,
        (None, _) => false,
    }
}
