// SPDX-License-Identifier: MIT OR Apache-2.0

//! Share-dialog workflow on top of [`PermissionsModel`].
//!
//! A session is opened from a persisted record, receives one call per user interaction and
//! produces the record to persist on save. The acting user's own entry is held out of the member
//! list for the whole session so bulk edits never touch it.
use tracing::debug;

use crate::record::AccessMap;
use crate::{AccessLevel, PermissionsModel, PermissionsRecord, SessionConfig};

/// Result of [`ShareSession::save`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    /// The record to hand to the persistence layer.
    Saved(PermissionsRecord),

    /// Saving a public record needs confirmation, call `save` again to proceed.
    ConfirmPublic,
}

#[derive(Debug)]
pub struct ShareSession {
    permissions: PermissionsModel,
    config: SessionConfig,
    public_warning: bool,
}

impl ShareSession {
    /// Start editing `permissions` on behalf of `username`.
    pub fn open(
        permissions: PermissionsRecord,
        username: Option<&str>,
        config: SessionConfig,
    ) -> Self {
        let mut model = PermissionsModel::new(Some(permissions), username.map(str::to_string));
        model.extract_current_user();
        debug!(
            visibility = %model.visibility(),
            members = model.member_count(),
            groups = model.group_count(),
            "open share session"
        );

        Self {
            permissions: model,
            config,
            public_warning: false,
        }
    }

    pub fn model(&self) -> &PermissionsModel {
        &self.permissions
    }

    /// Snapshot for re-rendering. The acting user's entry is not part of it until saved.
    pub fn permissions(&self) -> PermissionsRecord {
        self.permissions.permissions()
    }

    pub fn is_public_warning_pending(&self) -> bool {
        self.public_warning
    }

    pub fn dismiss_public_warning(&mut self) {
        self.public_warning = false;
    }

    /// Select or deselect a member. Selecting anyone on a public resource shares it instead.
    pub fn toggle_member(&mut self, username: &str) {
        if self.permissions.is_public() {
            self.permissions.make_shared(&[], &[]);
        }

        if self.permissions.user_has_permission(username, None) {
            self.permissions.remove_member_permission(username);
        } else {
            self.permissions.set_member_permission(username, AccessLevel::Read);
        }
    }

    pub fn toggle_group(&mut self, groupname: &str) {
        if self.permissions.group_has_permission(groupname, None) {
            self.permissions.remove_group_permissions(groupname);
        } else {
            self.permissions.set_group_permission(groupname, AccessLevel::Read);
        }
    }

    /// Flip a member between admin and read access. Members without an entry become admins.
    pub fn toggle_member_admin(&mut self, username: &str) {
        let admin = Some(AccessLevel::Admin);
        let level = toggled_admin(self.permissions.user_has_permission(username, admin));
        self.permissions.set_member_permission(username, level);
    }

    /// Flip a group between admin and read access. Groups without an entry become admins.
    pub fn toggle_group_admin(&mut self, groupname: &str) {
        let admin = Some(AccessLevel::Admin);
        let level = toggled_admin(self.permissions.group_has_permission(groupname, admin));
        self.permissions.set_group_permission(groupname, level);
    }

    /// Grant read access to every listed member without an entry.
    pub fn check_members(&mut self, usernames: &[&str]) {
        for username in usernames {
            if !self.permissions.user_has_permission(username, None) {
                self.permissions.set_member_permission(username, AccessLevel::Read);
            }
        }
    }

    /// Grant read access to every listed group without an entry.
    pub fn check_groups(&mut self, groupnames: &[&str]) {
        for groupname in groupnames {
            if !self.permissions.group_has_permission(groupname, None) {
                self.permissions.set_group_permission(groupname, AccessLevel::Read);
            }
        }
    }

    pub fn make_public(&mut self) {
        self.permissions.make_public();
    }

    /// Deselect every member. A public resource falls back to shared.
    pub fn uncheck_all_members(&mut self) {
        self.permissions.set_members(AccessMap::new());
        if self.permissions.is_public() {
            self.permissions.make_shared(&[], &[]);
        }
    }

    pub fn uncheck_all_groups(&mut self) {
        self.permissions.set_groups(AccessMap::new());
    }

    /// Replace the group selection wholesale.
    pub fn set_groups(&mut self, groups: AccessMap) {
        self.permissions.set_groups(groups);
    }

    /// Normalize the visibility against the selection and return the record to persist.
    ///
    /// A private record with grants becomes shared, a shared record without grants becomes
    /// private. Public records need one confirmation first when `warn_public` is configured.
    pub fn save(&mut self) -> SaveOutcome {
        let has_grants = self.permissions.member_count() > 0 || self.permissions.group_count() > 0;

        if self.permissions.is_private() {
            if has_grants {
                self.permissions.make_shared(&[], &[]);
            }
        } else if self.permissions.is_shared() {
            if !has_grants {
                self.permissions.make_private();
            }
        } else if self.config.warn_public {
            if !self.public_warning {
                debug!("confirm saving public permissions");
                self.public_warning = true;
                return SaveOutcome::ConfirmPublic;
            }
            self.public_warning = false;
        }

        if self.permissions.user_permissions().is_some() {
            self.permissions.insert_current_user();
        }

        let permissions = self.permissions.permissions();
        debug!(
            visibility = %permissions.value,
            members = permissions.members.len(),
            groups = permissions.groups.len(),
            "save share session"
        );
        SaveOutcome::Saved(permissions)
    }
}

fn toggled_admin(is_admin: bool) -> AccessLevel {
    if is_admin {
        AccessLevel::Read
    } else {
        AccessLevel::Admin
    }
}
