// SPDX-License-Identifier: MIT OR Apache-2.0

use std::collections::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{AccessLevel, Visibility};

/// Access levels keyed by username or group name.
///
/// A missing key means "no explicit access", entries are never stored without a level.
pub type AccessMap = HashMap<String, AccessLevel>;

/// Persisted shape of a resource's permissions.
///
/// ```json
/// {
///   "value": "SHARED",
///   "members": { "alice": "ADMIN", "bob": "READ" },
///   "groups": { "analysts": "READ" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PermissionsRecord {
    pub value: Visibility,
    pub members: AccessMap,
    pub groups: AccessMap,
}

impl PermissionsRecord {
    /// Record with the given visibility and no explicit grants.
    pub fn new(value: Visibility) -> Self {
        Self {
            value,
            members: AccessMap::new(),
            groups: AccessMap::new(),
        }
    }

    /// Add or overwrite a member grant.
    pub fn with_member(mut self, username: impl Into<String>, level: AccessLevel) -> Self {
        self.members.insert(username.into(), level);
        self
    }

    /// Add or overwrite a group grant.
    pub fn with_group(mut self, groupname: impl Into<String>, level: AccessLevel) -> Self {
        self.groups.insert(groupname.into(), level);
        self
    }

    /// Decode a record received from the persistence layer.
    ///
    /// All three fields are required. Unknown visibility or level literals and `null` entries are
    /// rejected.
    #[cfg(feature = "serde")]
    pub fn from_json(value: &str) -> Result<Self, crate::RecordError> {
        Ok(serde_json::from_str(value)?)
    }

    /// Encode the record for the persistence layer.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, crate::RecordError> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use assert_matches::assert_matches;

    use crate::{AccessLevel, PermissionsRecord, RecordError, Visibility};

    #[test]
    fn decodes_persisted_record() {
        let record = PermissionsRecord::from_json(
            r#"{
                "value": "SHARED",
                "members": { "alice": "ADMIN", "bob": "READ" },
                "groups": { "analysts": "READ" }
            }"#,
        )
        .unwrap();

        let expected = PermissionsRecord::new(Visibility::Shared)
            .with_member("alice", AccessLevel::Admin)
            .with_member("bob", AccessLevel::Read)
            .with_group("analysts", AccessLevel::Read);
        assert_eq!(record, expected);
    }

    #[test]
    fn encoded_record_decodes_to_itself() {
        let record =
            PermissionsRecord::new(Visibility::Public).with_member("alice", AccessLevel::Admin);
        let json = record.to_json().unwrap();
        assert!(json.contains("\"value\":\"PUBLIC\""));
        assert_eq!(PermissionsRecord::from_json(&json).unwrap(), record);
    }

    #[test]
    fn rejects_structurally_invalid_records() {
        // Missing groups.
        assert_matches!(
            PermissionsRecord::from_json(r#"{ "value": "PRIVATE", "members": {} }"#),
            Err(RecordError::Json(_))
        );

        // Null entries are not a valid way to express "no access".
        assert_matches!(
            PermissionsRecord::from_json(
                r#"{ "value": "SHARED", "members": { "bob": null }, "groups": {} }"#
            ),
            Err(RecordError::Json(_))
        );

        // Unknown literals.
        assert_matches!(
            PermissionsRecord::from_json(r#"{ "value": "SECRET", "members": {}, "groups": {} }"#),
            Err(RecordError::Json(_))
        );
        assert_matches!(
            PermissionsRecord::from_json(
                r#"{ "value": "SHARED", "members": { "bob": "WRITE" }, "groups": {} }"#
            ),
            Err(RecordError::Json(_))
        );
    }

    #[test]
    fn default_record_is_private_and_empty() {
        let record = PermissionsRecord::default();
        assert_eq!(record.value, Visibility::Private);
        assert!(record.members.is_empty());
        assert!(record.groups.is_empty());
    }
}
