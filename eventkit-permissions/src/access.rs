// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// The two access levels which can be granted to a member or a group.
///
/// Levels are compared for equality only. Holding `Admin` does not imply anything about `Read`
/// for the purpose of permission queries, a query for `Read` on an admin entry returns `false`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum AccessLevel {
    /// Permission to view a resource.
    #[cfg_attr(feature = "serde", serde(rename = "READ"))]
    Read,

    /// Permission to manage a resource, including re-sharing it.
    #[cfg_attr(feature = "serde", serde(rename = "ADMIN"))]
    Admin,
}

impl AccessLevel {
    /// String form used in persisted permission records.
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Read => "READ",
            AccessLevel::Admin => "ADMIN",
        }
    }

    /// Access level is Read.
    pub fn is_read(&self) -> bool {
        matches!(self, AccessLevel::Read)
    }

    /// Access level is Admin.
    pub fn is_admin(&self) -> bool {
        matches!(self, AccessLevel::Admin)
    }
}

impl Display for AccessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "READ" => Ok(AccessLevel::Read),
            "ADMIN" => Ok(AccessLevel::Admin),
            other => Err(ParseError::UnknownAccessLevel(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use crate::{AccessLevel, ParseError};

    #[test]
    fn parses_record_literals() {
        assert_eq!("READ".parse::<AccessLevel>().unwrap(), AccessLevel::Read);
        assert_eq!("ADMIN".parse::<AccessLevel>().unwrap(), AccessLevel::Admin);
        assert_eq!(AccessLevel::Admin.to_string(), "ADMIN");
        assert_eq!(AccessLevel::Read.to_string(), "READ");
    }

    #[test]
    fn rejects_unknown_literals() {
        // Literals are case sensitive.
        assert_matches!(
            "read".parse::<AccessLevel>(),
            Err(ParseError::UnknownAccessLevel(value)) if value == "read"
        );
        assert_matches!(
            "MANAGE".parse::<AccessLevel>(),
            Err(ParseError::UnknownAccessLevel(_))
        );
    }

    #[test]
    fn level_predicates() {
        assert!(AccessLevel::Read.is_read());
        assert!(!AccessLevel::Read.is_admin());
        assert!(AccessLevel::Admin.is_admin());
        assert!(!AccessLevel::Admin.is_read());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_uppercase_literal() {
        let json = serde_json::to_string(&AccessLevel::Admin).unwrap();
        assert_eq!(json, "\"ADMIN\"");

        let level: AccessLevel = serde_json::from_str("\"READ\"").unwrap();
        assert_eq!(level, AccessLevel::Read);
    }
}
