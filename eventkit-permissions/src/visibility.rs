// SPDX-License-Identifier: MIT OR Apache-2.0

use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ParseError;

/// Resource-level sharing mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub enum Visibility {
    /// Only the owner has access, no explicit grants apply.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "PRIVATE"))]
    Private,

    /// Explicit per-member and per-group grants apply.
    #[cfg_attr(feature = "serde", serde(rename = "SHARED"))]
    Shared,

    /// Everyone can read the resource. Explicit grants are only kept for admins.
    #[cfg_attr(feature = "serde", serde(rename = "PUBLIC"))]
    Public,
}

impl Visibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Private => "PRIVATE",
            Visibility::Shared => "SHARED",
            Visibility::Public => "PUBLIC",
        }
    }
}

impl Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Visibility {
    type Err = ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "PRIVATE" => Ok(Visibility::Private),
            "SHARED" => Ok(Visibility::Shared),
            "PUBLIC" => Ok(Visibility::Public),
            other => Err(ParseError::UnknownVisibility(other.to_string())),
        }
    }
}
