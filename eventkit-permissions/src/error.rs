// SPDX-License-Identifier: MIT OR Apache-2.0

use thiserror::Error;

/// Error types for parsing the string forms of access levels and visibilities.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown access level \"{0}\", expected READ or ADMIN")]
    UnknownAccessLevel(String),

    #[error("unknown visibility \"{0}\", expected PRIVATE, SHARED or PUBLIC")]
    UnknownVisibility(String),
}

/// Error types for decoding and encoding permission records.
#[cfg(feature = "serde")]
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid permissions record: {0}")]
    Json(#[from] serde_json::Error),
}
