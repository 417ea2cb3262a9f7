// SPDX-License-Identifier: MIT OR Apache-2.0

//! Visibility and access levels of shareable EventKit resources.
//!
//! A resource is either private, shared with individual members and groups, or public. The
//! [`PermissionsModel`] holds one resource's [`PermissionsRecord`] while it is being edited and
//! enforces how grants change when the visibility changes. [`ShareSession`] wraps the model with
//! the decisions a share dialog makes on every interaction and on save.
mod access;
mod config;
mod error;
mod filter;
mod permissions;
mod record;
mod session;
#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
mod visibility;

pub use access::AccessLevel;
pub use config::SessionConfig;
pub use error::ParseError;
#[cfg(feature = "serde")]
pub use error::RecordError;
pub use filter::{FilterChange, change_visibility, select_visibility};
pub use permissions::PermissionsModel;
pub use record::{AccessMap, PermissionsRecord};
pub use session::{SaveOutcome, ShareSession};
pub use visibility::Visibility;
