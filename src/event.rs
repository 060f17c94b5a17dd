//! Normalized change entries.
//!
//! These are what the daemon connection relays, so their wire shape is part
//! of the contract: fields serialize camelCase, kinds serialize uppercase.
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One reported file system change.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEntry {
    /// Absolute path of the affected resource.
    ///
    /// Must stay valid evidence of the change independent of the host's
    /// internal handles; a deletion's path outlives the project it came from.
    pub path: PathBuf,

    #[serde(rename = "type")]
    pub kind: ChangeKind,

    pub is_directory: bool,

    /// Name of the project the change belongs to.
    pub project: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeKind {
    Create,
    Modify,
    Delete,
}

#[cfg(test)]
#[path = "./event_test.rs"]
mod event_test;
