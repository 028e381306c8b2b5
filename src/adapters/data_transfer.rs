// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Snapshot of a generic data transfer object (drag-and-drop or paste).

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::payload::{FileItem, TransferData, lookup_slot};

/// Files and typed string data captured from a data transfer.
///
/// ```json
/// {
///   "files": [{ "name": "shot.png", "type": "image/png", "bytes": [137, 80] }],
///   "data": { "text/html": "<p>hi</p>", "text/rtf": "{\\rtf1 ...}" }
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DataTransferSnapshot {
    pub files: Vec<FileItem>,
    /// Type slots keyed exactly as the host reported them.
    pub data: BTreeMap<String, String>,
}

impl DataTransferSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse data transfer snapshot JSON")
    }
}

impl TransferData for DataTransferSnapshot {
    fn files(&self) -> impl Iterator<Item = &FileItem> {
        self.files.iter()
    }

    fn data(&self, format: &str) -> Option<&str> {
        lookup_slot(
            self.data.iter().map(|(k, v)| (k.as_str(), v.as_str())),
            format,
        )
    }

    fn is_empty(&self) -> bool {
        self.files.is_empty() && self.data.is_empty()
    }
}
