// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Snapshot of a clipboard event's item list.

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::payload::{FileItem, TransferData, lookup_slot};

/// One entry of a clipboard event, tagged by its `kind`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ClipboardItem {
    /// A typed text flavor such as `text/html`.
    String {
        #[serde(rename = "type")]
        format: String,
        #[serde(default)]
        data: String,
    },
    /// A file, typically a screenshot or copied image.
    File(FileItem),
}

/// Items captured from a clipboard event, in host order.
///
/// ```json
/// {
///   "items": [
///     { "kind": "string", "type": "text/html", "data": "<p>hi</p>" },
///     { "kind": "file", "type": "image/png", "name": "image.png", "bytes": [137, 80] }
///   ]
/// }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ClipboardEventSnapshot {
    pub items: Vec<ClipboardItem>,
}

impl ClipboardEventSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse clipboard event snapshot JSON")
    }
}

impl TransferData for ClipboardEventSnapshot {
    fn files(&self) -> impl Iterator<Item = &FileItem> {
        self.items.iter().filter_map(|item| match item {
            ClipboardItem::File(file) => Some(file),
            ClipboardItem::String { .. } => None,
        })
    }

    fn data(&self, format: &str) -> Option<&str> {
        let slots = self.items.iter().filter_map(|item| match item {
            ClipboardItem::String { format: key, data } => Some((key.as_str(), data.as_str())),
            ClipboardItem::File(_) => None,
        });
        lookup_slot(slots, format)
    }

    fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
