// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Transfer payloads: the files and typed text slots of one paste or drop.
//!
//! The classifier never sees host event types. It works against the
//! [`TransferData`] capability, which the owned [`TransferPayload`] and the
//! host adapters in [`crate::adapters`] all implement.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::utils::normalize_mime;

/// Slot key carrying an HTML fragment.
pub const HTML_FORMAT: &str = "text/html";
/// Slot key carrying Rich Text Format.
pub const RTF_FORMAT: &str = "text/rtf";

/// A file carried by a paste or drop.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct FileItem {
    /// File name as reported by the host, if any.
    #[serde(default)]
    pub name: Option<String>,
    /// MIME type as declared by the host; may be empty.
    #[serde(default, rename = "type")]
    pub mime_type: String,
    /// Raw file content.
    #[serde(default)]
    pub bytes: Vec<u8>,
}

impl FileItem {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: None,
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether the declared type is an image type.
    ///
    /// The name and content are never consulted: an untyped file is not an image.
    pub fn is_image(&self) -> bool {
        normalize_mime(&self.mime_type).starts_with("image/")
    }
}

/// Read access to a transfer payload snapshot.
pub trait TransferData {
    /// Files in the order the host supplied them.
    fn files(&self) -> impl Iterator<Item = &FileItem>;

    /// Text slot for `format`, matched on the normalized MIME essence.
    fn data(&self, format: &str) -> Option<&str>;

    /// True when the payload carries neither files nor text slots.
    fn is_empty(&self) -> bool;
}

/// Owned payload for hosts that collect clipboard content natively.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransferPayload {
    files: Vec<FileItem>,
    slots: BTreeMap<String, String>,
}

impl TransferPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file: FileItem) -> Self {
        self.files.push(file);
        self
    }

    /// Add or replace a text slot. The key is stored in normalized form.
    pub fn with_data(mut self, format: &str, value: impl Into<String>) -> Self {
        self.slots.insert(normalize_mime(format), value.into());
        self
    }
}

impl TransferData for TransferPayload {
    fn files(&self) -> impl Iterator<Item = &FileItem> {
        self.files.iter()
    }

    fn data(&self, format: &str) -> Option<&str> {
        self.slots.get(&normalize_mime(format)).map(String::as_str)
    }

    fn is_empty(&self) -> bool {
        self.files.is_empty() && self.slots.is_empty()
    }
}

/// Find the first slot whose key matches `format` after normalization.
///
/// Used by adapters that keep host keys verbatim.
pub(crate) fn lookup_slot<'a>(
    slots: impl IntoIterator<Item = (&'a str, &'a str)>,
    format: &str,
) -> Option<&'a str> {
    let wanted = normalize_mime(format);
    slots
        .into_iter()
        .find(|(key, _)| normalize_mime(key) == wanted)
        .map(|(_, value)| value)
}
