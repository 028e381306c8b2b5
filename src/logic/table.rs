// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Spreadsheet detection via the RTF flavor of a paste.

/// RTF control word that opens a table row.
pub const RTF_TABLE_ROW_MARKER: &str = "\\trowd";

/// Return true when the RTF slot looks like it came from a table.
///
/// Spreadsheets and table editors put an RTF rendering next to the HTML on
/// the clipboard, often together with a bitmap preview of the selection.
/// Seeing `\trowd` means that bitmap is not something the user meant to upload.
pub fn looks_like_table(rtf: Option<&str>) -> bool {
    rtf.is_some_and(|value| !value.is_empty() && value.contains(RTF_TABLE_ROW_MARKER))
}
