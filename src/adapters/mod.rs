// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Boundary adapters for host paste and drop events.
//!
//! Webview hosts serialize the browser event into JSON and hand it over.
//! Two shapes are in use: the generic data transfer object of drag-and-drop
//! (files plus a type-to-string map) and the clipboard event item list. Both
//! implement [`crate::models::payload::TransferData`] and therefore share one
//! classifier and one sanitizer.

pub mod clipboard_event;
pub mod data_transfer;

pub use clipboard_event::{ClipboardEventSnapshot, ClipboardItem};
pub use data_transfer::DataTransferSnapshot;
