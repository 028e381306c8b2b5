// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Shared helper utilities reused by the paste pipeline.

pub mod mime;

/// Normalize MIME types of pasted content.
pub use mime::normalize_mime;
