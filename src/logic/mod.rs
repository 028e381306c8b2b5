// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Paste handling logic: classification, HTML cleanup and table detection.

pub mod classify;
pub mod sanitize;
pub mod table;
