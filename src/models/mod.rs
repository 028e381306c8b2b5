// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Domain layer: transfer payloads and the sanitizer allow-list, free of host specifics.

pub mod allow_list;
pub mod payload;
