// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! MIME helpers for pasted files and typed data slots.
//!
//! Hosts are sloppy about MIME strings: clipboard formats arrive with
//! parameters (`text/html;charset=utf-8`) or in mixed case. Everything here
//! reduces them to a lowercase essence so comparisons stay simple.

/// Reduce a MIME-like string to its lowercase essence without parameters.
pub fn normalize_mime(raw: &str) -> String {
    raw.split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::normalize_mime;

    // Parameters and case must not leak into comparisons.
    #[test]
    fn normalize_mime_strips_parameters_and_case() {
        assert_eq!(normalize_mime(" Text/HTML; charset=utf-8"), "text/html");
        assert_eq!(normalize_mime("image/PNG"), "image/png");
        assert_eq!(normalize_mime(""), "");
    }
}
