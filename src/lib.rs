// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Paste and drop handling for the elnPack rich-text editor.
//!
//! A paste either uploads an image, inserts cleaned HTML, or is left to the
//! host. [`PasteClassifier`] makes that call on any [`TransferData`] source;
//! [`HtmlSanitizer`] does the cleanup; [`looks_like_table`] keeps bitmap
//! previews of spreadsheet copies from being uploaded.
//!
//! ```
//! use elnpaste::{FileItem, TransferPayload, HTML_FORMAT};
//!
//! let payload = TransferPayload::new()
//!     .with_data(HTML_FORMAT, r#"<p onclick="x()" style="color:red;margin:0">hi</p>"#);
//!
//! let mut inserted = None;
//! let handled = elnpaste::classify(
//!     Some(&payload),
//!     |_file: &FileItem| unreachable!("no images in this paste"),
//!     |html| inserted = Some(html),
//! );
//!
//! assert!(handled);
//! assert_eq!(inserted.as_deref(), Some(r#"<p style="color: red;">hi</p>"#));
//! ```

use std::sync::LazyLock;

pub mod adapters;
pub mod logic;
pub mod models;
pub mod utils;

pub use adapters::{ClipboardEventSnapshot, ClipboardItem, DataTransferSnapshot};
pub use logic::classify::{PasteClassifier, PasteDecision};
pub use logic::sanitize::HtmlSanitizer;
pub use logic::table::looks_like_table;
pub use models::allow_list::AllowList;
pub use models::payload::{FileItem, HTML_FORMAT, RTF_FORMAT, TransferData, TransferPayload};

/// Classifier with the default allow-list, shared by the free functions.
static DEFAULT_CLASSIFIER: LazyLock<PasteClassifier> = LazyLock::new(PasteClassifier::default);

/// Classify a paste with the default allow-list and run at most one action.
///
/// See [`PasteClassifier::classify`].
pub fn classify<P, U, H>(payload: Option<&P>, upload_action: U, html_action: H) -> bool
where
    P: TransferData,
    U: FnOnce(&FileItem),
    H: FnOnce(String),
{
    DEFAULT_CLASSIFIER.classify(payload, upload_action, html_action)
}

/// Sanitize pasted HTML with the default allow-list.
pub fn sanitize(html: &str) -> String {
    DEFAULT_CLASSIFIER.sanitizer().sanitize(html)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{ClipboardEventSnapshot, DataTransferSnapshot, FileItem, classify, sanitize};

    // Drag-and-drop of a screenshot goes straight to the upload action.
    #[test]
    fn dropped_image_goes_to_upload_action() {
        let snapshot = DataTransferSnapshot::from_json(
            r#"{ "files": [{ "name": "Bildschirmfoto.png", "type": "image/png", "bytes": [1, 2, 3] }],
                 "data": { "text/html": "<img src=\"x.png\">" } }"#,
        )
        .unwrap();

        let mut uploaded = Vec::new();
        let html_called = Cell::new(false);
        let handled = classify(
            Some(&snapshot),
            |file: &FileItem| uploaded.push(file.clone()),
            |_| html_called.set(true),
        );

        assert!(handled);
        assert!(!html_called.get());
        assert_eq!(uploaded.len(), 1);
        assert_eq!(uploaded[0].name.as_deref(), Some("Bildschirmfoto.png"));
        assert_eq!(uploaded[0].bytes, vec![1, 2, 3]);
    }

    // Pasted mail content keeps inline images and Office markup intact.
    #[test]
    fn pasted_mail_keeps_inline_images_and_office_markup() {
        let snapshot = DataTransferSnapshot::from_json(
            &serde_json::json!({ "data": { "text/html":
                "<p class=\"MsoNormal\">Hi<o:p></o:p></p><img src=\"cid:image001.png@01D\" width=\"20\">"
            } })
            .to_string(),
        )
        .unwrap();

        let mut inserted = None;
        assert!(classify(Some(&snapshot), |_| {}, |html| inserted = Some(html)));
        assert_eq!(
            inserted.as_deref(),
            Some(r#"<p>Hi<o:p></o:p></p><img src="cid:image001.png@01D">"#)
        );
    }

    // A spreadsheet copy through the clipboard item list inserts cleaned HTML only.
    #[test]
    fn spreadsheet_copy_from_clipboard_event_inserts_html() {
        let snapshot = ClipboardEventSnapshot::from_json(
            r#"{ "items": [
                { "kind": "file", "type": "image/png", "name": "image.png", "bytes": [1] },
                { "kind": "string", "type": "text/rtf", "data": "{\\rtf1\\trowd\\cellx100 1\\cell\\row}" },
                { "kind": "string", "type": "text/html",
                  "data": "<table><tr><td style=\"font-weight:700;border:1px solid\" class=\"xl65\">1</td></tr></table>" }
            ] }"#,
        )
        .unwrap();

        let uploaded = Cell::new(false);
        let mut inserted = None;
        let handled = classify(
            Some(&snapshot),
            |_: &FileItem| uploaded.set(true),
            |html| inserted = Some(html),
        );

        assert!(handled);
        assert!(!uploaded.get());
        assert_eq!(
            inserted.as_deref(),
            Some(r#"<table><tr><td style="font-weight: 700;">1</td></tr></table>"#)
        );
    }

    // Both host shapes get the same sanitizer strength.
    #[test]
    fn adapters_share_sanitizer_strength() {
        let html = r#"<span style="color:blue;font-size:20px" data-x="1">x</span>"#;
        let transfer = DataTransferSnapshot::from_json(
            &serde_json::json!({ "data": { "text/html": html } }).to_string(),
        )
        .unwrap();
        let clipboard = ClipboardEventSnapshot::from_json(
            &serde_json::json!({ "items": [{ "kind": "string", "type": "text/html", "data": html }] })
                .to_string(),
        )
        .unwrap();

        let mut from_transfer = None;
        let mut from_clipboard = None;
        classify(Some(&transfer), |_| {}, |h| from_transfer = Some(h));
        classify(Some(&clipboard), |_| {}, |h| from_clipboard = Some(h));

        assert_eq!(from_transfer, from_clipboard);
        assert_eq!(from_transfer, Some(sanitize(html)));
        assert_eq!(from_transfer.as_deref(), Some(r#"<span style="color: blue;">x</span>"#));
    }

    #[test]
    fn plain_text_paste_is_left_to_host() {
        let snapshot = ClipboardEventSnapshot::from_json(
            r#"{ "items": [{ "kind": "string", "type": "text/plain", "data": "hello" }] }"#,
        )
        .unwrap();

        assert!(!classify(Some(&snapshot), |_| {}, |_| {}));
        assert!(!classify(None::<&DataTransferSnapshot>, |_| {}, |_| {}));
    }
}
