// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Decide what a paste or drop means and hand it to the right action.
//!
//! Rules, in order:
//! 1. No payload, or nothing in it: unhandled.
//! 2. An RTF slot containing `\trowd` marks a spreadsheet copy; images are
//!    ignored for the rest of the decision.
//! 3. Otherwise the first image file is uploaded and nothing else happens.
//! 4. A non-empty HTML slot is sanitized and inserted.
//! 5. Anything else is unhandled.

use log::{debug, trace};

use crate::logic::sanitize::HtmlSanitizer;
use crate::logic::table::looks_like_table;
use crate::models::payload::{FileItem, HTML_FORMAT, RTF_FORMAT, TransferData};

/// Outcome of classifying a payload, before any action runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PasteDecision<'a> {
    /// Upload this image file.
    Upload(&'a FileItem),
    /// Insert this already sanitized HTML.
    Html(String),
    /// Leave the event to the host.
    Unhandled,
}

impl PasteDecision<'_> {
    pub fn is_handled(&self) -> bool {
        !matches!(self, PasteDecision::Unhandled)
    }
}

/// Classifier for paste and drop payloads.
#[derive(Clone, Debug, Default)]
pub struct PasteClassifier {
    sanitizer: HtmlSanitizer,
}

impl PasteClassifier {
    pub fn new(sanitizer: HtmlSanitizer) -> Self {
        Self { sanitizer }
    }

    pub fn sanitizer(&self) -> &HtmlSanitizer {
        &self.sanitizer
    }

    /// Classify a payload without dispatching.
    pub fn decide<'a, P: TransferData>(&self, payload: Option<&'a P>) -> PasteDecision<'a> {
        let Some(payload) = payload else {
            trace!("No transfer payload; leaving paste to the host");
            return PasteDecision::Unhandled;
        };
        if payload.is_empty() {
            trace!("Transfer payload is empty; leaving paste to the host");
            return PasteDecision::Unhandled;
        }

        if looks_like_table(payload.data(RTF_FORMAT)) {
            debug!("RTF table signature found; ignoring pasted images");
        } else if let Some(file) = payload.files().find(|file| file.is_image()) {
            debug!(
                "Pasted image {:?} ({}, {} bytes) selected for upload",
                file.name.as_deref().unwrap_or("<unnamed>"),
                file.mime_type,
                file.bytes.len()
            );
            return PasteDecision::Upload(file);
        }

        match payload.data(HTML_FORMAT) {
            Some(html) if !html.is_empty() => PasteDecision::Html(self.sanitizer.sanitize(html)),
            _ => PasteDecision::Unhandled,
        }
    }

    /// Classify a payload and run at most one of the two actions.
    ///
    /// Returns `true` when the paste was handled. Actions run synchronously;
    /// whatever they start in the background is their own business.
    pub fn classify<P, U, H>(&self, payload: Option<&P>, upload_action: U, html_action: H) -> bool
    where
        P: TransferData,
        U: FnOnce(&FileItem),
        H: FnOnce(String),
    {
        match self.decide(payload) {
            PasteDecision::Upload(file) => {
                upload_action(file);
                true
            }
            PasteDecision::Html(html) => {
                html_action(html);
                true
            }
            PasteDecision::Unhandled => false,
        }
    }
}
