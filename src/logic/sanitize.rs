// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Cleanup of pasted HTML before it reaches the editor.
//!
//! Markup goes through `lol_html`, a streaming rewriter: nothing is executed
//! or fetched, the host document is never touched, and markup no rule
//! applies to is passed through byte for byte. The rules:
//! - `<script>` and `<style>` are dropped together with their content, at any depth.
//! - Attributes outside the [`AllowList`] are removed from every element.
//! - Inside `style`, declarations whose property is not allowed are removed
//!   and the rest is re-serialized as `name: value;`.
//! - A whole pasted document collapses to its `<body>` content.
//!
//! Every other element, comment and URL value is kept. The output is stable
//! under re-sanitizing.

use std::sync::Arc;

use log::{debug, trace, warn};
use lol_html::{RewriteStrSettings, element, rewrite_str};

use crate::models::allow_list::AllowList;

/// Elements removed together with everything inside them.
const DROPPED_WITH_CONTENT: &str = "script, style, head";

/// Document wrappers replaced by their content.
const UNWRAPPED: &str = "html, body";

/// Non-default weight keywords of the `font` shorthand.
const FONT_WEIGHT_KEYWORDS: [&str; 3] = ["bold", "bolder", "lighter"];

/// Absolute and relative `font-size` keywords.
const FONT_SIZE_KEYWORDS: [&str; 10] = [
    "xx-small", "x-small", "small", "medium", "large", "x-large", "xx-large", "xxx-large",
    "smaller", "larger",
];

/// Values that reset every longhand of a shorthand at once.
const CSS_WIDE_KEYWORDS: [&str; 5] = ["inherit", "initial", "unset", "revert", "revert-layer"];

/// Sanitizer for pasted HTML fragments.
///
/// Holds only the immutable allow-list, so one instance can be shared freely.
#[derive(Clone, Debug, Default)]
pub struct HtmlSanitizer {
    allow_list: Arc<AllowList>,
}

impl HtmlSanitizer {
    pub fn new(allow_list: AllowList) -> Self {
        Self {
            allow_list: Arc::new(allow_list),
        }
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }

    /// Sanitize an HTML fragment and return the cleaned markup.
    ///
    /// Never fails: malformed markup is passed through as the tokenizer sees
    /// it, and a rewriter fault yields an empty string.
    pub fn sanitize(&self, html: &str) -> String {
        if html.is_empty() {
            return String::new();
        }
        let allow_list = self.allow_list.as_ref();
        let settings = RewriteStrSettings {
            element_content_handlers: vec![
                element!(DROPPED_WITH_CONTENT, |el| {
                    trace!("Dropped <{}> with its content", el.tag_name());
                    el.remove();
                    Ok(())
                }),
                element!(UNWRAPPED, |el| {
                    el.remove_and_keep_content();
                    Ok(())
                }),
                element!("*", |el| {
                    let tag = el.tag_name();
                    let names: Vec<String> = el.attributes().iter().map(|a| a.name()).collect();
                    for name in names {
                        if !allow_list.allows_attribute(&name) {
                            trace!("Removed attribute `{name}` from <{tag}>");
                            el.remove_attribute(&name);
                        }
                    }
                    if let Some(style) = el.get_attribute("style")
                        && let Some(filtered) = filter_style(&tag, &style, allow_list)
                    {
                        el.set_attribute("style", &filtered)?;
                    }
                    Ok(())
                }),
            ],
            strict: false,
            ..RewriteStrSettings::new()
        };

        match rewrite_str(html, settings) {
            Ok(cleaned) => {
                debug!(
                    "Sanitized pasted HTML: {} bytes in, {} bytes out",
                    html.len(),
                    cleaned.len()
                );
                cleaned
            }
            Err(err) => {
                warn!("Discarding pasted HTML that could not be rewritten: {err}");
                String::new()
            }
        }
    }
}

/// One parsed `name: value` declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
struct Declaration {
    property: String,
    value: String,
    important: bool,
}

impl Declaration {
    fn serialize(&self) -> String {
        if self.important {
            format!("{}: {} !important;", self.property, self.value)
        } else {
            format!("{}: {};", self.property, self.value)
        }
    }
}

/// Rebuild a `style` attribute keeping only allowed declarations.
///
/// Returns `None` when nothing has to go, leaving the attribute text as it
/// was; this includes values with no parseable declaration at all. Otherwise
/// the surviving declarations are re-serialized, the last one winning when a
/// property repeats. Declarations are split into a list first and filtered
/// afterwards, so removing one never shifts another out of view.
fn filter_style(element: &str, style: &str, allow_list: &AllowList) -> Option<String> {
    let declarations: Vec<Declaration> = split_declarations(style)
        .into_iter()
        .filter_map(parse_declaration)
        .flat_map(|declaration| expand_shorthand(declaration, allow_list))
        .collect();

    let mut changed = false;
    let mut kept: Vec<Declaration> = Vec::with_capacity(declarations.len());
    for declaration in declarations {
        if !allow_list.allows_style(&declaration.property) {
            trace!(
                "Dropped style property `{}` on <{element}>",
                declaration.property
            );
            changed = true;
            continue;
        }
        kept.retain(|existing| existing.property != declaration.property);
        kept.push(declaration);
    }

    changed.then(|| {
        kept.iter()
            .map(Declaration::serialize)
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// Add the `font-weight` longhand carried by a `font` shorthand.
///
/// Only the weight is modeled; the shorthand itself stays in the list and is
/// dropped by the caller unless `font` is allowed as a whole.
fn expand_shorthand(declaration: Declaration, allow_list: &AllowList) -> Vec<Declaration> {
    if declaration.property != "font" || allow_list.allows_style("font") {
        return vec![declaration];
    }
    let weight = Declaration {
        property: "font-weight".to_string(),
        value: font_weight(&declaration.value),
        important: declaration.important,
    };
    vec![declaration, weight]
}

/// Weight component of a `font` shorthand value, `normal` when absent.
///
/// The weight can only appear before the size, so scanning stops there.
fn font_weight(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    if CSS_WIDE_KEYWORDS.contains(&lower.as_str()) {
        return lower;
    }
    for token in lower.split_whitespace() {
        if FONT_WEIGHT_KEYWORDS.contains(&token) {
            return token.to_string();
        }
        if let Ok(weight) = token.parse::<u16>()
            && (1..=1000).contains(&weight)
        {
            return token.to_string();
        }
        if is_font_size(token) {
            break;
        }
    }
    "normal".to_string()
}

fn is_font_size(token: &str) -> bool {
    FONT_SIZE_KEYWORDS.contains(&token)
        || token.contains('/')
        || token.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        || token.starts_with("calc(")
        || token.starts_with("var(")
}

/// Split a declaration block on `;`, ignoring semicolons inside quotes or
/// parentheses (`url(data:image/png;base64,...)`).
fn split_declarations(style: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut quote: Option<char> = None;
    let mut depth = 0usize;
    let mut start = 0;

    for (idx, ch) in style.char_indices() {
        match (quote, ch) {
            (Some(open), c) if c == open => quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => quote = Some(ch),
            (None, '(') => depth += 1,
            (None, ')') => depth = depth.saturating_sub(1),
            (None, ';') if depth == 0 => {
                parts.push(&style[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&style[start..]);
    parts
}

/// Parse `name: value` into a lowercase property and a normalized value.
///
/// Returns `None` for blank or malformed declarations.
fn parse_declaration(raw: &str) -> Option<Declaration> {
    let (name, value) = raw.split_once(':')?;
    let property = name.trim().to_ascii_lowercase();
    let value = value.split_whitespace().collect::<Vec<_>>().join(" ");
    let (value, important) = split_important(&value);
    if property.is_empty() || value.is_empty() {
        return None;
    }
    Some(Declaration {
        property,
        value: value.to_string(),
        important,
    })
}

/// Separate a trailing `!important` from a declaration value.
fn split_important(value: &str) -> (&str, bool) {
    let lower = value.to_ascii_lowercase();
    if let Some(rest) = lower.strip_suffix("important")
        && let Some(rest) = rest.trim_end().strip_suffix('!')
    {
        return (value[..rest.len()].trim_end(), true);
    }
    (value, false)
}
