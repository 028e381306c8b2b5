// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Allow-list of attributes and inline style properties that survive sanitizing.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Attributes kept on pasted elements by default.
pub const DEFAULT_ATTRIBUTES: [&str; 5] = ["style", "href", "alt", "src", "align"];
/// Inline style properties kept by default.
pub const DEFAULT_STYLES: [&str; 3] = ["color", "text-align", "font-weight"];

/// Attribute names and style properties permitted in pasted HTML.
///
/// Names are stored lowercase and matched ASCII case-insensitively.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowList {
    attributes: BTreeSet<String>,
    styles: BTreeSet<String>,
}

/// On-disk shape of an allow-list override. Missing keys keep the defaults.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AllowListFile {
    attributes: Option<Vec<String>>,
    styles: Option<Vec<String>>,
}

impl Default for AllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTES, DEFAULT_STYLES)
    }
}

impl AllowList {
    pub fn new<A, S>(attributes: A, styles: S) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        S: IntoIterator,
        S::Item: AsRef<str>,
    {
        Self {
            attributes: normalize_names(attributes),
            styles: normalize_names(styles),
        }
    }

    /// Parse an allow-list override from JSON.
    ///
    /// # Examples
    ///
    /// ```
    /// use elnpaste::AllowList;
    ///
    /// let list = AllowList::from_json(r#"{ "styles": ["color", "font-style"] }"#).unwrap();
    /// assert!(list.allows_style("font-style"));
    /// assert!(list.allows_attribute("href"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let file: AllowListFile =
            serde_json::from_str(json).context("Failed to parse allow-list JSON")?;
        let defaults = Self::default();
        Ok(Self {
            attributes: file
                .attributes
                .map(normalize_names)
                .unwrap_or(defaults.attributes),
            styles: file.styles.map(normalize_names).unwrap_or(defaults.styles),
        })
    }

    /// Load an allow-list override from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read allow-list file: {:?}", path))?;
        Self::from_json(&raw).with_context(|| format!("Invalid allow-list file: {:?}", path))
    }

    pub fn allows_attribute(&self, name: &str) -> bool {
        self.attributes.contains(&name.to_ascii_lowercase())
    }

    pub fn allows_style(&self, property: &str) -> bool {
        self.styles.contains(&property.to_ascii_lowercase())
    }

    /// Allowed attribute names, lowercase and sorted.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(String::as_str)
    }

    /// Allowed style properties, lowercase and sorted.
    pub fn styles(&self) -> impl Iterator<Item = &str> {
        self.styles.iter().map(String::as_str)
    }
}

fn normalize_names<I>(names: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| name.as_ref().trim().to_ascii_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::AllowList;

    #[test]
    fn default_allow_list_matches_editor_policy() {
        let list = AllowList::default();

        let attributes: Vec<_> = list.attributes().collect();
        assert_eq!(attributes, vec!["align", "alt", "href", "src", "style"]);
        let styles: Vec<_> = list.styles().collect();
        assert_eq!(styles, vec!["color", "font-weight", "text-align"]);
    }

    // Lookups ignore case in both the configured names and the query.
    #[test]
    fn allow_list_matches_case_insensitively() {
        let list = AllowList::new(["HREF"], [" Color "]);

        assert!(list.allows_attribute("href"));
        assert!(list.allows_attribute("Href"));
        assert!(list.allows_style("COLOR"));
        assert!(!list.allows_style("margin"));
    }

    // Keys missing from the override keep their defaults.
    #[test]
    fn from_json_overrides_only_given_keys() {
        let list = AllowList::from_json(r#"{ "attributes": ["title"] }"#).unwrap();

        assert!(list.allows_attribute("title"));
        assert!(!list.allows_attribute("href"));
        assert!(list.allows_style("text-align"));
    }

    // Typos in config keys should fail loudly instead of silently using defaults.
    #[test]
    fn from_json_rejects_unknown_keys() {
        assert!(AllowList::from_json(r#"{ "attribtues": [] }"#).is_err());
    }

    #[test]
    fn from_path_reads_json_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("allow.json");
        fs::write(&path, r#"{ "styles": [] }"#).unwrap();

        let list = AllowList::from_path(&path).unwrap();
        assert_eq!(list.styles().count(), 0);
        assert!(list.allows_attribute("style"));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let tmp = TempDir::new().unwrap();
        let err = AllowList::from_path(&tmp.path().join("missing.json")).unwrap_err();

        assert!(err.to_string().contains("Failed to read allow-list file"));
    }
}
