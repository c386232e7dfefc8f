//! Frontmatter parsing for document sources.
//!
//! A document may start with a YAML block fenced by `---` lines:
//!
//! ```text
//! ---
//! title: Button
//! order: 2
//! tags: [form, input]
//! ---
//! # Button
//! ```
//!
//! Known keys are typed fields of [`Frontmatter`]. Anything else lands in
//! [`Frontmatter::extra`] and is carried through to the serialized tree
//! without affecting sorting or display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Frontmatter fence line.
const FENCE: &str = "---";

/// Metadata parsed from the frontmatter block of a document.
///
/// All fields are optional. When a field is `None`, the key was not present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Frontmatter {
    /// Display title (overrides the formatted file name).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Short description for listings and meta tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,

    /// Free-form date string, kept as written.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,

    /// Explicit sort position among siblings (ascending).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,

    /// Unrecognized keys, preserved verbatim.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Frontmatter {
    /// Parse frontmatter from the YAML between the fences.
    ///
    /// Empty content (or an explicit YAML null) returns a default instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed, is not a mapping, or a known
    /// key has the wrong type (e.g. a non-numeric or non-finite `order`).
    pub fn from_yaml(content: &str) -> Result<Self, MetadataError> {
        let trimmed = content.trim();
        if trimmed.is_empty() || trimmed == "~" || trimmed == "null" {
            return Ok(Self::default());
        }

        let frontmatter: Self = serde_yaml::from_str(trimmed)
            .map_err(|e| MetadataError::Parse(format!("Invalid YAML: {e}")))?;
        if let Some(order) = frontmatter.order
            && !order.is_finite()
        {
            return Err(MetadataError::Parse(format!(
                "order must be a finite number, got {order}"
            )));
        }
        Ok(frontmatter)
    }

    /// Check if frontmatter has any values set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.author.is_none()
            && self.date.is_none()
            && self.tags.is_empty()
            && self.published.is_none()
            && self.order.is_none()
            && self.extra.is_empty()
    }
}

/// Error type for frontmatter operations.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// YAML parsing error.
    #[error("{0}")]
    Parse(String),
}

/// Split a document into its raw frontmatter block and body.
///
/// Returns `(None, content)` when the document has no frontmatter, including
/// when the opening fence is never closed. A leading byte-order mark is skipped.
#[must_use]
pub fn split_frontmatter(content: &str) -> (Option<&str>, &str) {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let Some(first_end) = content.find('\n') else {
        return (None, content);
    };
    if content[..first_end].trim_end() != FENCE {
        return (None, content);
    }

    let rest = &content[first_end + 1..];
    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            return (Some(&rest[..offset]), &rest[offset + line.len()..]);
        }
        offset += line.len();
    }

    (None, content)
}

/// Parse a whole document into frontmatter and body.
///
/// # Errors
///
/// Returns an error if a frontmatter block is present but cannot be parsed.
pub fn parse_document(content: &str) -> Result<(Frontmatter, &str), MetadataError> {
    let (yaml, body) = split_frontmatter(content);
    let frontmatter = match yaml {
        Some(yaml) => Frontmatter::from_yaml(yaml)?,
        None => Frontmatter::default(),
    };
    Ok((frontmatter, body))
}
