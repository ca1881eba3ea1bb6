//! Wire types for the Nexus component search API

use serde::Deserialize;
use std::fmt;

/// A Docker image record as catalogued by Nexus. All three fields are
/// required before the record is eligible for any operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageComponent {
    pub name: String,
    pub version: String,
    /// Opaque identifier used as the delete-endpoint key.
    pub id: String,
}

impl fmt::Display for ImageComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.name, self.version, self.id)
    }
}

/// Loosely-typed search item as returned by the API. Unknown fields are
/// ignored; the required keys may each be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawComponent {
    pub name: Option<String>,
    pub version: Option<String>,
    pub id: Option<String>,
}

impl RawComponent {
    /// Promote to an [`ImageComponent`], or `None` when any required key
    /// is absent. Ineligible items are skipped silently.
    pub fn into_component(self) -> Option<ImageComponent> {
        Some(ImageComponent {
            name: self.name?,
            version: self.version?,
            id: self.id?,
        })
    }
}

/// One page of search results.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<RawComponent>,
    #[serde(rename = "continuationToken", default)]
    pub continuation_token: Option<String>,
}

impl SearchResponse {
    /// Token for the next page. An absent, null, or empty token all signal
    /// that this page is the last one.
    pub fn next_token(&self) -> Option<&str> {
        self.continuation_token.as_deref().filter(|t| !t.is_empty())
    }
}
