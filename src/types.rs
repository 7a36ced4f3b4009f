//! Common types used throughout the directory
//!
//! This module contains the record type shared by the data sources,
//! the pagination engine and the renderers.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

// ============================================================================
// Employee Record
// ============================================================================

/// One employee entry as served by the directory endpoint
///
/// Records are never written back. Fields beyond the four below are ignored
/// on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Stable unique identifier; numeric ids are kept in their decimal form
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Job role (e.g. "member", "admin")
    pub role: String,
}

impl Employee {
    /// Create a new employee record
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role: role.into(),
        }
    }
}

/// Accept either `"id": "7"` or `"id": 7`
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Number(n) => n.to_string(),
    })
}

// ============================================================================
// Refetch Policy
// ============================================================================

/// When the viewer goes back to the data source
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum RefetchPolicy {
    /// Fetch the full set once per load, paginate in memory afterwards
    #[default]
    Once,
    /// Re-issue the full fetch after every page change
    OnPageChange,
}
