//! Document wire types.
//!
//! The backend has shipped two shapes over time: `{id, type, status, name}`
//! and the public variant `{id, type, filename, hasPreview, size}` without a
//! status. Both decode into [`ResourceItem`]; anything not listed here is
//! ignored.

use serde::{Deserialize, Serialize};

/// Identifier of one row (student record) on the page.
pub type RowId = i64;

// =============================================================================
// STATUS
// =============================================================================

/// Review status of an uploaded document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    #[default]
    Draft,
    Pending,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub const ALL: [Self; 4] = [Self::Draft, Self::Pending, Self::Approved, Self::Rejected];

    /// Parse a wire status. Unknown values are drafts.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Draft,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

// =============================================================================
// RESOURCE ITEM
// =============================================================================

/// One document attached to a row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "DocumentWire")]
pub struct ResourceItem {
    pub id: i64,
    /// Open type tag such as `VIDEO` or `FINAL_THESIS.PDF`.
    #[serde(rename = "type")]
    pub kind: String,
    pub status: DocumentStatus,
    pub name: String,
}

impl ResourceItem {
    #[must_use]
    pub fn new(id: i64, kind: impl Into<String>, status: DocumentStatus, name: impl Into<String>) -> Self {
        Self { id, kind: kind.into(), status, name: name.into() }
    }
}

#[derive(Deserialize)]
struct DocumentWire {
    id: i64,
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    filename: Option<String>,
}

impl From<DocumentWire> for ResourceItem {
    fn from(wire: DocumentWire) -> Self {
        Self {
            id: wire.id,
            kind: wire.kind.unwrap_or_default(),
            status: wire
                .status
                .as_deref()
                .map_or(DocumentStatus::Draft, DocumentStatus::parse),
            name: wire.name.or(wire.filename).unwrap_or_default(),
        }
    }
}

/// Body of `GET /api/{collection}/{id}/documents`.
#[derive(Debug, Default, Deserialize)]
pub struct DocumentsResponse {
    #[serde(default)]
    pub documents: Option<Vec<ResourceItem>>,
}

impl DocumentsResponse {
    #[must_use]
    pub fn into_items(self) -> Vec<ResourceItem> {
        self.documents.unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "documents_test.rs"]
mod tests;
