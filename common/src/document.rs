//! # ELN API Payload Models
//!
//! Serde models for the subset of the RSpace-compatible REST API this tool
//! talks to. Wire names are camelCase; everything here stays snake_case and
//! lets serde do the renaming.

use serde::{Deserialize, Serialize};

/// A document as returned by `GET /documents` and `POST /documents`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentInfo {
    pub id: u64,
    #[serde(default)]
    pub global_id: Option<String>,
    pub name: String,
    /// Comma-separated tag list, as the server stores it.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
    #[serde(default)]
    pub last_modified: Option<String>,
}

/// One page of the document listing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentList {
    pub total_hits: u64,
    #[serde(default)]
    pub documents: Vec<DocumentInfo>,
}

/// A rich-text field of a new document. The ELN accepts HTML content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub content: String,
}

/// Body of `POST /documents`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub name: String,
    /// Comma-joined tags; the API takes a single string, not an array.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    pub fields: Vec<Field>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<u64>,
}

impl NewDocument {
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: None,
            fields: vec![Field { content: content.into() }],
            parent_folder_id: None,
        }
    }
}

/// A gallery file as returned by `POST /files`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    pub id: u64,
    #[serde(default)]
    pub global_id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub content_type: Option<String>,
}

/// Response of `GET /status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub message: String,
    #[serde(default)]
    pub rspace_version: Option<String>,
}
