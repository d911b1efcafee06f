//! # Document Operations
//!
//! The create/list flows built on top of [`ElnClient`].
//!
//! Every document created by this tool carries the `API` tag so it stays
//! distinguishable from hand-written notebook entries.

use tracing::info;

use eln_common::document::{DocumentInfo, NewDocument};

use crate::client::{ElnClient, Error};

/// Tag stamped onto everything this tool creates.
pub const API_TAG: &str = "API";

/// Page size used by the full-listing loop.
const LIST_PAGE_SIZE: u32 = 20;

/// Appends [`API_TAG`] unless it is already present (case-sensitive, like
/// the server's tag matching).
pub fn ensure_api_tag(mut tags: Vec<String>) -> Vec<String> {
    if !tags.iter().any(|t| t == API_TAG) {
        tags.push(API_TAG.to_string());
    }
    tags
}

/// Joins tags into the comma-separated string the API expects.
pub fn join_tags(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        return None;
    }
    Some(tags.join(","))
}

/// Creates a document with the given HTML content.
pub async fn create(
    client: &ElnClient,
    name: &str,
    html: String,
    tags: Vec<String>,
    parent_folder_id: Option<u64>,
) -> Result<DocumentInfo, Error> {
    let tags = ensure_api_tag(tags);

    let mut doc = NewDocument::new(name, html);
    doc.tags = join_tags(&tags);
    doc.parent_folder_id = parent_folder_id;

    let created = client.create_document(&doc).await?;
    info!(id = created.id, name = %created.name, "document created");
    Ok(created)
}

/// Number of documents on the server, from the listing's `totalHits`.
pub async fn count(client: &ElnClient) -> Result<u64, Error> {
    Ok(client.documents_page(0, 1).await?.total_hits)
}

/// Fetches every document, page by page, in server order.
///
/// The loop stops at the first page that comes back empty rather than
/// trusting `totalHits`, which can shift while we iterate.
pub async fn list_all(client: &ElnClient) -> Result<Vec<DocumentInfo>, Error> {
    let mut documents = Vec::new();
    let mut page_number = 0;

    loop {
        let page = client.documents_page(page_number, LIST_PAGE_SIZE).await?;
        if page.documents.is_empty() {
            break;
        }
        documents.extend(page.documents);
        page_number += 1;
    }

    info!(count = documents.len(), "retrieved document listing");
    Ok(documents)
}
