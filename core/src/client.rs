//! # ELN HTTP Client
//!
//! A thin, typed wrapper over the RSpace-compatible REST API. All endpoints
//! live under `/api/v1`, and every request authenticates with the `apiKey`
//! header carried as a client-wide default.
//!
//! Higher-level flows (tag handling, pagination, experiment summaries) live
//! in [`crate::documents`] and [`crate::experiment`]; this module only knows
//! how to move payloads over the wire and classify failures.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::multipart::{Form, Part};
use reqwest::{Response, StatusCode};
use thiserror::Error;
use tracing::debug;

use eln_common::credentials::{API_KEY_VAR, ApiKey};
use eln_common::document::{DocumentInfo, DocumentList, NewDocument, ServerStatus, UploadedFile};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum Error {
    /// Connection, timeout or decoding failure below the API layer.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server rejected the credential.
    #[error("authentication rejected (HTTP {status}); check {API_KEY_VAR}")]
    Auth { status: u16 },

    /// Any other non-success response, with the body the server sent back.
    #[error("server returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    /// The key contains bytes that cannot go into an HTTP header.
    #[error("API key is not a valid HTTP header value")]
    KeyHeader(#[from] reqwest::header::InvalidHeaderValue),
}

/// Client for one ELN server.
#[derive(Debug, Clone)]
pub struct ElnClient {
    base_url: String,
    http: reqwest::Client,
}

impl ElnClient {
    /// Builds a client for `base_url`, authenticating every request with
    /// the given key.
    pub fn new(base_url: impl Into<String>, key: &ApiKey) -> Result<Self, Error> {
        let mut value = HeaderValue::from_str(key.as_str())?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("apikey"), value);

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    /// The server this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v1{}", self.base_url, path)
    }

    /// `GET /status`, the liveness and version probe.
    pub async fn server_status(&self) -> Result<ServerStatus, Error> {
        let resp = self.http.get(self.endpoint("/status")).send().await?;
        Ok(check(resp).await?.json().await?)
    }

    /// `GET /documents`: one page of the document listing.
    ///
    /// Pages are numbered from zero, matching the API.
    pub async fn documents_page(&self, page_number: u32, page_size: u32) -> Result<DocumentList, Error> {
        debug!(page_number, page_size, "fetching document page");
        let resp = self
            .http
            .get(self.endpoint("/documents"))
            .query(&[("pageNumber", page_number), ("pageSize", page_size)])
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// `POST /documents`: create a document.
    pub async fn create_document(&self, doc: &NewDocument) -> Result<DocumentInfo, Error> {
        debug!(name = %doc.name, "creating document");
        let resp = self
            .http
            .post(self.endpoint("/documents"))
            .json(doc)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }

    /// `POST /files`: upload a file to the gallery.
    pub async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        caption: Option<String>,
    ) -> Result<UploadedFile, Error> {
        debug!(file_name, size = bytes.len(), "uploading file");
        let part = Part::bytes(bytes).file_name(file_name.to_string());
        let mut form = Form::new().part("file", part);
        if let Some(caption) = caption {
            form = form.text("caption", caption);
        }

        let resp = self
            .http
            .post(self.endpoint("/files"))
            .multipart(form)
            .send()
            .await?;
        Ok(check(resp).await?.json().await?)
    }
}

/// Maps non-success statuses to [`Error`] before any decoding happens.
async fn check(resp: Response) -> Result<Response, Error> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(Error::Auth { status: status.as_u16() });
    }
    let message = resp.text().await.unwrap_or_default();
    Err(Error::Api {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> ApiKey {
        ApiKey::new("test-key").unwrap()
    }

    #[test]
    fn base_url_is_normalized() {
        let client = ElnClient::new("https://eln.example.org/", &key()).unwrap();
        assert_eq!(client.base_url(), "https://eln.example.org");
        assert_eq!(client.endpoint("/status"), "https://eln.example.org/api/v1/status");
    }

    #[test]
    fn control_characters_in_key_are_rejected() {
        let bad = ApiKey::new("line\nbreak").unwrap();
        assert!(matches!(
            ElnClient::new("https://eln.example.org", &bad),
            Err(Error::KeyHeader(_))
        ));
    }

    #[test]
    fn auth_error_mentions_the_env_var_not_the_key() {
        let err = Error::Auth { status: 401 };
        let text = err.to_string();
        assert!(text.contains("RSPACE_API_KEY"));
        assert!(text.contains("401"));
    }
}
