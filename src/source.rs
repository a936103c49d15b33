//! Document source — where a row's documents come from.
//!
//! DESIGN
//! ======
//! `DocumentSource` is the seam between the loader and the backend. The
//! production implementation issues `GET /api/{collection}/{id}/documents`
//! with `reqwest`; tests substitute scripted sources to control completion
//! order. A source only reports success or failure; cancellation is the
//! loader's concern.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, COOKIE, HeaderMap, HeaderValue};

use crate::config::LoaderConfig;
use crate::documents::{DocumentsResponse, ResourceItem, RowId};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while fetching a row's documents.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("documents request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status.
    #[error("documents request returned status {status}")]
    Status { status: u16 },

    /// The response body was not a documents payload.
    #[error("documents response parse failed: {0}")]
    Decode(String),

    /// The session cookie is not a valid header value.
    #[error("invalid session cookie: {0}")]
    InvalidCookie(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl SourceError {
    /// Short machine-readable tag used in log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Request(_) => "request",
            Self::Status { .. } => "status",
            Self::Decode(_) => "decode",
            Self::InvalidCookie(_) => "invalid_cookie",
            Self::HttpClientBuild(_) => "client_build",
        }
    }
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetch every document attached to `row_id`.
    async fn fetch_documents(&self, row_id: RowId) -> Result<Vec<ResourceItem>, SourceError>;
}

#[async_trait]
impl<S: DocumentSource + ?Sized> DocumentSource for std::sync::Arc<S> {
    async fn fetch_documents(&self, row_id: RowId) -> Result<Vec<ResourceItem>, SourceError> {
        (**self).fetch_documents(row_id).await
    }
}

// =============================================================================
// HTTP SOURCE
// =============================================================================

pub struct HttpDocumentSource {
    http: reqwest::Client,
    base_url: String,
    collection: String,
}

impl HttpDocumentSource {
    /// Build an HTTP source from loader config.
    ///
    /// # Errors
    ///
    /// Returns an error if the session cookie is not a valid header value or
    /// the HTTP client fails to build.
    pub fn new(config: &LoaderConfig) -> Result<Self, SourceError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if let Some(cookie) = &config.session_cookie {
            let value = HeaderValue::from_str(cookie).map_err(|e| SourceError::InvalidCookie(e.to_string()))?;
            headers.insert(COOKIE, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| SourceError::HttpClientBuild(e.to_string()))?;

        Ok(Self { http, base_url: config.base_url.clone(), collection: config.collection.clone() })
    }

    #[must_use]
    pub fn documents_url(&self, row_id: RowId) -> String {
        format!("{}{}", self.base_url, documents_path(&self.collection, row_id))
    }
}

#[async_trait]
impl DocumentSource for HttpDocumentSource {
    async fn fetch_documents(&self, row_id: RowId) -> Result<Vec<ResourceItem>, SourceError> {
        let url = self.documents_url(row_id);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status { status: status.as_u16() });
        }

        let text = response
            .text()
            .await
            .map_err(|e| SourceError::Request(e.to_string()))?;
        parse_documents_response(&text)
    }
}

/// API path of a row's document list.
#[must_use]
pub fn documents_path(collection: &str, row_id: RowId) -> String {
    format!("/api/{collection}/{row_id}/documents")
}

/// Decode a documents response body. A missing `documents` field is empty.
///
/// # Errors
///
/// Returns [`SourceError::Decode`] when the body is not a JSON object of the
/// expected shape.
pub fn parse_documents_response(text: &str) -> Result<Vec<ResourceItem>, SourceError> {
    let body: DocumentsResponse = serde_json::from_str(text).map_err(|e| SourceError::Decode(e.to_string()))?;
    Ok(body.into_items())
}

#[cfg(test)]
#[path = "source_test.rs"]
mod tests;
