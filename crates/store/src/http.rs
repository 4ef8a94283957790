//! HTTP-backed template store.
//!
//! Static hosting answers unknown paths with the app's index page and a
//! 200, so a successful response is not proof the template exists. The
//! probe therefore rejects HTML content types and implausibly small
//! bodies before trusting a response.

use crate::{MIN_TEMPLATE_BYTES, StoreError, TemplateStore};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;

#[derive(Debug, Clone)]
pub struct HttpTemplateStore {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTemplateStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Reason this response cannot be a template, if any.
    fn rejection(response: &reqwest::Response) -> Option<String> {
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        rejection_for(content_type, response.content_length())
    }
}

/// The probe's plausibility checks on a response's headers: an HTML body or
/// an implausibly small announced length is a catch-all page, not a
/// document package.
fn rejection_for(content_type: &str, content_length: Option<u64>) -> Option<String> {
    if content_type.contains("text/html") {
        return Some(format!(
            "server answered with {content_type}, a catch-all page rather than a document"
        ));
    }
    if let Some(length) = content_length
        && length < MIN_TEMPLATE_BYTES
    {
        return Some(format!(
            "content length {length} is below the {MIN_TEMPLATE_BYTES}-byte minimum for a real document"
        ));
    }
    None
}

#[async_trait]
impl TemplateStore for HttpTemplateStore {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        let url = self.url_for(path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|source| StoreError::Transport {
                path: path.to_string(),
                source,
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound(path.to_string()));
        }
        if !response.status().is_success() {
            return Err(StoreError::Rejected {
                path: path.to_string(),
                reason: format!("server answered {}", response.status()),
            });
        }
        if let Some(reason) = Self::rejection(&response) {
            return Err(StoreError::Rejected {
                path: path.to_string(),
                reason,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| StoreError::Transport {
                path: path.to_string(),
                source,
            })?;
        if (bytes.len() as u64) < MIN_TEMPLATE_BYTES {
            return Err(StoreError::Rejected {
                path: path.to_string(),
                reason: format!(
                    "body of {} bytes is below the {MIN_TEMPLATE_BYTES}-byte minimum for a real document",
                    bytes.len()
                ),
            });
        }
        Ok(bytes.to_vec())
    }

    async fn exists(&self, path: &str) -> Result<bool, StoreError> {
        let url = self.url_for(path);
        let response = self
            .client
            .head(&url)
            .send()
            .await
            .map_err(|source| StoreError::Transport {
                path: path.to_string(),
                source,
            })?;

        if !response.status().is_success() {
            return Ok(false);
        }
        if let Some(reason) = Self::rejection(&response) {
            log::debug!("probe for {path} rejected: {reason}");
            return Ok(false);
        }
        Ok(true)
    }
}
