//! Template byte storage.
//!
//! A [`TemplateStore`] resolves a template file name to its package bytes.
//! Fetching and existence probing are the only suspension points in the
//! whole render path, so the trait is async; everything downstream of it is
//! synchronous. Fetches are one-shot: a transport failure propagates with
//! its cause attached and is never retried here.

mod filesystem;
mod http;
mod memory;

pub use filesystem::FilesystemTemplateStore;
pub use http::HttpTemplateStore;
pub use memory::InMemoryTemplateStore;

use async_trait::async_trait;
use thiserror::Error;

/// Smallest byte count a real document package can plausibly have. Hosting
/// setups answer unknown paths with a catch-all page instead of a 404;
/// anything under this size is such a page, not a template.
pub const MIN_TEMPLATE_BYTES: u64 = 1000;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("template not found: {0}")]
    NotFound(String),
    /// The store answered, but with something that is not a template
    /// (an HTML error page, an implausibly small body, a traversal path).
    #[error("rejected template at {path}: {reason}")]
    Rejected { path: String, reason: String },
    #[error("transport failure fetching {path}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// One-shot template lookup and retrieval.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Returns the package bytes stored under `path`.
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, StoreError>;

    /// Probes whether a real template exists under `path` without
    /// retrieving it. A catch-all response is reported as absent, not as
    /// an error.
    async fn exists(&self, path: &str) -> Result<bool, StoreError>;
}
