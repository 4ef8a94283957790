//! Filesystem-backed template store.

use crate::{StoreError, TemplateStore};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Serves templates from a directory, with path traversal blocked: every
/// resolved path must stay inside the base directory.
#[derive(Debug)]
pub struct FilesystemTemplateStore {
    base_path: PathBuf,
    /// Canonicalized base for containment checks; `None` when the base
    /// directory does not exist yet.
    canonical_base: Option<PathBuf>,
}

impl FilesystemTemplateStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base = base_path.as_ref().to_path_buf();
        let canonical = base.canonicalize().ok();
        Self {
            base_path: base,
            canonical_base: canonical,
        }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Resolves a template path under the base directory, or `None` when
    /// the path is absolute or would escape the base.
    fn resolve_safe(&self, path: &str) -> Option<PathBuf> {
        if Path::new(path).is_absolute() {
            return None;
        }

        let full_path = self.base_path.join(path);
        if let Ok(canonical) = full_path.canonicalize()
            && let Some(ref base) = self.canonical_base
        {
            return canonical.starts_with(base).then_some(canonical);
        }

        // The file may not exist yet; reject any ".." component outright.
        let traverses = Path::new(path)
            .components()
            .any(|c| matches!(c, std::path::Component::ParentDir));
        (!traverses).then_some(full_path)
    }
}

#[async_trait]
impl TemplateStore for FilesystemTemplateStore {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        let full_path = self.resolve_safe(path).ok_or_else(|| StoreError::Rejected {
            path: path.to_string(),
            reason: "path escapes the template directory".to_string(),
        })?;

        tokio::fs::read(&full_path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StoreError::NotFound(path.to_string())
            } else {
                StoreError::Io {
                    path: path.to_string(),
                    source: e,
                }
            }
        })
    }

    async fn exists(&self, path: &str) -> Result<bool, StoreError> {
        let Some(full_path) = self.resolve_safe(path) else {
            return Ok(false);
        };
        Ok(tokio::fs::metadata(&full_path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false))
    }
}
