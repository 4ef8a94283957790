//! In-memory template store for tests and embedded templates.

use crate::{StoreError, TemplateStore};
use async_trait::async_trait;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct InMemoryTemplateStore {
    templates: HashMap<String, Vec<u8>>,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) -> &mut Self {
        self.templates.insert(path.into(), bytes.into());
        self
    }
}

#[async_trait]
impl TemplateStore for InMemoryTemplateStore {
    async fn fetch(&self, path: &str) -> Result<Vec<u8>, StoreError> {
        self.templates
            .get(path)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(path.to_string()))
    }

    async fn exists(&self, path: &str) -> Result<bool, StoreError> {
        Ok(self.templates.contains_key(path))
    }
}
