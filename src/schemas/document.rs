use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A piece of text handed to the embedding pipeline, together with the
/// metadata that travels with it into the vector store.
///
/// Every loader in this crate produces this one type, whatever path it took.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Document {
    pub page_content: String,
    pub metadata: HashMap<String, Value>,
}

impl Document {
    /// Constructs a new `Document` with the given page content and empty metadata.
    ///
    /// # Example
    /// ```rust,ignore
    /// let doc = Document::new("部署: 営業部");
    /// ```
    pub fn new(page_content: impl Into<String>) -> Self {
        Document {
            page_content: page_content.into(),
            metadata: HashMap::new(),
        }
    }

    /// Replaces the metadata of the document.
    pub fn with_metadata(mut self, metadata: HashMap<String, Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Inserts a single metadata entry.
    pub fn with_metadata_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn metadata_str(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).and_then(Value::as_str)
    }

    pub fn metadata_u64(&self, key: &str) -> Option<u64> {
        self.metadata.get(key).and_then(Value::as_u64)
    }
}
