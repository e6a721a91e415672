use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Metadata key holding a chunk's 0-based position within its document
pub const CHUNK_INDEX_KEY: &str = "chunk_index";

/// Metadata key holding the number of chunks produced from a document
pub const TOTAL_CHUNKS_KEY: &str = "total_chunks";

/// Arbitrary per-document metadata
pub type Metadata = HashMap<String, Value>;

/// A piece of text with metadata, either a loaded source document or a chunk of one
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// Optional identifier, opaque to the chunker
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The text content
    pub content: String,

    /// Metadata carried through to every chunk
    #[serde(default)]
    pub metadata: Metadata,
}

impl Document {
    /// Create a document with content only
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: None,
            content: content.into(),
            metadata: Metadata::new(),
        }
    }

    /// Builder: set identifier
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Builder: replace metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Builder: add one metadata entry
    #[must_use]
    pub fn add_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Position of this chunk within its source document, if it is a chunk
    #[must_use]
    pub fn chunk_index(&self) -> Option<usize> {
        self.metadata_usize(CHUNK_INDEX_KEY)
    }

    /// Number of chunks the source document produced, if this is a chunk
    #[must_use]
    pub fn total_chunks(&self) -> Option<usize> {
        self.metadata_usize(TOTAL_CHUNKS_KEY)
    }

    fn metadata_usize(&self, key: &str) -> Option<usize> {
        self.metadata
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|v| usize::try_from(v).ok())
    }

    /// Derive the chunk document at `index` of `total` from this document
    pub(crate) fn derive_chunk(&self, content: String, index: usize, total: usize) -> Self {
        let mut metadata = self.metadata.clone();
        metadata.insert(CHUNK_INDEX_KEY.to_string(), Value::from(index));
        metadata.insert(TOTAL_CHUNKS_KEY.to_string(), Value::from(total));

        Self {
            id: self.id.as_ref().map(|id| format!("{id}-chunk-{index}")),
            content,
            metadata,
        }
    }
}
