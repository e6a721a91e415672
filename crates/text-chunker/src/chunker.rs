use crate::config::SplitterConfig;
use crate::error::{ChunkerError, Result};
use crate::strategy::StrategyExecutor;
use crate::types::{Document, Metadata};

/// Main chunker interface: splits text and documents into bounded chunks
#[derive(Debug, Clone)]
pub struct TextChunker {
    config: SplitterConfig,
    executor: StrategyExecutor,
}

impl TextChunker {
    /// Create a new chunker, rejecting invalid configuration up front
    pub fn new(config: SplitterConfig) -> Result<Self> {
        config.validate().map_err(ChunkerError::invalid_config)?;
        let executor = StrategyExecutor::new(&config)?;
        Ok(Self { config, executor })
    }

    /// Split raw text into chunk strings
    #[must_use]
    pub fn split_text(&self, text: &str) -> Vec<String> {
        self.executor.execute(text)
    }

    /// Split one document into chunk documents.
    ///
    /// Every chunk carries the source metadata plus `chunk_index` and
    /// `total_chunks`. Empty or blank content yields no chunks.
    #[must_use]
    pub fn split_document(&self, document: &Document) -> Vec<Document> {
        let pieces = self.split_text(&document.content);
        let total = pieces.len();

        log::debug!(
            "Split document {} ({} chars) into {total} chunks with {} strategy",
            document.id.as_deref().unwrap_or("<anonymous>"),
            document.content.chars().count(),
            self.config.strategy.as_str()
        );

        pieces
            .into_iter()
            .enumerate()
            .map(|(index, content)| document.derive_chunk(content, index, total))
            .collect()
    }

    /// Split documents independently, concatenating their chunks in order
    #[must_use]
    pub fn split_documents(&self, documents: &[Document]) -> Vec<Document> {
        documents
            .iter()
            .flat_map(|document| self.split_document(document))
            .collect()
    }

    /// Build documents from parallel text and metadata slices, then split them.
    ///
    /// Texts without a matching metadata entry get empty metadata.
    pub fn create_documents<S: AsRef<str>>(
        &self,
        texts: &[S],
        metadatas: &[Metadata],
    ) -> Result<Vec<Document>> {
        if metadatas.len() > texts.len() {
            return Err(ChunkerError::MetadataMismatch {
                texts: texts.len(),
                metadatas: metadatas.len(),
            });
        }

        let documents: Vec<Document> = texts
            .iter()
            .enumerate()
            .map(|(i, text)| {
                Document::new(text.as_ref())
                    .with_metadata(metadatas.get(i).cloned().unwrap_or_default())
            })
            .collect();

        Ok(self.split_documents(&documents))
    }

    /// Measure text the way this chunker sizes chunks
    #[must_use]
    pub fn measure(&self, text: &str) -> usize {
        self.executor.measure(text)
    }

    /// Get configuration
    #[must_use]
    pub const fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Get statistics about chunking, sized with this chunker's measure
    #[must_use]
    pub fn get_stats(&self, chunks: &[Document]) -> ChunkingStats {
        let sizes: Vec<usize> = chunks.iter().map(|c| self.measure(&c.content)).collect();
        let total_size: usize = sizes.iter().sum();

        ChunkingStats {
            total_chunks: chunks.len(),
            total_size,
            avg_size: if sizes.is_empty() {
                0
            } else {
                total_size / sizes.len()
            },
            min_size: sizes.iter().copied().min().unwrap_or(0),
            max_size: sizes.iter().copied().max().unwrap_or(0),
            oversized_chunks: sizes
                .iter()
                .filter(|&&size| size > self.config.chunk_size)
                .count(),
        }
    }
}

/// Statistics about chunking results
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkingStats {
    pub total_chunks: usize,
    pub total_size: usize,
    pub avg_size: usize,
    pub min_size: usize,
    pub max_size: usize,
    /// Chunks above `chunk_size`, i.e. fragments that could not be split further
    pub oversized_chunks: usize,
}

impl std::fmt::Display for ChunkingStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Chunks: {} | Size: {} | Avg: {} | Range: {}-{} | Oversized: {}",
            self.total_chunks,
            self.total_size,
            self.avg_size,
            self.min_size,
            self.max_size,
            self.oversized_chunks
        )
    }
}
