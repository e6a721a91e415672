//! # Context Text Chunker
//!
//! Splits long documents into bounded, overlapping chunks for embedding and
//! retrieval.
//!
//! ## Philosophy
//!
//! The chunker creates chunks that:
//! - Break at the coarsest natural boundary available (paragraph, line,
//!   sentence, word) and fall back to finer ones only where needed
//! - Stay within a configurable size, measured in characters or approximate tokens
//! - Repeat a bounded tail of the previous chunk to preserve context across boundaries
//! - Carry the source document's metadata plus their position in the sequence
//!
//! ## Architecture
//!
//! ```text
//! Document
//!     │
//!     ├──> Split Strategy
//!     │    ├─> Character: one separator, no fallback
//!     │    └─> Recursive: coarsest separator present, refine oversized fragments
//!     │
//!     ├──> Merge Engine
//!     │    ├─> Accumulate fragments up to chunk_size
//!     │    └─> Retain a tail of at most chunk_overlap as the next chunk's seed
//!     │
//!     └──> Chunk Assembly
//!          └─> Copy metadata, add chunk_index / total_chunks
//! ```
//!
//! ## Example
//!
//! ```rust
//! use context_text_chunker::{Document, SplitterConfig, TextChunker};
//!
//! let config = SplitterConfig::default()
//!     .with_chunk_size(40)
//!     .with_chunk_overlap(10);
//! let chunker = TextChunker::new(config).unwrap();
//!
//! let document = Document::new("First paragraph.\n\nSecond paragraph is a little longer.")
//!     .add_metadata("source", "notes.txt");
//!
//! for chunk in chunker.split_document(&document) {
//!     println!("#{:?}: {}", chunk.chunk_index(), chunk.content);
//! }
//! ```

mod chunker;
mod config;
mod error;
mod language;
mod length;
mod merge;
mod separator;
mod strategy;
mod types;

pub use chunker::{ChunkingStats, TextChunker};
pub use config::{SplitStrategy, SplitterConfig};
pub use error::{ChunkerError, Result};
pub use language::Language;
pub use length::{approx_tokens, CustomLength, LengthFunction};
pub use types::{Document, Metadata, CHUNK_INDEX_KEY, TOTAL_CHUNKS_KEY};
