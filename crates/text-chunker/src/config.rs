use crate::error::{ChunkerError, Result};
use crate::language::Language;
use crate::length::LengthFunction;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for text splitting behavior
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Maximum chunk size, in units of `length_function`
    pub chunk_size: usize,

    /// Upper bound on content repeated between adjacent chunks
    pub chunk_overlap: usize,

    /// How fragments and chunks are measured
    pub length_function: LengthFunction,

    /// Retain separators in the output instead of dropping them
    pub keep_separator: bool,

    /// Treat separators as regular expressions rather than literal strings
    pub separator_is_regex: bool,

    /// Splitting strategy and its separators
    pub strategy: SplitStrategy,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            chunk_size: 1000,
            chunk_overlap: 200,
            length_function: LengthFunction::Characters,
            strategy: SplitStrategy::default(),
            keep_separator: false,
            separator_is_regex: false,
        }
    }
}

impl SplitterConfig {
    /// Create config optimized for embeddings (smaller, focused chunks)
    pub fn for_embeddings() -> Self {
        Self {
            chunk_size: 512,
            chunk_overlap: 64,
            ..Default::default()
        }
    }

    /// Create config optimized for LLM context (larger chunks measured in tokens)
    pub fn for_llm_context() -> Self {
        Self {
            chunk_size: 1024,
            chunk_overlap: 128,
            strategy: SplitStrategy::TokenApprox {
                separators: default_separators(),
            },
            ..Default::default()
        }
    }

    /// Create a recursive config using a language's separator hierarchy.
    ///
    /// Structural separators (headings, keywords) are kept in the output for
    /// everything except plain text.
    pub fn for_language(language: Language) -> Self {
        Self {
            strategy: SplitStrategy::Recursive {
                separators: language.separator_strings(),
            },
            keep_separator: language != Language::Text,
            ..Default::default()
        }
    }

    /// Create a single-separator config
    pub fn character(separator: impl Into<String>) -> Self {
        Self {
            strategy: SplitStrategy::Character {
                separator: separator.into(),
            },
            ..Default::default()
        }
    }

    /// Builder: set chunk size
    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Builder: set chunk overlap
    #[must_use]
    pub const fn with_chunk_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    /// Builder: set length function
    #[must_use]
    pub fn with_length_function(mut self, length_function: LengthFunction) -> Self {
        self.length_function = length_function;
        self
    }

    /// Builder: set strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: SplitStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builder: keep separators in output
    #[must_use]
    pub const fn with_keep_separator(mut self, keep_separator: bool) -> Self {
        self.keep_separator = keep_separator;
        self
    }

    /// Builder: interpret separators as regular expressions
    #[must_use]
    pub const fn with_separator_regex(mut self, separator_is_regex: bool) -> Self {
        self.separator_is_regex = separator_is_regex;
        self
    }

    /// Measure actually applied to fragments under this config
    #[must_use]
    pub fn effective_length_function(&self) -> LengthFunction {
        match self.strategy {
            SplitStrategy::TokenApprox { .. } => LengthFunction::ApproxTokens,
            _ => self.length_function.clone(),
        }
    }

    /// Parse and validate a TOML configuration
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate().map_err(ChunkerError::invalid_config)?;
        Ok(config)
    }

    /// Load and validate a TOML configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml_str(&raw)
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.chunk_size == 0 {
            return Err("chunk_size must be > 0".to_string());
        }

        if self.chunk_overlap >= self.chunk_size {
            return Err(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                self.chunk_overlap, self.chunk_size
            ));
        }

        if self.separator_is_regex {
            for separator in self.strategy.separators() {
                if let Err(e) = regex::Regex::new(separator) {
                    return Err(format!("separator {separator:?} is not a valid regex: {e}"));
                }
            }
        }

        Ok(())
    }
}

/// Strategy for reducing text to mergeable fragments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SplitStrategy {
    /// Split on one fixed separator, no fallback
    Character {
        #[serde(default = "default_separator")]
        separator: String,
    },

    /// Try separators coarsest first, refining only fragments that do not fit
    Recursive {
        #[serde(default = "default_separators")]
        separators: Vec<String>,
    },

    /// Recursive splitting with sizes always measured in approximate tokens
    TokenApprox {
        #[serde(default = "default_separators")]
        separators: Vec<String>,
    },
}

impl Default for SplitStrategy {
    fn default() -> Self {
        Self::Recursive {
            separators: default_separators(),
        }
    }
}

impl SplitStrategy {
    /// Get strategy name as string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Character { .. } => "character",
            Self::Recursive { .. } => "recursive",
            Self::TokenApprox { .. } => "token_approx",
        }
    }

    /// Separators this strategy may split on, coarsest first
    pub fn separators(&self) -> Vec<&str> {
        match self {
            Self::Character { separator } => vec![separator.as_str()],
            Self::Recursive { separators } | Self::TokenApprox { separators } => {
                separators.iter().map(String::as_str).collect()
            }
        }
    }
}

fn default_separator() -> String {
    "\n\n".to_string()
}

fn default_separators() -> Vec<String> {
    Language::Text.separator_strings()
}
