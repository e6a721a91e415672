use crate::config::{SplitStrategy, SplitterConfig};
use crate::error::Result;
use crate::merge::MergeEngine;
use crate::separator::Separator;

/// Execute the configured split strategy on raw text
#[derive(Debug, Clone)]
pub(crate) struct StrategyExecutor {
    recursive: bool,
    separators: Vec<Separator>,
    keep_separator: bool,
    merger: MergeEngine,
}

impl StrategyExecutor {
    pub fn new(config: &SplitterConfig) -> Result<Self> {
        let mut separators = config
            .strategy
            .separators()
            .into_iter()
            .map(|raw| Separator::compile(raw, config.separator_is_regex))
            .collect::<Result<Vec<_>>>()?;
        if separators.is_empty() {
            separators.push(Separator::Empty);
        }

        Ok(Self {
            recursive: !matches!(config.strategy, SplitStrategy::Character { .. }),
            separators,
            keep_separator: config.keep_separator,
            merger: MergeEngine::new(
                config.chunk_size,
                config.chunk_overlap,
                config.effective_length_function(),
            ),
        })
    }

    /// Measure text with the configured length function
    pub fn measure(&self, text: &str) -> usize {
        self.merger.measure(text)
    }

    /// Execute the configured strategy.
    ///
    /// Text that already fits in one chunk comes back trimmed and otherwise untouched.
    pub fn execute(&self, text: &str) -> Vec<String> {
        if self.merger.fits(text) {
            let trimmed = text.trim();
            return if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![trimmed.to_string()]
            };
        }

        if self.recursive {
            self.split_recursive(text, &self.separators)
        } else {
            self.split_on_character(text)
        }
    }

    /// Single separator, no fallback
    fn split_on_character(&self, text: &str) -> Vec<String> {
        let Some(separator) = self.separators.first() else {
            return Vec::new();
        };

        let fragments: Vec<&str> = separator
            .split(text, self.keep_separator)
            .into_iter()
            .filter(|fragment| !fragment.trim().is_empty())
            .collect();

        self.merger
            .merge(&fragments, separator.joiner(self.keep_separator))
    }

    /// Split on the coarsest separator present, descending into finer
    /// separators only for fragments that are still too large.
    fn split_recursive(&self, text: &str, separators: &[Separator]) -> Vec<String> {
        let index = separators
            .iter()
            .position(|separator| separator.occurs_in(text))
            .unwrap_or(separators.len().saturating_sub(1));
        let Some(separator) = separators.get(index) else {
            return self.merger.merge(&[text], "");
        };
        let finer = &separators[index + 1..];
        let joiner = separator.joiner(self.keep_separator);

        log::trace!(
            "splitting {} chars on {:?} ({} finer separators left)",
            text.chars().count(),
            separator,
            finer.len()
        );

        let mut chunks = Vec::new();
        let mut pending: Vec<&str> = Vec::new();

        for fragment in separator.split(text, self.keep_separator) {
            if self.merger.fits(fragment) {
                pending.push(fragment);
                continue;
            }

            if !pending.is_empty() {
                chunks.extend(self.merger.merge(&pending, joiner));
                pending.clear();
            }

            if finer.is_empty() {
                log::warn!(
                    "Fragment of size {} cannot be split further, emitting it as is",
                    self.measure(fragment)
                );
                if !fragment.trim().is_empty() {
                    chunks.push(fragment.to_string());
                }
            } else {
                chunks.extend(self.split_recursive(fragment, finer));
            }
        }

        if !pending.is_empty() {
            chunks.extend(self.merger.merge(&pending, joiner));
        }

        chunks
    }
}
