use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Characters per approximate token
const CHARS_PER_TOKEN: usize = 4;

/// Pluggable measure used to size fragments and chunks
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthFunction {
    /// Number of Unicode scalar values
    #[default]
    Characters,

    /// `ceil(chars / 4)`, a fast approximation of a subword tokenizer
    ApproxTokens,

    /// Caller-supplied measure (cannot be loaded from a config file)
    #[serde(skip)]
    Custom(CustomLength),
}

impl LengthFunction {
    /// Wrap a closure as a custom measure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&str) -> usize + Send + Sync + 'static,
    {
        Self::Custom(CustomLength(Arc::new(f)))
    }

    /// Measure a piece of text
    #[must_use]
    pub fn measure(&self, text: &str) -> usize {
        match self {
            Self::Characters => text.chars().count(),
            Self::ApproxTokens => approx_tokens(text),
            Self::Custom(f) => (f.0)(text),
        }
    }

    /// Get measure name as string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::ApproxTokens => "approx_tokens",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for LengthFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl PartialEq for LengthFunction {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Characters, Self::Characters) | (Self::ApproxTokens, Self::ApproxTokens) => {
                true
            }
            (Self::Custom(a), Self::Custom(b)) => Arc::ptr_eq(&a.0, &b.0),
            _ => false,
        }
    }
}

/// Shared handle to a caller-supplied measure
#[derive(Clone)]
pub struct CustomLength(Arc<dyn Fn(&str) -> usize + Send + Sync>);

/// Approximate token count: one token per started group of four characters
#[must_use]
pub fn approx_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(CHARS_PER_TOKEN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn characters_count_scalar_values() {
        assert_eq!(LengthFunction::Characters.measure(""), 0);
        assert_eq!(LengthFunction::Characters.measure("abc"), 3);
        assert_eq!(LengthFunction::Characters.measure("héllo"), 5);
    }

    #[test]
    fn approx_tokens_round_up() {
        assert_eq!(LengthFunction::ApproxTokens.measure(""), 0);
        assert_eq!(LengthFunction::ApproxTokens.measure("abc"), 1);
        assert_eq!(LengthFunction::ApproxTokens.measure("abcd"), 1);
        assert_eq!(LengthFunction::ApproxTokens.measure("abcde"), 2);
        assert_eq!(LengthFunction::ApproxTokens.measure("Hello world"), 3);
    }

    #[test]
    fn custom_measure_is_called() {
        let words = LengthFunction::custom(|s| s.split_whitespace().count());
        assert_eq!(words.measure("one two  three"), 3);
        assert_eq!(words.as_str(), "custom");
        assert_eq!(words, words.clone());
        assert_ne!(words, LengthFunction::custom(|s| s.len()));
    }

    #[test]
    fn named_measures_deserialize_from_snake_case() {
        let parsed: LengthFunction = serde_json::from_str("\"approx_tokens\"").unwrap();
        assert_eq!(parsed, LengthFunction::ApproxTokens);
        assert!(serde_json::from_str::<LengthFunction>("\"custom\"").is_err());
    }
}
