use crate::error::{ChunkerError, Result};
use regex::Regex;
use unicode_segmentation::UnicodeSegmentation;

/// A compiled delimiter
///
/// The empty separator splits text into grapheme clusters, so it always
/// "occurs" and always yields fragments that cannot be split any further.
/// Regex separators have no canonical literal form, so the matched delimiter
/// always stays attached to the fragment that follows it.
#[derive(Debug, Clone)]
pub(crate) enum Separator {
    Empty,
    Literal(String),
    Pattern(Regex),
}

impl Separator {
    pub fn compile(raw: &str, is_regex: bool) -> Result<Self> {
        if raw.is_empty() {
            return Ok(Self::Empty);
        }
        if !is_regex {
            return Ok(Self::Literal(raw.to_string()));
        }
        Regex::new(raw)
            .map(Self::Pattern)
            .map_err(|e| ChunkerError::invalid_config(format!("separator {raw:?}: {e}")))
    }

    pub fn occurs_in(&self, text: &str) -> bool {
        match self {
            Self::Empty => true,
            Self::Literal(sep) => text.contains(sep.as_str()),
            Self::Pattern(re) => re.is_match(text),
        }
    }

    /// String placed between fragments when they are merged back together
    pub fn joiner(&self, keep_separator: bool) -> &str {
        match self {
            Self::Literal(sep) if !keep_separator => sep.as_str(),
            _ => "",
        }
    }

    /// Split `text` into non-empty fragments.
    ///
    /// With `keep_separator` each delimiter is prefixed to the fragment after it.
    pub fn split<'a>(&self, text: &'a str, keep_separator: bool) -> Vec<&'a str> {
        let fragments: Vec<&'a str> = match self {
            Self::Empty => text.graphemes(true).collect(),
            Self::Literal(sep) if keep_separator => {
                slice_at(text, text.match_indices(sep.as_str()).map(|(i, _)| i))
            }
            Self::Literal(sep) => text.split(sep.as_str()).collect(),
            Self::Pattern(re) => slice_at(text, re.find_iter(text).map(|m| m.start())),
        };

        fragments.into_iter().filter(|f| !f.is_empty()).collect()
    }
}

/// Cut `text` at every boundary, keeping the delimiters in the output.
fn slice_at(text: &str, boundaries: impl Iterator<Item = usize>) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for boundary in boundaries {
        out.push(&text[start..boundary]);
        start = boundary;
    }
    out.push(&text[start..]);
    out
}
