use crate::length::LengthFunction;
use std::collections::VecDeque;

/// Sliding-window assembly of atomic fragments into bounded chunks.
///
/// Fragments are never cut. When the next fragment would push the window past
/// `chunk_size`, the window is emitted as a chunk and then shrunk from the
/// front until what remains is at most `chunk_overlap` and leaves room for the
/// incoming fragment. That retained tail becomes the start of the next chunk,
/// so overlap is bounded by `chunk_overlap` but only as exact as the fragment
/// granularity allows.
#[derive(Debug, Clone)]
pub(crate) struct MergeEngine {
    chunk_size: usize,
    chunk_overlap: usize,
    length_function: LengthFunction,
}

impl MergeEngine {
    pub fn new(chunk_size: usize, chunk_overlap: usize, length_function: LengthFunction) -> Self {
        Self {
            chunk_size,
            chunk_overlap,
            length_function,
        }
    }

    pub fn measure(&self, text: &str) -> usize {
        self.length_function.measure(text)
    }

    /// Whether a fragment can be merged without exceeding `chunk_size` on its own
    pub fn fits(&self, fragment: &str) -> bool {
        self.measure(fragment) <= self.chunk_size
    }

    /// Merge `fragments` into chunks, joining neighbours with `joiner`.
    ///
    /// Output chunks are trimmed and never empty.
    pub fn merge(&self, fragments: &[&str], joiner: &str) -> Vec<String> {
        let joiner_len = self.measure(joiner);
        let mut chunks = Vec::new();
        let mut window: VecDeque<&str> = VecDeque::new();
        let mut total = 0usize;

        for &fragment in fragments {
            let len = self.measure(fragment);
            let gap = if window.is_empty() { 0 } else { joiner_len };

            let next_total = total.saturating_add(gap).saturating_add(len);
            if next_total > self.chunk_size && !window.is_empty() {
                self.flush(&window, joiner, total, &mut chunks);

                while let Some(&first) = window.front() {
                    let must_make_room =
                        total.saturating_add(joiner_len).saturating_add(len) > self.chunk_size;
                    if total <= self.chunk_overlap && !must_make_room {
                        break;
                    }
                    window.pop_front();
                    let freed_gap = if window.is_empty() { 0 } else { joiner_len };
                    total = total.saturating_sub(self.measure(first).saturating_add(freed_gap));
                }
                if window.is_empty() {
                    total = 0;
                }
            }

            let gap = if window.is_empty() { 0 } else { joiner_len };
            window.push_back(fragment);
            total = total.saturating_add(gap).saturating_add(len);
        }

        self.flush(&window, joiner, total, &mut chunks);
        chunks
    }

    fn flush(&self, window: &VecDeque<&str>, joiner: &str, total: usize, out: &mut Vec<String>) {
        if window.is_empty() {
            return;
        }
        if total > self.chunk_size {
            log::warn!(
                "Created a chunk of size {total}, which is longer than the specified {}",
                self.chunk_size
            );
        }

        let joined = window.iter().copied().collect::<Vec<_>>().join(joiner);
        let trimmed = joined.trim();
        if !trimmed.is_empty() {
            out.push(trimmed.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn chars(size: usize, overlap: usize) -> MergeEngine {
        MergeEngine::new(size, overlap, LengthFunction::Characters)
    }

    #[test]
    fn single_characters_overlap_by_one() {
        let fragments: Vec<&str> = vec!["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];
        let chunks = chars(4, 1).merge(&fragments, "");
        assert_eq!(chunks, vec!["ABCD", "DEFG", "GHIJ"]);
    }

    #[test]
    fn words_with_overlap_retain_trailing_words() {
        let text = "Hello world this is a test message";
        let fragments: Vec<&str> = text.split(' ').collect();
        let chunks = chars(15, 5).merge(&fragments, " ");
        assert_eq!(
            chunks,
            vec!["Hello world", "world this is a", "is a test", "test message"]
        );
    }

    #[test]
    fn huge_custom_measure_saturates() {
        let measure = LengthFunction::custom(|s| if s == "big" { usize::MAX } else { s.len() });
        let engine = MergeEngine::new(5, 0, measure);
        let chunks = engine.merge(&["a", "big", "c"], " ");
        assert_eq!(chunks, vec!["a", "big", "c"]);
    }

    #[test]
    fn zero_overlap_produces_disjoint_chunks() {
        let fragments = vec!["aa", "bb", "cc", "dd"];
        let chunks = chars(5, 0).merge(&fragments, " ");
        assert_eq!(chunks, vec!["aa bb", "cc dd"]);
    }

    #[test]
    fn separator_overhead_counts_toward_size() {
        // "aa--bb" is 6 characters, one over the limit
        let chunks = chars(5, 0).merge(&["aa", "bb"], "--");
        assert_eq!(chunks, vec!["aa", "bb"]);
    }

    #[test]
    fn everything_fits_in_one_chunk() {
        let chunks = chars(100, 10).merge(&["one", "two", "three"], " ");
        assert_eq!(chunks, vec!["one two three"]);
    }

    #[test]
    fn whitespace_only_chunks_are_dropped_and_others_trimmed() {
        let chunks = chars(3, 0).merge(&["   ", " a ", "   "], "");
        assert_eq!(chunks, vec!["a"]);
    }

    #[test]
    fn empty_input_yields_no_chunks() {
        assert!(chars(10, 2).merge(&[], " ").is_empty());
    }

    #[test]
    fn retained_tail_never_pushes_next_chunk_over_size() {
        // Tail "bbbbb" is within the overlap but cannot share a chunk with "cccccccc".
        let chunks = chars(10, 5).merge(&["aaaaa", "bbbbb", "cccccccc"], "");
        assert_eq!(chunks, vec!["aaaaabbbbb", "cccccccc"]);
        assert!(chunks.iter().all(|c| c.chars().count() <= 10));
    }

    #[test]
    fn oversized_fragment_is_emitted_alone() {
        let chunks = chars(4, 1).merge(&["ab", "abcdefgh", "cd"], "");
        assert_eq!(chunks, vec!["ab", "abcdefgh", "cd"]);
    }

    #[test]
    fn overlap_is_approximate_at_fragment_granularity() {
        // Overlap budget is 4 characters. Keeping two fragments would repeat 7,
        // so only the last 3-character fragment carries over.
        let chunks = chars(10, 4).merge(&["aaa", "bbb", "ccc", "ddd"], " ");
        assert_eq!(chunks, vec!["aaa bbb", "bbb ccc", "ccc ddd"]);
    }

    #[test]
    fn token_measure_bounds_chunks_in_tokens() {
        let engine = MergeEngine::new(2, 0, LengthFunction::ApproxTokens);
        let chunks = engine.merge(&["abcd", "efgh", "ijkl"], "");
        assert_eq!(chunks, vec!["abcdefgh", "ijkl"]);
    }
}
