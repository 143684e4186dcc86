//! Math-context locator
//!
//! Decides whether a cursor offset lies inside inline (`$...$`) or display
//! (`$$...$$`) math by counting delimiters in the text before the offset.
//!
//! This is a backward-scan heuristic, not a tokenizer: it knows nothing of
//! code fences or escaped dollar signs, and an unbalanced literal `$` earlier
//! in the document misclassifies everything after it. That is the documented
//! policy; do not "fix" it here.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Balanced display-math span, shortest match, newlines included.
    static ref DISPLAY_SPAN: Regex = Regex::new(r"(?s)\$\$.*?\$\$").unwrap();
}

/// True when `offset` lies inside inline or display math.
///
/// The decision is a pure function of the prefix text:
///
/// 1. An odd count of non-overlapping `$$` in the prefix means an open
///    display block, regardless of single-`$` parity.
/// 2. Otherwise balanced `$$...$$` spans are stripped from the prefix and
///    the remaining single `$` count decides: odd means inside inline math.
///
/// `offset` is a byte offset; out-of-range or mid-codepoint offsets are
/// clamped down to the nearest char boundary rather than panicking.
pub fn is_in_math(text: &str, offset: usize) -> bool {
    let prefix = prefix_at(text, offset);

    if prefix.matches("$$").count() % 2 == 1 {
        return true;
    }

    let stripped = DISPLAY_SPAN.replace_all(prefix, "");
    stripped.matches('$').count() % 2 == 1
}

/// Prefix of `text` ending at `offset`, clamped to a valid char boundary.
pub(crate) fn prefix_at(text: &str, offset: usize) -> &str {
    let mut end = offset.min(text.len());
    while end > 0 && !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_math() {
        let text = "plain text";
        assert!(!is_in_math(text, text.len()));
    }

    #[test]
    fn test_inline_open() {
        let text = "a $x+1 b";
        assert!(is_in_math(text, text.len()));
    }

    #[test]
    fn test_inline_closed() {
        let text = "a $x+1$ b";
        assert!(!is_in_math(text, text.len()));
    }

    #[test]
    fn test_display_open_short_circuits() {
        // Odd $$ count wins even though the raw single-$ count is even.
        assert!(is_in_math("$$x", 2));
    }

    #[test]
    fn test_display_closed() {
        let text = "$$x+1$$ after";
        assert!(!is_in_math(text, text.len()));
    }

    #[test]
    fn test_inline_after_display_block() {
        // Closed display span is stripped before inline parity counting.
        let text = "$$a$$ $x";
        assert!(is_in_math(text, text.len()));
    }

    #[test]
    fn test_display_spans_multiline() {
        let text = "$$\na + b\n$$\nafter";
        assert!(is_in_math(text, 5));
        assert!(!is_in_math(text, text.len()));
    }

    #[test]
    fn test_classification_uses_prefix_only() {
        // An unterminated trailing delimiter still classifies as "inside".
        assert!(is_in_math("$", 1));
        assert!(!is_in_math("$x$ and $later$", 3));
    }

    #[test]
    fn test_offset_clamping() {
        let text = "a $α";
        // Past-the-end and mid-codepoint offsets must not panic; both clamp
        // down into the open inline span.
        assert!(is_in_math(text, 100));
        assert!(is_in_math(text, 4));
    }

    #[test]
    fn test_triple_dollar_counts_one_pair() {
        // Non-overlapping "$$" count of "$$$" is 1 (odd): open display block.
        assert!(is_in_math("$$$", 3));
    }
}
