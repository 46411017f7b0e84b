//! Utility functions for table rendering.
//!
//! Contains text measurement, justification, and headline wrapping helpers.

use tracing::trace;

/// Length of `text` in characters.
///
/// Wide and combining characters count as one; no display-width tables are
/// consulted.
#[inline]
pub fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Right-justifies text within a given width.
///
/// Text that already reaches `width` is returned unchanged, never truncated.
pub fn right_justify(text: &str, width: usize) -> String {
    let len = text_len(text);
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", " ".repeat(width - len), text)
}

/// Pads text on the right with spaces up to `width`.
pub fn right_pad(text: &str, width: usize) -> String {
    let len = text_len(text);
    if len >= width {
        return text.to_string();
    }
    format!("{}{}", text, " ".repeat(width - len))
}

/// Splits a headline into words on single spaces.
///
/// Runs of spaces produce empty words; trailing empty words are dropped. A
/// headline without any space is a single word, even when empty.
pub fn split_words(headline: &str) -> Vec<&str> {
    if !headline.contains(' ') {
        return vec![headline];
    }

    let mut words: Vec<&str> = headline.split(' ').collect();
    while words.last().is_some_and(|w| w.is_empty()) {
        words.pop();
    }
    words
}

/// Wraps a headline into physical lines no wider than `width`.
///
/// Before appending word `i`, the line is flushed when the line built so far,
/// a space, and word `i + 1` would reach `width`. The check looks one word
/// ahead, so a line can break earlier than a plain greedy wrap would, and the
/// final word can overflow. A flush may emit an empty line when the very
/// first lookahead already fails.
pub fn wrap_headline(headline: &str, width: usize) -> Vec<String> {
    let words = split_words(headline);
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0;

    for (i, word) in words.iter().enumerate() {
        let flush = words
            .get(i + 1)
            .is_some_and(|next| current_len + 1 + text_len(next) >= width);
        if flush {
            lines.push(current.join(" "));
            current.clear();
            current_len = 0;
        }

        if !current.is_empty() {
            current_len += 1;
        }
        current_len += text_len(word);
        current.push(word);
    }

    if !current.is_empty() {
        lines.push(current.join(" "));
    }

    trace!(width, words = words.len(), lines = lines.len(), "wrapped headline");
    lines
}
