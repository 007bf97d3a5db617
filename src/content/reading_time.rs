//! Reading-time estimation

use serde::{Deserialize, Serialize};

/// Estimated reading time of a post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingTime {
    /// Human readable estimate, e.g. "3 min read"
    pub text: String,
    /// Exact estimate in minutes
    pub minutes: f64,
    /// Estimate in milliseconds
    pub time: u64,
    /// Word count the estimate is based on
    pub words: usize,
}

impl ReadingTime {
    /// Estimate reading time of plain text at `words_per_minute`
    pub fn estimate(text: &str, words_per_minute: u32) -> Self {
        let words = count_words(text);
        let wpm = f64::from(words_per_minute.max(1));
        let minutes = words as f64 / wpm;
        let time = (minutes * 60_000.0).round() as u64;
        // A post with any content reads in at least a minute
        let displayed = (minutes.ceil() as u64).max(1);

        Self {
            text: format!("{} min read", displayed),
            minutes,
            time,
            words,
        }
    }

    /// Wrap a precomputed label, for callers that bring their own estimate
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            minutes: 0.0,
            time: 0,
            words: 0,
        }
    }
}

/// Count words, treating each CJK ideograph as a word of its own
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if is_cjk(c) {
            count += 1;
            in_word = false;
        } else if c.is_whitespace() {
            in_word = false;
        } else if !in_word {
            in_word = true;
            count += 1;
        }
    }

    count
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{3040}'..='\u{30FF}'
        | '\u{AC00}'..='\u{D7AF}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_words() {
        assert_eq!(count_words("hello brave  new\nworld"), 4);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("写代码 rust"), 4);
    }

    #[test]
    fn test_estimate() {
        let text = vec!["word"; 450].join(" ");
        let rt = ReadingTime::estimate(&text, 200);
        assert_eq!(rt.words, 450);
        assert_eq!(rt.text, "3 min read");
        assert_eq!(rt.time, 135_000);
    }

    #[test]
    fn test_short_post_reads_in_a_minute() {
        let rt = ReadingTime::estimate("tiny", 200);
        assert_eq!(rt.text, "1 min read");
    }
}
