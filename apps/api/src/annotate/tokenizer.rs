//! Sentence segmentation and word tokenization.
//!
//! Tokens are runs of alphanumeric characters. Apostrophes, hyphens, and
//! dots join a token only when flanked by alphanumerics ("don't", "node.js"),
//! and trailing `+`/`#` stay attached so "c++" and "c#" survive as single
//! tokens. Sentence indices advance on `.`, `!`, `?`.

/// A tokenizer output token, before tagging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub text: String,
    pub sentence_idx: usize,
}

pub fn tokenize(text: &str) -> Vec<RawToken> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut sentence_idx = 0usize;
    let mut i = 0usize;

    while i < chars.len() {
        let c = chars[i];
        if c.is_alphanumeric() {
            let mut word = String::new();
            while i < chars.len() {
                let c = chars[i];
                if c.is_alphanumeric() {
                    word.push(c);
                    i += 1;
                } else if matches!(c, '\'' | '-' | '.')
                    && i + 1 < chars.len()
                    && chars[i + 1].is_alphanumeric()
                {
                    word.push(c);
                    i += 1;
                } else if matches!(c, '+' | '#') {
                    while i < chars.len() && matches!(chars[i], '+' | '#') {
                        word.push(chars[i]);
                        i += 1;
                    }
                    break;
                } else {
                    break;
                }
            }
            tokens.push(RawToken {
                text: word,
                sentence_idx,
            });
        } else {
            if matches!(c, '.' | '!' | '?') {
                sentence_idx += 1;
            }
            i += 1;
        }
    }

    tokens
}
