// Linguistic annotation layer.
// Implements: tokenization, stopword flags, POS tagging, noun chunks, entities.
// The matcher only sees the `Annotator` trait — swap implementations freely.

pub mod chunker;
pub mod entities;
pub mod stopwords;
pub mod tagger;
pub mod tokenizer;
pub mod types;

use thiserror::Error;

use crate::annotate::stopwords::StopwordFilter;
use crate::annotate::tagger::PosTagger;
use crate::annotate::types::{AnnotatedText, AnnotatedToken, PosTag};

fn starts_upper(word: &str) -> bool {
    word.chars().next().is_some_and(|c| c.is_uppercase())
}

/// Default cap on annotator input, in characters.
pub const DEFAULT_MAX_TEXT_LEN: usize = 1_000_000;

#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("input of {len} characters exceeds the annotator limit of {max}")]
    InputTooLong { len: usize, max: usize },

    #[error("annotation failed: {0}")]
    Failed(String),
}

/// The annotation seam. Loaded once at startup, read-only thereafter, and
/// injected into the scorer so tests can substitute a canned implementation.
pub trait Annotator: Send + Sync {
    fn annotate(&self, text: &str) -> Result<AnnotatedText, AnnotateError>;
}

/// Built-in rule-based annotator: tokenize, flag stopwords, tag POS, then
/// derive noun chunks and entity spans from the tagged stream.
pub struct RuleAnnotator {
    stopwords: StopwordFilter,
    tagger: PosTagger,
    max_text_len: usize,
}

impl RuleAnnotator {
    pub fn new(language: &str, max_text_len: usize) -> Self {
        Self {
            stopwords: StopwordFilter::new(language),
            tagger: PosTagger::new(),
            max_text_len,
        }
    }
}

impl Default for RuleAnnotator {
    fn default() -> Self {
        Self::new("en", DEFAULT_MAX_TEXT_LEN)
    }
}

impl Annotator for RuleAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedText, AnnotateError> {
        let len = text.chars().count();
        if len > self.max_text_len {
            return Err(AnnotateError::InputTooLong {
                len,
                max: self.max_text_len,
            });
        }

        let raw = tokenizer::tokenize(text);
        let mut tokens = Vec::with_capacity(raw.len());
        let mut prev_sentence = None;
        for rt in raw {
            let sentence_initial = prev_sentence != Some(rt.sentence_idx);
            prev_sentence = Some(rt.sentence_idx);

            let pos = self.tagger.tag(&rt.text, sentence_initial);
            let is_stop = self.stopwords.is_stopword(&rt.text);
            let is_alpha = !rt.text.is_empty() && rt.text.chars().all(|c| c.is_alphabetic());
            tokens.push(AnnotatedToken {
                text: rt.text,
                pos,
                is_stop,
                is_alpha,
                sentence_idx: rt.sentence_idx,
            });
        }

        // Contextual repair: a title-case sentence opener directly followed
        // by a proper noun is part of the name ("John Smith ...").
        for i in 0..tokens.len() {
            if tokens[i].pos == PosTag::Noun
                && starts_upper(&tokens[i].text)
                && i + 1 < tokens.len()
                && tokens[i + 1].pos == PosTag::ProperNoun
                && tokens[i + 1].sentence_idx == tokens[i].sentence_idx
            {
                tokens[i].pos = PosTag::ProperNoun;
            }
        }

        let entities = entities::recognize_entities(&tokens);
        let noun_chunks = chunker::extract_chunks(&tokens);

        Ok(AnnotatedText {
            tokens,
            entities,
            noun_chunks,
        })
    }
}
