//! Noun-phrase chunking over tagged tokens.
//!
//! Pattern: `(ADJ)* (NOUN|PROPN)+` within a single sentence. The root of a
//! chunk is its final noun, the head of an English noun phrase.

use crate::annotate::types::{AnnotatedToken, NounChunk, PosTag};

/// Maximum tokens per chunk; longer noun runs are split.
const MAX_CHUNK_LEN: usize = 5;

pub fn extract_chunks(tokens: &[AnnotatedToken]) -> Vec<NounChunk> {
    let mut chunks = Vec::new();

    let mut i = 0;
    while i < tokens.len() {
        let sentence = tokens[i].sentence_idx;
        let start = i;

        // Leading adjectives
        while i < tokens.len()
            && tokens[i].sentence_idx == sentence
            && tokens[i].pos == PosTag::Adjective
            && i - start < MAX_CHUNK_LEN
        {
            i += 1;
        }

        // Head nouns
        let noun_start = i;
        while i < tokens.len()
            && tokens[i].sentence_idx == sentence
            && tokens[i].pos.is_noun()
            && i - start < MAX_CHUNK_LEN
        {
            i += 1;
        }

        if i == noun_start {
            // Adjectives without a noun head are not a chunk; restart one
            // past where this attempt began.
            i = start + 1;
            continue;
        }

        let root = &tokens[i - 1];
        let text = tokens[start..i]
            .iter()
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        chunks.push(NounChunk {
            text,
            root_is_stop: root.is_stop,
        });
    }

    chunks
}
