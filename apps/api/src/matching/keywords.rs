//! Keyword extraction — partitions one annotated text into important and
//! less-important keyword sets.

use std::collections::BTreeSet;

use crate::annotate::types::AnnotatedText;

/// The two keyword tiers derived from one text. Disjoint by construction;
/// every member is lower-cased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSets {
    pub important: BTreeSet<String>,
    pub less_important: BTreeSet<String>,
}

/// Entities and bare noun tokens are important; noun chunks with a
/// non-stopword root are less important unless something in them has
/// already been promoted.
pub fn extract_keywords(annotated: &AnnotatedText) -> KeywordSets {
    let mut important = BTreeSet::new();
    let mut less_important = BTreeSet::new();

    for entity in &annotated.entities {
        important.insert(entity.text.to_lowercase());
    }

    for chunk in &annotated.noun_chunks {
        if !chunk.root_is_stop {
            less_important.insert(chunk.text.to_lowercase());
        }
    }

    for token in &annotated.tokens {
        if token.pos.is_noun() && !token.is_stop && token.is_alpha {
            important.insert(token.text.to_lowercase());
        }
    }

    // Anything promoted to important never stays less important.
    let less_important = &less_important - &important;

    KeywordSets {
        important,
        less_important,
    }
}
