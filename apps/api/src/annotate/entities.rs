//! Entity recognition over tagged tokens.
//!
//! An entity is a maximal run of consecutive proper-noun tokens within one
//! sentence: "John Smith", "Google Cloud", "Python". Lexicon-free by
//! construction; whatever the tagger marks proper-noun is eligible.

use crate::annotate::types::{AnnotatedToken, EntitySpan, PosTag};

pub fn recognize_entities(tokens: &[AnnotatedToken]) -> Vec<EntitySpan> {
    let mut entities = Vec::new();
    let mut run: Vec<&str> = Vec::new();
    let mut run_sentence = 0usize;

    for token in tokens {
        let continues = token.pos == PosTag::ProperNoun
            && (run.is_empty() || token.sentence_idx == run_sentence);
        if continues {
            if run.is_empty() {
                run_sentence = token.sentence_idx;
            }
            run.push(&token.text);
        } else {
            if !run.is_empty() {
                entities.push(EntitySpan {
                    text: run.join(" "),
                });
                run.clear();
            }
            if token.pos == PosTag::ProperNoun {
                run_sentence = token.sentence_idx;
                run.push(&token.text);
            }
        }
    }
    if !run.is_empty() {
        entities.push(EntitySpan {
            text: run.join(" "),
        });
    }

    entities
}
