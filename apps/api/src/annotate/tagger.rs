//! Rule-based part-of-speech tagging.
//!
//! Closed-class words are resolved through small lexicons; open-class words
//! fall back to suffix rules, with capitalization deciding proper nouns.
//! The open-class default is common noun.

use rustc_hash::FxHashSet;

use crate::annotate::types::PosTag;

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "some", "any", "each", "every", "no",
    "all", "both", "few", "many", "much", "several", "most", "other", "another", "such",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "ours", "theirs", "who", "whom", "whose",
    "which", "what", "someone", "anyone", "everyone", "nobody",
];

const ADPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "by", "for", "with", "about", "against", "between", "into",
    "through", "during", "before", "after", "above", "below", "to", "from", "up", "down",
    "over", "under", "across", "behind", "beyond", "within", "without", "near", "since",
    "until", "per", "via",
];

const CONJUNCTIONS: &[&str] = &[
    "and", "or", "but", "nor", "so", "yet", "if", "because", "although", "though", "while",
    "when", "where", "unless", "whereas", "than", "as",
];

// Auxiliaries plus high-frequency verbs that the suffix rules would
// otherwise misfile as nouns.
const COMMON_VERBS: &[&str] = &[
    "be", "am", "is", "are", "was", "were", "been", "being", "have", "has", "had", "having",
    "do", "does", "did", "done", "will", "would", "shall", "should", "can", "could", "may",
    "might", "must", "need", "needs", "want", "wants", "seek", "seeks", "require", "requires",
    "get", "gets", "got", "make", "makes", "made", "take", "takes", "took", "go", "goes",
    "went", "use", "uses", "work", "works", "know", "knows", "bring", "brings", "join",
    "joins", "help", "helps", "look", "looks",
];

const VERB_SUFFIXES: &[&str] = &["ize", "ise", "ify", "ing", "ed"];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "ical", "ish", "less", "ary", "ent",
];

/// Tags one token at a time; sentence position disambiguates capitalization.
#[derive(Debug, Clone)]
pub struct PosTagger {
    determiners: FxHashSet<&'static str>,
    pronouns: FxHashSet<&'static str>,
    adpositions: FxHashSet<&'static str>,
    conjunctions: FxHashSet<&'static str>,
    common_verbs: FxHashSet<&'static str>,
}

impl Default for PosTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl PosTagger {
    pub fn new() -> Self {
        Self {
            determiners: DETERMINERS.iter().copied().collect(),
            pronouns: PRONOUNS.iter().copied().collect(),
            adpositions: ADPOSITIONS.iter().copied().collect(),
            conjunctions: CONJUNCTIONS.iter().copied().collect(),
            common_verbs: COMMON_VERBS.iter().copied().collect(),
        }
    }

    /// Tag a single token. `sentence_initial` marks the first token of a
    /// sentence, where capitalization carries no proper-noun signal.
    pub fn tag(&self, word: &str, sentence_initial: bool) -> PosTag {
        if word
            .chars()
            .all(|c| c.is_numeric() || matches!(c, '.' | ',' | '-'))
        {
            return PosTag::Numeral;
        }

        let lower = word.to_lowercase();
        if self.determiners.contains(lower.as_str()) {
            return PosTag::Determiner;
        }
        if self.pronouns.contains(lower.as_str()) {
            return PosTag::Pronoun;
        }
        if self.adpositions.contains(lower.as_str()) {
            return PosTag::Adposition;
        }
        if self.conjunctions.contains(lower.as_str()) {
            return PosTag::Conjunction;
        }
        if self.common_verbs.contains(lower.as_str()) {
            return PosTag::Verb;
        }

        let mut chars = word.chars();
        let first_upper = chars.next().is_some_and(|c| c.is_uppercase());
        let rest_has_upper = chars.any(|c| c.is_uppercase());

        // Acronyms ("AWS") and mid-sentence capitalized words are proper
        // nouns; a capitalized sentence opener falls through to the suffix
        // rules on its lowercase form.
        if first_upper && (rest_has_upper || !sentence_initial) {
            return PosTag::ProperNoun;
        }

        if lower.len() > 4 && lower.ends_with("ly") {
            return PosTag::Adverb;
        }
        if VERB_SUFFIXES.iter().any(|s| suffix_matches(&lower, s)) {
            return PosTag::Verb;
        }
        if ADJECTIVE_SUFFIXES.iter().any(|s| suffix_matches(&lower, s)) {
            return PosTag::Adjective;
        }

        PosTag::Noun
    }
}

// A suffix only counts when it leaves a stem behind ("ed" must not claim
// the word "ed" itself, nor "red").
fn suffix_matches(word: &str, suffix: &str) -> bool {
    word.len() >= suffix.len() + 2 && word.ends_with(suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger() -> PosTagger {
        PosTagger::new()
    }

    #[test]
    fn test_closed_class_words() {
        let t = tagger();
        assert_eq!(t.tag("the", false), PosTag::Determiner);
        assert_eq!(t.tag("we", true), PosTag::Pronoun);
        assert_eq!(t.tag("with", false), PosTag::Adposition);
        assert_eq!(t.tag("and", false), PosTag::Conjunction);
        assert_eq!(t.tag("is", false), PosTag::Verb);
        assert_eq!(t.tag("need", false), PosTag::Verb);
    }

    #[test]
    fn test_capitalized_mid_sentence_is_proper_noun() {
        let t = tagger();
        assert_eq!(t.tag("Python", false), PosTag::ProperNoun);
        assert_eq!(t.tag("Smith", false), PosTag::ProperNoun);
    }

    #[test]
    fn test_sentence_initial_capitalization_is_not_proper_noun_signal() {
        let t = tagger();
        // "Developers" opening a sentence: plain noun by suffix fallback.
        assert_eq!(t.tag("Developers", true), PosTag::Noun);
    }

    #[test]
    fn test_acronym_is_proper_noun_even_sentence_initial() {
        let t = tagger();
        assert_eq!(t.tag("AWS", true), PosTag::ProperNoun);
        assert_eq!(t.tag("SQL", false), PosTag::ProperNoun);
    }

    #[test]
    fn test_suffix_rules() {
        let t = tagger();
        assert_eq!(t.tag("quickly", false), PosTag::Adverb);
        assert_eq!(t.tag("deployed", false), PosTag::Verb);
        assert_eq!(t.tag("scaling", false), PosTag::Verb);
        assert_eq!(t.tag("reliable", false), PosTag::Adjective);
        assert_eq!(t.tag("technical", false), PosTag::Adjective);
    }

    #[test]
    fn test_open_class_default_is_noun() {
        let t = tagger();
        assert_eq!(t.tag("developer", false), PosTag::Noun);
        assert_eq!(t.tag("kubernetes", false), PosTag::Noun);
        assert_eq!(t.tag("pipeline", false), PosTag::Noun);
    }

    #[test]
    fn test_numerals() {
        let t = tagger();
        assert_eq!(t.tag("2024", false), PosTag::Numeral);
        assert_eq!(t.tag("3.5", false), PosTag::Numeral);
    }

    #[test]
    fn test_short_words_dodge_suffix_rules() {
        let t = tagger();
        // "red" ends with "ed" but has no stem left over.
        assert_eq!(t.tag("red", false), PosTag::Noun);
        assert_eq!(t.tag("fly", false), PosTag::Noun);
    }
}
