use std::collections::HashSet;

use once_cell::sync::Lazy;

bitflags::bitflags! {
    /// Tag classes a Penn Treebank tag belongs to. Computed once per token
    /// and recomputed whenever a rule rewrites the working tag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub(crate) struct TagClass: u16 {
        const PUNCTUATION = 1 << 0;
        const SENTENCE_END = 1 << 1;
        const ADJECTIVE = 1 << 2;
        const ADVERB = 1 << 3;
        const VERB = 1 << 4;
        const NOUN = 1 << 5;
        const INTERROGATIVE = 1 << 6;
        const DEFAULT_PROPOSITION = 1 << 7;
        const NEGATION = 1 << 8;
    }
}

impl TagClass {
    pub(crate) fn of(tag: &str) -> Self {
        match tag {
            "." => Self::PUNCTUATION | Self::SENTENCE_END,
            ":" | "," => Self::PUNCTUATION,
            "JJ" | "JJR" | "JJS" => Self::ADJECTIVE | Self::DEFAULT_PROPOSITION,
            "RB" | "RBR" | "RBS" => Self::ADVERB | Self::DEFAULT_PROPOSITION,
            "WRB" => Self::ADVERB | Self::INTERROGATIVE | Self::DEFAULT_PROPOSITION,
            "VB" | "VBD" | "VBG" | "VBN" | "VBP" | "VBZ" => Self::VERB | Self::DEFAULT_PROPOSITION,
            "NN" | "NNS" | "NNP" | "NNPS" => Self::NOUN,
            "WDT" | "WP" | "WPS" => Self::INTERROGATIVE | Self::DEFAULT_PROPOSITION,
            "CC" | "CD" | "DT" | "IN" | "PDT" | "POS" | "PRP$" | "PP$" | "TO" => Self::DEFAULT_PROPOSITION,
            "NOT" => Self::NEGATION,
            _ => Self::empty(),
        }
    }
}

/// Tag given to negations by rule 050.
pub(crate) const NEGATION_TAG: &str = "NOT";

/// Words that serve as discourse fillers in speech.
pub(crate) static FILLER_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["and", "or", "but", "if", "that", "just", "you", "know"].into_iter().collect());

pub(crate) static BE: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["am", "is", "are", "was", "were", "being", "been"].into_iter().collect());

/// Negative contractions the tagger may miss, including ones typed without an apostrophe.
pub(crate) static NEGATIVE_CONTRACTIONS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["didn't", "didnt", "don't", "dont", "can't", "cant", "couldn't", "couldnt", "won't", "wont", "wouldn't", "wouldnt"]
        .into_iter()
        .collect()
});

// Modals are left out: the tagger gives them MD, never a verb tag.
pub(crate) static AUXILIARIES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "be", "am", "is", "are", "was", "were", "being", "been", "have", "has", "had", "having", "do", "does", "did",
        "need", "dare",
    ]
    .into_iter()
    .collect()
});

/// Every form of the verbs that can take an adjective after them.
pub(crate) static LINKING_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "be", "am", "is", "are", "was", "were", "been", "being", "become", "becomes", "became", "becoming", "get",
        "gets", "got", "gotten", "getting", "look", "looks", "looked", "looking", "seem", "seems", "seemed", "seeming",
        "appear", "appears", "appeared", "appearing", "sound", "sounds", "sounded", "sounding", "feel", "feels", "felt",
        "feeling", "smell", "smells", "smelled", "smelling", "taste", "tastes", "tasted", "tasting",
    ]
    .into_iter()
    .collect()
});

/// Verbs taking a noun phrase plus adjective ("make it better", "turn it green").
pub(crate) static CAUSATIVE_LINKING_VERBS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    ["make", "makes", "made", "making", "turn", "turns", "turned", "turning", "paint", "paints", "painted", "painting"]
        .into_iter()
        .collect()
});

pub(crate) static CORRELATING_CONJUNCTIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["both", "either", "neither"].into_iter().collect());

/// Negative polarity items that fold into an earlier negation ("not ... yet").
pub(crate) static NEGATIVE_POLARITY_ITEMS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["yet", "much", "many", "any", "anymore"].into_iter().collect());

/// Negative polarity items that take the proposition from an earlier negation ("not ... unless").
pub(crate) static NEGATION_ABSORBING_ITEMS: Lazy<HashSet<&'static str>> = Lazy::new(|| ["unless"].into_iter().collect());

pub(crate) static ARTICLES: Lazy<HashSet<&'static str>> = Lazy::new(|| ["a", "an", "the"].into_iter().collect());

pub(crate) fn is_negation(lower: &str) -> bool {
    lower == "not" || regex!(r"^\w*n['’]t$").is_match(lower) || NEGATIVE_CONTRACTIONS.contains(lower)
}
