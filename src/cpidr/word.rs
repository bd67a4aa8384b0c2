use std::fmt;
use std::ops::Index;

use serde::Serialize;

use super::tags::TagClass;
use crate::annotation::AnnotatedToken;

/// Number of the published CPIDR rule that decided a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RuleNumber(u16);

impl RuleNumber {
    pub const SENTENCE_END_MARKER: Self = Self(1);
    pub const CONSECUTIVE_CARDINALS: Self = Self(3);
    pub const SEPARATED_CARDINALS: Self = Self(4);
    pub const REPETITION: Self = Self(20);
    pub const REPETITION_ACROSS_PUNCTUATION: Self = Self(21);
    pub const REPETITION_WITH_GAP: Self = Self(22);
    pub const PHRASE_REPETITION: Self = Self(23);
    pub const NEGATION: Self = Self(50);
    pub const DEMONSTRATIVE_PRONOUN: Self = Self(54);
    pub const AUX_INVERSION: Self = Self(101);
    pub const DEFAULT_PROPOSITION: Self = Self(200);
    pub const ARTICLE: Self = Self(201);
    pub const CORRELATIVE_PAIR: Self = Self(203);
    pub const AND_THEN: Self = Self(204);
    pub const FINAL_TO: Self = Self(206);
    pub const FINAL_MODAL: Self = Self(207);
    pub const CARDINAL: Self = Self(210);
    pub const NEGATION_UNLESS: Self = Self(211);
    pub const NEGATIVE_POLARITY: Self = Self(212);
    pub const GOING_TO: Self = Self(213);
    pub const IF_THEN: Self = Self(214);
    pub const EACH_OTHER: Self = Self(225);
    pub const HOW_COME: Self = Self(230);
    pub const LINKING_VERB: Self = Self(301);
    pub const BE_PREPOSITION: Self = Self(302);
    pub const LINKING_ADVERB_DETERMINER: Self = Self(310);
    pub const CAUSATIVE_ADJECTIVE: Self = Self(311);
    pub const AUX_NOT: Self = Self(401);
    pub const AUX_VERB: Self = Self(402);
    pub const AUX_MODIFIER_VERB: Self = Self(405);
    pub const TO_VERB: Self = Self(510);
    pub const FOR_TO_VERB: Self = Self(511);
    pub const FILLER_SENTENCE: Self = Self(610);
    pub const FILLER_LIKE: Self = Self(632);
    pub const YOU_KNOW: Self = Self(634);

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for RuleNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// CPIDR's verdict on one input token.
///
/// Records are created once per token and only the rule engine mutates them.
/// Invariants: a proposition is always a word, and `rule` is set exactly when
/// a rule made the token a proposition or suppressed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordRecord {
    token: String,
    #[serde(skip)]
    lower: String,
    tag: String,
    #[serde(skip)]
    class: TagClass,
    sentence: usize,
    is_word: bool,
    is_proposition: bool,
    rule: Option<RuleNumber>,
    combined_with_previous: bool,
    is_filler: bool,
}

impl WordRecord {
    pub(crate) fn prepare(token: &AnnotatedToken, sentence: usize) -> Self {
        let tag = if token.text == "^" { "." } else { token.tag.as_str() };
        let is_word = token.text.chars().next().is_some_and(char::is_alphanumeric) && tag != "SYM";
        Self {
            token: token.text.clone(),
            lower: token.lower.clone(),
            tag: tag.to_string(),
            class: TagClass::of(tag),
            sentence,
            is_word,
            is_proposition: false,
            rule: None,
            combined_with_previous: false,
            is_filler: false,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// The working tag after rule rewrites (`NOT` for negations, empty for fillers).
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn sentence(&self) -> usize {
        self.sentence
    }

    pub fn is_word(&self) -> bool {
        self.is_word
    }

    pub fn is_proposition(&self) -> bool {
        self.is_proposition
    }

    pub fn rule(&self) -> Option<RuleNumber> {
        self.rule
    }

    pub fn combined_with_previous(&self) -> bool {
        self.combined_with_previous
    }

    /// Marked as a speech filler; no later rule touches it.
    pub fn is_filler(&self) -> bool {
        self.is_filler
    }

    pub(crate) fn class(&self) -> TagClass {
        self.class
    }

    pub(crate) fn retag(&mut self, tag: &str) {
        if self.is_filler {
            return;
        }
        self.tag = tag.to_string();
        self.class = TagClass::of(tag);
    }

    pub(crate) fn propose(&mut self, rule: RuleNumber) {
        if self.is_filler {
            return;
        }
        self.is_proposition = true;
        self.is_word = true;
        self.rule = Some(rule);
    }

    pub(crate) fn suppress(&mut self, rule: RuleNumber) {
        if self.is_filler {
            return;
        }
        self.is_proposition = false;
        self.rule = Some(rule);
    }

    pub(crate) fn combine(&mut self) {
        if !self.is_filler {
            self.combined_with_previous = true;
        }
    }

    /// Folded into the preceding number. Unlike other combined tokens it
    /// stops counting as a word: the merged number is one word.
    pub(crate) fn absorb(&mut self, rule: RuleNumber) {
        self.is_word = false;
        self.is_proposition = false;
        self.combined_with_previous = true;
        self.rule = Some(rule);
    }

    /// Lock the token as a speech filler. It keeps its word status and never
    /// counts as a proposition.
    pub(crate) fn lock_filler(&mut self, rule: RuleNumber) {
        if self.is_filler {
            return;
        }
        self.is_filler = true;
        self.is_proposition = false;
        self.tag.clear();
        self.class = TagClass::empty();
        self.rule = Some(rule);
    }

    /// Record a rule on a token that stays a non-word (punctuation inside a repetition).
    pub(crate) fn note(&mut self, rule: RuleNumber) {
        if !self.is_filler && !self.is_word {
            self.is_proposition = false;
            self.rule = Some(rule);
        }
    }
}

/// Scored tokens in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WordList {
    records: Vec<WordRecord>,
}

impl WordList {
    pub(crate) fn new(records: Vec<WordRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WordRecord> {
        self.records.iter()
    }

    pub fn as_slice(&self) -> &[WordRecord] {
        &self.records
    }

    pub fn word_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_word).count()
    }

    pub fn proposition_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_proposition).count()
    }
}

impl Index<usize> for WordList {
    type Output = WordRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.records[index]
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a WordRecord;
    type IntoIter = std::slice::Iter<'a, WordRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
