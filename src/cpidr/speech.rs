//! Filler handling for transcribed speech.
//!
//! Runs over the whole document before the main pass. A token marked here is
//! locked: it stays a word, never a proposition, and later rules leave it
//! alone even when its tag would otherwise trigger them.

use tracing::trace;

use super::rules::Rule;
use super::tags::{BE, FILLER_WORDS, TagClass};
use super::tape::{Tape, is_repetition};
use super::word::RuleNumber;

fn lock_back(tape: &mut Tape, at: usize, k: usize, rule: RuleNumber) {
    if let Some(id) = tape.back(at, k) {
        tape.word_mut(id).lock_filler(rule);
    }
}

/// Word-for-word repetition. Repeated punctuation is not a false start.
fn repeats(tape: &Tape, earlier: Option<usize>, later: usize) -> bool {
    earlier.is_some_and(|id| {
        let (first, second) = (tape.word(id), tape.word(later));
        first.is_word() && second.is_word() && is_repetition(first.lower(), second.lower())
    })
}

fn is_punctuation(tape: &Tape, id: Option<usize>) -> bool {
    id.is_some_and(|id| tape.word(id).class().contains(TagClass::PUNCTUATION))
}

/// "A A": the first A is a false start.
fn rule_repetition() -> Rule {
    rule! {
        number: RuleNumber::REPETITION,
        name: "repetition",
        when: |tape, at| repeats(tape, tape.back(at, 1), at),
        then: |tape, at| lock_back(tape, at, 1, RuleNumber::REPETITION),
    }
}

/// "A B A" and "A , A": the first A is a false start.
fn rule_repetition_with_gap() -> Rule {
    rule! {
        number: RuleNumber::REPETITION_WITH_GAP,
        name: "repetition with gap",
        when: |tape, at| {
            !is_punctuation(tape, Some(at)) && repeats(tape, tape.back(at, 2), at)
        },
        then: |tape, at| {
            lock_back(tape, at, 2, RuleNumber::REPETITION_WITH_GAP);
            if let Some(id) = tape.back(at, 1).filter(|&id| is_punctuation(tape, Some(id))) {
                tape.word_mut(id).note(RuleNumber::REPETITION_ACROSS_PUNCTUATION);
            }
        },
    }
}

/// "A B , A B": the first A B is a false start.
fn rule_phrase_repetition() -> Rule {
    rule! {
        number: RuleNumber::PHRASE_REPETITION,
        name: "phrase repetition",
        when: |tape, at| {
            tape.back(at, 1).is_some_and(|prev| repeats(tape, tape.back(at, 4), prev))
                && repeats(tape, tape.back(at, 3), at)
                && is_punctuation(tape, tape.back(at, 2))
        },
        then: |tape, at| {
            lock_back(tape, at, 3, RuleNumber::PHRASE_REPETITION);
            lock_back(tape, at, 4, RuleNumber::PHRASE_REPETITION);
            if let Some(id) = tape.back(at, 2) {
                tape.word_mut(id).note(RuleNumber::PHRASE_REPETITION);
            }
        },
    }
}

/// A sentence made only of interjections and filler words says nothing.
/// Checked once per sentence, from its first token.
fn rule_filler_sentence() -> Rule {
    rule! {
        number: RuleNumber::FILLER_SENTENCE,
        name: "filler sentence",
        when: |tape, at| {
            if tape.back(at, 1).is_some() {
                return false;
            }
            let mut words = sentence(tape, at).filter(|&id| tape.word(id).is_word()).peekable();
            words.peek().is_some()
                && words.all(|id| {
                    let word = tape.word(id);
                    word.tag() == "UH" || word.is_filler() || FILLER_WORDS.contains(word.lower())
                })
        },
        then: |tape, at| {
            let ids: Vec<usize> = sentence(tape, at).filter(|&id| tape.word(id).is_word()).collect();
            for id in ids {
                tape.word_mut(id).lock_filler(RuleNumber::FILLER_SENTENCE);
            }
        },
    }
}

fn sentence(tape: &Tape, first: usize) -> impl Iterator<Item = usize> + '_ {
    std::iter::successors(Some(first), move |&id| tape.ahead(id, 1))
}

/// "like" is a filler unless a form of *be* comes right before it.
fn rule_filler_like() -> Rule {
    rule! {
        number: RuleNumber::FILLER_LIKE,
        name: "filler like",
        when: |tape, at| tape.word(at).lower() == "like" && !BE.contains(tape.prev_lower(at, 1)),
        then: |tape, at| tape.word_mut(at).lock_filler(RuleNumber::FILLER_LIKE),
    }
}

/// "you know" is one filler.
fn rule_you_know() -> Rule {
    rule! {
        number: RuleNumber::YOU_KNOW,
        name: "you know",
        when: |tape, at| tape.word(at).lower() == "know" && tape.prev_lower(at, 1) == "you",
        then: |tape, at| {
            lock_back(tape, at, 1, RuleNumber::YOU_KNOW);
            let know = tape.word_mut(at);
            know.combine();
            know.lock_filler(RuleNumber::YOU_KNOW);
        },
    }
}

pub(crate) fn rules() -> Vec<Rule> {
    vec![
        rule_repetition(),
        rule_repetition_with_gap(),
        rule_phrase_repetition(),
        rule_filler_sentence(),
        rule_filler_like(),
        rule_you_know(),
    ]
}

/// Lock every filler in the document. Every matching rule fires.
pub(crate) fn mark_fillers(tape: &mut Tape, rules: &[Rule]) {
    let mut cursor = tape.first();
    while let Some(at) = cursor {
        for rule in rules {
            if (rule.when)(tape, at) {
                trace!(rule = %rule.number, name = rule.name, token = tape.word(at).token(), "speech rule");
                (rule.then)(tape, at);
            }
        }
        cursor = tape.following(at);
    }
}
