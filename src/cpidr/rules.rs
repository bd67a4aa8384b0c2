use std::fmt;

use super::tags::{
    ARTICLES, AUXILIARIES, BE, CAUSATIVE_LINKING_VERBS, CORRELATING_CONJUNCTIONS, LINKING_VERBS, NEGATION_ABSORBING_ITEMS,
    NEGATION_TAG, NEGATIVE_POLARITY_ITEMS, TagClass, is_negation,
};
use super::tape::{MAX_LOOKAHEAD, Tape};
use super::word::RuleNumber;

/// One row of a CPIDR rule table: a guard over the current token and its
/// neighbours, and the action taken when it holds.
pub(crate) struct Rule {
    pub number: RuleNumber,
    pub name: &'static str,
    pub when: fn(&Tape, usize) -> bool,
    pub then: fn(&mut Tape, usize),
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("number", &self.number)
            .field("name", &self.name)
            .field("when", &"<function>")
            .field("then", &"<function>")
            .finish()
    }
}

fn suppress_back(tape: &mut Tape, at: usize, k: usize, rule: RuleNumber) {
    if let Some(id) = tape.back(at, k) {
        tape.word_mut(id).suppress(rule);
    }
}

fn propose_back(tape: &mut Tape, at: usize, k: usize, rule: RuleNumber) {
    if let Some(id) = tape.back(at, k) {
        tape.word_mut(id).propose(rule);
    }
}

// Classification: the first rule whose guard holds decides the token itself.

/// 'not', any word ending in "n't" and common contractions become NOT and count.
fn rule_negation() -> Rule {
    rule! {
        number: RuleNumber::NEGATION,
        name: "negation",
        when: |tape, at| is_negation(tape.word(at).lower()),
        then: |tape, at| {
            let word = tape.word_mut(at);
            word.retag(NEGATION_TAG);
            word.propose(RuleNumber::NEGATION);
        },
    }
}

/// "make it better": the adjective after a causative linking verb adds nothing.
fn rule_causative_adjective() -> Rule {
    rule! {
        number: RuleNumber::CAUSATIVE_ADJECTIVE,
        name: "adjective after causative linking verb",
        when: |tape, at| {
            tape.word(at).class().contains(TagClass::ADJECTIVE)
                && tape.search_back(at, |w| CAUSATIVE_LINKING_VERBS.contains(w.lower())).is_some()
        },
        then: |tape, at| tape.word_mut(at).suppress(RuleNumber::CAUSATIVE_ADJECTIVE),
    }
}

/// "how come", "how many": one proposition, carried by "how".
fn rule_how_come() -> Rule {
    rule! {
        number: RuleNumber::HOW_COME,
        name: "how come / how many",
        when: |tape, at| matches!(tape.word(at).lower(), "come" | "many") && tape.prev_lower(at, 1) == "how",
        then: |tape, at| {
            let tag = tape.prev_tag(at, 1).to_string();
            let word = tape.word_mut(at);
            word.retag(&tag);
            word.suppress(RuleNumber::HOW_COME);
            word.combine();
        },
    }
}

/// "not ... yet", "not ... any": the negation carries the proposition.
fn rule_negative_polarity() -> Rule {
    rule! {
        number: RuleNumber::NEGATIVE_POLARITY,
        name: "negative polarity item",
        when: |tape, at| {
            NEGATIVE_POLARITY_ITEMS.contains(tape.word(at).lower())
                && tape.search_back(at, |w| w.class().contains(TagClass::NEGATION)).is_some()
        },
        then: |tape, at| tape.word_mut(at).suppress(RuleNumber::NEGATIVE_POLARITY),
    }
}

/// "and then", "or else" are one proposition each.
fn rule_and_then() -> Rule {
    rule! {
        number: RuleNumber::AND_THEN,
        name: "and then / or else",
        when: |tape, at| {
            matches!((tape.prev_lower(at, 1), tape.word(at).lower()), ("and", "then") | ("or", "else"))
        },
        then: |tape, at| {
            let word = tape.word_mut(at);
            word.suppress(RuleNumber::AND_THEN);
            word.combine();
        },
    }
}

fn rule_final_to() -> Rule {
    rule! {
        number: RuleNumber::FINAL_TO,
        name: "to ending a sentence",
        when: |tape, at| tape.word(at).tag() == "TO" && tape.closes_sentence(at),
        then: |tape, at| tape.word_mut(at).suppress(RuleNumber::FINAL_TO),
    }
}

fn rule_final_modal() -> Rule {
    rule! {
        number: RuleNumber::FINAL_MODAL,
        name: "modal ending a sentence",
        when: |tape, at| tape.word(at).tag() == "MD" && tape.closes_sentence(at),
        then: |tape, at| tape.word_mut(at).propose(RuleNumber::FINAL_MODAL),
    }
}

/// A cardinal counts only with a noun close behind it: "in 3 parts" is two
/// propositions, "in 1941" one.
fn rule_cardinal() -> Rule {
    rule! {
        number: RuleNumber::CARDINAL,
        name: "cardinal before noun",
        when: |tape, at| tape.word(at).tag() == "CD",
        then: |tape, at| {
            let noun_follows = (1..=MAX_LOOKAHEAD)
                .map_while(|k| tape.next(at, k))
                .take_while(|w| !w.class().contains(TagClass::SENTENCE_END))
                .any(|w| w.class().contains(TagClass::NOUN));
            let word = tape.word_mut(at);
            if noun_follows {
                word.propose(RuleNumber::CARDINAL);
            } else {
                word.suppress(RuleNumber::CARDINAL);
            }
        },
    }
}

fn rule_article() -> Rule {
    rule! {
        number: RuleNumber::ARTICLE,
        name: "article",
        when: |tape, at| ARTICLES.contains(tape.word(at).lower()),
        then: |tape, at| tape.word_mut(at).suppress(RuleNumber::ARTICLE),
    }
}

fn rule_default_proposition() -> Rule {
    rule! {
        number: RuleNumber::DEFAULT_PROPOSITION,
        name: "default proposition tag",
        when: |tape, at| tape.word(at).class().contains(TagClass::DEFAULT_PROPOSITION),
        then: |tape, at| tape.word_mut(at).propose(RuleNumber::DEFAULT_PROPOSITION),
    }
}

/// Rules deciding the current token, in precedence order. First match wins.
pub(crate) fn classification() -> Vec<Rule> {
    vec![
        rule_negation(),
        rule_causative_adjective(),
        rule_how_come(),
        rule_negative_polarity(),
        rule_and_then(),
        rule_final_to(),
        rule_final_modal(),
        rule_cardinal(),
        rule_article(),
        rule_default_proposition(),
    ]
}

// Context: every rule whose guard holds fires, revising tokens of the
// construct the current token closes.

/// 'that'/'this' tagged DT before a verb or adverb is a pronoun.
fn rule_demonstrative_pronoun() -> Rule {
    rule! {
        number: RuleNumber::DEMONSTRATIVE_PRONOUN,
        name: "demonstrative pronoun",
        when: |tape, at| {
            matches!(tape.prev_lower(at, 1), "this" | "that")
                && tape.prev_tag(at, 1) == "DT"
                && tape.word(at).class().intersects(TagClass::VERB | TagClass::ADVERB)
        },
        then: |tape, at| {
            if let Some(id) = tape.back(at, 1) {
                let word = tape.word_mut(id);
                word.retag("PRP");
                word.suppress(RuleNumber::DEMONSTRATIVE_PRONOUN);
            }
        },
    }
}

/// "either ... or": the first member of a correlative pair is not a proposition.
fn rule_correlative_pair() -> Rule {
    rule! {
        number: RuleNumber::CORRELATIVE_PAIR,
        name: "correlative conjunction",
        when: |tape, at| {
            let word = tape.word(at);
            word.tag() == "CC" && !CORRELATING_CONJUNCTIONS.contains(word.lower())
        },
        then: |tape, at| {
            if let Some(id) = tape.search_back(at, |w| CORRELATING_CONJUNCTIONS.contains(w.lower())) {
                tape.word_mut(id).suppress(RuleNumber::CORRELATIVE_PAIR);
            }
        },
    }
}

/// "not ... unless": the second word is the one counted.
fn rule_negation_unless() -> Rule {
    rule! {
        number: RuleNumber::NEGATION_UNLESS,
        name: "negation before unless",
        when: |tape, at| NEGATION_ABSORBING_ITEMS.contains(tape.word(at).lower()),
        then: |tape, at| {
            if let Some(id) = tape.search_back(at, |w| w.class().contains(TagClass::NEGATION)) {
                tape.word_mut(id).suppress(RuleNumber::NEGATION_UNLESS);
            }
        },
    }
}

fn rule_going_to() -> Rule {
    rule! {
        number: RuleNumber::GOING_TO,
        name: "going to + verb",
        when: |tape, at| {
            tape.word(at).class().contains(TagClass::VERB)
                && tape.prev_lower(at, 1) == "to"
                && tape.prev_lower(at, 2) == "going"
        },
        then: |tape, at| {
            suppress_back(tape, at, 1, RuleNumber::GOING_TO);
            suppress_back(tape, at, 2, RuleNumber::GOING_TO);
        },
    }
}

/// "if ... then (word)" is one conjunction. A sentence-final "then" is
/// more likely an adverb and is left alone.
fn rule_if_then() -> Rule {
    rule! {
        number: RuleNumber::IF_THEN,
        name: "if ... then",
        when: |tape, at| {
            tape.word(at).is_word()
                && tape.prev_lower(at, 1) == "then"
                && tape.search_back(at, |w| w.lower() == "if").is_some()
        },
        then: |tape, at| suppress_back(tape, at, 1, RuleNumber::IF_THEN),
    }
}

fn rule_each_other() -> Rule {
    rule! {
        number: RuleNumber::EACH_OTHER,
        name: "each other",
        when: |tape, at| tape.word(at).lower() == "other" && tape.prev_lower(at, 1) == "each",
        then: |tape, at| {
            if let Some(id) = tape.back(at, 1) {
                let each = tape.word_mut(id);
                each.retag("PRP");
                each.suppress(RuleNumber::EACH_OTHER);
            }
            let other = tape.word_mut(at);
            other.retag("PRP");
            other.suppress(RuleNumber::EACH_OTHER);
            other.combine();
        },
    }
}

/// A linking verb before an adjective or adverb is not a proposition.
/// Adverbs here are mostly mistagged adjectives.
fn rule_linking_verb() -> Rule {
    rule! {
        number: RuleNumber::LINKING_VERB,
        name: "linking verb + adjective",
        when: |tape, at| {
            tape.word(at).class().intersects(TagClass::ADJECTIVE | TagClass::ADVERB)
                && LINKING_VERBS.contains(tape.prev_lower(at, 1))
        },
        then: |tape, at| suppress_back(tape, at, 1, RuleNumber::LINKING_VERB),
    }
}

fn rule_be_preposition() -> Rule {
    rule! {
        number: RuleNumber::BE_PREPOSITION,
        name: "be + preposition",
        when: |tape, at| tape.word(at).tag() == "IN" && BE.contains(tape.prev_lower(at, 1)),
        then: |tape, at| suppress_back(tape, at, 1, RuleNumber::BE_PREPOSITION),
    }
}

/// "he is now the president": linking verb and adverb both count, which the
/// article rule would otherwise undercount.
fn rule_linking_adverb_determiner() -> Rule {
    rule! {
        number: RuleNumber::LINKING_ADVERB_DETERMINER,
        name: "linking verb + adverb + determiner",
        when: |tape, at| {
            matches!(tape.word(at).tag(), "DT" | "PDT")
                && tape.prev_class(at, 1).contains(TagClass::ADVERB)
                && LINKING_VERBS.contains(tape.prev_lower(at, 2))
        },
        then: |tape, at| {
            propose_back(tape, at, 1, RuleNumber::LINKING_ADVERB_DETERMINER);
            propose_back(tape, at, 2, RuleNumber::LINKING_ADVERB_DETERMINER);
        },
    }
}

fn rule_aux_not() -> Rule {
    rule! {
        number: RuleNumber::AUX_NOT,
        name: "aux + not",
        when: |tape, at| tape.word(at).lower() == "not" && AUXILIARIES.contains(tape.prev_lower(at, 1)),
        then: |tape, at| suppress_back(tape, at, 1, RuleNumber::AUX_NOT),
    }
}

fn rule_aux_verb() -> Rule {
    rule! {
        number: RuleNumber::AUX_VERB,
        name: "aux + verb",
        when: |tape, at| {
            tape.word(at).class().contains(TagClass::VERB) && AUXILIARIES.contains(tape.prev_lower(at, 1))
        },
        then: |tape, at| suppress_back(tape, at, 1, RuleNumber::AUX_VERB),
    }
}

/// "had always sung", "did not go": the modifier and the verb count, the aux does not.
fn rule_aux_modifier_verb() -> Rule {
    rule! {
        number: RuleNumber::AUX_MODIFIER_VERB,
        name: "aux + negation/adverb + verb",
        when: |tape, at| {
            tape.word(at).class().contains(TagClass::VERB)
                && tape.prev_class(at, 1).intersects(TagClass::NEGATION | TagClass::ADVERB)
                && AUXILIARIES.contains(tape.prev_lower(at, 2))
        },
        then: |tape, at| suppress_back(tape, at, 2, RuleNumber::AUX_MODIFIER_VERB),
    }
}

fn rule_to_verb() -> Rule {
    rule! {
        number: RuleNumber::TO_VERB,
        name: "to + base verb",
        when: |tape, at| tape.word(at).tag() == "VB" && tape.prev_tag(at, 1) == "TO",
        then: |tape, at| suppress_back(tape, at, 1, RuleNumber::TO_VERB),
    }
}

fn rule_for_to_verb() -> Rule {
    rule! {
        number: RuleNumber::FOR_TO_VERB,
        name: "for ... to + base verb",
        when: |tape, at| tape.word(at).tag() == "VB" && tape.prev_tag(at, 1) == "TO",
        then: |tape, at| {
            if let Some(id) = tape.search_back(at, |w| w.lower() == "for") {
                tape.word_mut(id).suppress(RuleNumber::FOR_TO_VERB);
            }
        },
    }
}

/// Rules revising the construct closed by the current token. All matches fire, in order.
pub(crate) fn context() -> Vec<Rule> {
    vec![
        rule_demonstrative_pronoun(),
        rule_correlative_pair(),
        rule_negation_unless(),
        rule_going_to(),
        rule_if_then(),
        rule_each_other(),
        rule_linking_verb(),
        rule_be_preposition(),
        rule_linking_adverb_determiner(),
        rule_aux_not(),
        rule_aux_verb(),
        rule_aux_modifier_verb(),
        rule_to_verb(),
        rule_for_to_verb(),
    ]
}

/// Fold a cardinal into the number before it (003: "10 20", 004: "3 / 4").
/// Returns the id of the surviving head, whose rules run again.
pub(crate) fn merge_cardinals(tape: &mut Tape, at: usize) -> Option<(usize, RuleNumber)> {
    if tape.word(at).tag() != "CD" {
        return None;
    }
    let prev = tape.back(at, 1)?;
    if tape.word(prev).tag() == "CD" && !tape.word(prev).is_filler() {
        tape.word_mut(at).absorb(RuleNumber::CONSECUTIVE_CARDINALS);
        tape.unlink(at);
        return Some((prev, RuleNumber::CONSECUTIVE_CARDINALS));
    }
    let separator = tape.word(prev).token().chars().next().is_some_and(|c| !c.is_alphanumeric());
    let head = tape.back(at, 2)?;
    if separator && tape.word(head).tag() == "CD" && !tape.word(head).is_filler() && !tape.word(prev).is_filler() {
        for id in [prev, at] {
            tape.word_mut(id).absorb(RuleNumber::SEPARATED_CARDINALS);
            tape.unlink(id);
        }
        return Some((head, RuleNumber::SEPARATED_CARDINALS));
    }
    None
}

/// Where subject-aux inversion moves an auxiliary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Placement {
    Before(usize),
    After(usize),
}

/// 101: an auxiliary that opens its sentence, or any auxiliary in a sentence
/// opened by an interrogative, moves in front of the next verb or to the end
/// of the sentence. `None` when it already sits there.
/// The scan also stops at another auxiliary.
pub(crate) fn aux_inversion(tape: &Tape, at: usize) -> Option<Placement> {
    let word = tape.word(at);
    if !AUXILIARIES.contains(word.lower()) {
        return None;
    }
    let opens_sentence = tape.back(at, 1).is_none();
    let interrogative = tape.word(tape.sentence_opener(at)).class().contains(TagClass::INTERROGATIVE);
    if !(opens_sentence || interrogative) {
        return None;
    }
    let first = tape.ahead(at, 1)?;
    let mut last = first;
    let mut cursor = Some(first);
    while let Some(id) = cursor {
        let stop = tape.word(id);
        if stop.class().intersects(TagClass::SENTENCE_END | TagClass::VERB) || AUXILIARIES.contains(stop.lower()) {
            return (id != first).then_some(Placement::Before(id));
        }
        last = id;
        cursor = tape.ahead(id, 1);
    }
    Some(Placement::After(last))
}
