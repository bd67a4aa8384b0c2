use once_cell::sync::Lazy;
use tracing::trace;

use super::rules::{self, Placement, Rule};
use super::speech;
use super::tape::Tape;
use super::word::WordList;
use crate::annotation::Document;

static CLASSIFICATION: Lazy<Vec<Rule>> = Lazy::new(rules::classification);
static CONTEXT: Lazy<Vec<Rule>> = Lazy::new(rules::context);
static SPEECH: Lazy<Vec<Rule>> = Lazy::new(speech::rules);

/// Run the CPIDR rules over `document` and return one record per token.
pub(crate) fn rate(document: &Document, speech_mode: bool) -> WordList {
    let mut tape = Tape::new(document);
    if speech_mode {
        speech::mark_fillers(&mut tape, &SPEECH);
    }
    main_pass(&mut tape);
    tape.into_word_list()
}

fn main_pass(tape: &mut Tape) {
    let mut cursor = tape.first();
    while let Some(at) = cursor {
        if tape.word(at).is_filler() {
            cursor = tape.following(at);
            continue;
        }

        if let Some((head, rule)) = rules::merge_cardinals(tape, at) {
            trace!(rule = %rule, head = tape.word(head).token(), token = tape.word(at).token(), "merged cardinal");
            cursor = Some(head);
            continue;
        }

        if let Some(placement) = rules::aux_inversion(tape, at) {
            trace!(token = tape.word(at).token(), ?placement, "moved auxiliary");
            cursor = tape.following(at);
            match placement {
                Placement::Before(target) => tape.move_before(at, target),
                Placement::After(anchor) => tape.move_after(at, anchor),
            }
            continue;
        }

        if let Some(rule) = CLASSIFICATION.iter().find(|rule| (rule.when)(tape, at)) {
            trace!(rule = %rule.number, name = rule.name, token = tape.word(at).token(), "classified");
            (rule.then)(tape, at);
        }

        for rule in CONTEXT.iter() {
            if (rule.when)(tape, at) {
                trace!(rule = %rule.number, name = rule.name, token = tape.word(at).token(), "context rule");
                (rule.then)(tape, at);
            }
        }

        cursor = tape.following(at);
    }
}
