//! CPIDR: proposition counting over part-of-speech tags.
//!
//! Every input token gets a [`WordRecord`]. Rules then walk the document in
//! reading order and decide, token by token, whether it is a word and whether
//! it carries a proposition.
//!
//! ```text
//! Document ── Tape::new               (tape.rs, word.rs)
//!               │   is_word, '^' as sentence end
//!               v
//!        speech::mark_fillers         (speech.rs, speech mode only)
//!               │   lock false starts and fillers
//!               v
//!        engine::main_pass            (engine.rs)
//!               - merge cardinals     (003, 004)
//!               - move inverted aux   (101)
//!               - classification      (first match wins)
//!               - context rules       (all matches fire)
//!               │
//!               v
//!        aggregate::summarize         (aggregate.rs)
//!               │
//!               v
//!          CpidrResult
//! ```
//!
//! ## Responsibilities by module
//!
//! - `tags.rs`: tag classes (`bitflags`) and the word lists the rules consult.
//! - `word.rs`: the per-token record and rule numbers.
//! - `tape.rs`: the record arena plus the reading order. Lookups never leave
//!   the current sentence, backward searches stop at a sentence end.
//! - `rules.rs`: the rule tables, encoded as data with `rule!`.
//! - `speech.rs`: the filler pass.
//!
//! Rules look back from the current token: a rule fires on the last token of
//! the pattern it recognizes and revises the earlier ones.
//!
//! ## Debugging
//!
//! Each rule that fires emits a `trace` event with its number and the token.

#[path = "cpidr/aggregate.rs"]
mod aggregate;
#[path = "cpidr/engine.rs"]
mod engine;
#[path = "cpidr/rules.rs"]
pub(crate) mod rules;
#[path = "cpidr/speech.rs"]
mod speech;
#[path = "cpidr/tags.rs"]
mod tags;
#[path = "cpidr/tape.rs"]
pub(crate) mod tape;
#[path = "cpidr/word.rs"]
mod word;


pub(crate) use aggregate::summarize;
pub(crate) use engine::rate;
pub use word::{RuleNumber, WordList, WordRecord};
