//! Propositional idea density of English text.
//!
//! Two independent scorers over annotated text:
//!
//! - **CPIDR** ([`score_cpidr`]) walks part-of-speech tagged tokens through the
//!   published CPIDR rule table and marks each token as a word and/or a
//!   proposition.
//! - **DEPID** ([`score_depid`]) counts proposition-bearing dependency arcs of a
//!   parse, after caller-configurable sentence and token filters. DEPID-R
//!   counts each distinct arc once.
//!
//! Annotation (tokenizing, tagging, parsing) happens outside this crate. Build
//! a [`Document`] from your tagger's output, or plug the tagger in through
//! [`Annotator`] and use [`rate_text`] / [`depid_text`].
//!
//! ```
//! use ideadensity::{AnnotatedToken, CpidrOptions, Document, score_cpidr};
//!
//! let doc = Document::from_sentences([vec![
//!     AnnotatedToken::new("Dogs", "NNS"),
//!     AnnotatedToken::new("bark", "VBP"),
//!     AnnotatedToken::new("loudly", "RB"),
//!     AnnotatedToken::new(".", "."),
//! ]]);
//! let res = score_cpidr(&doc, &CpidrOptions::default());
//! assert_eq!((res.word_count, res.proposition_count), (3, 2));
//! ```

#[macro_use]
mod macros;
mod annotation;
mod api;
mod cpidr;
mod density;
mod depid;
mod error;

#[cfg(test)]
mod properties;
#[cfg(test)]
mod testing;

pub use annotation::{AnnotatedToken, Annotator, Document, Sentence, TokenRef};
pub use api::{CpidrOptions, CpidrResult, DepidOptions, DepidResult, depid_text, rate_text, score_cpidr, score_depid};
pub use cpidr::{RuleNumber, WordList, WordRecord};
pub use depid::{
    DedupKey, Dependency, EXCLUDED_DETERMINERS, EXCLUDED_NSUBJ, FilterSet, PROPOSITION_DEPENDENCIES, SentenceFilter,
    TokenFilter, no_i_you_root_subject, not_coordinating_conjunction, not_excluded_determiner, not_excluded_nsubj,
};
pub use error::{CallerFilterError, DivisionUndefined, Error, FilterError, FilterScope, Result};
