//! DEPID and DEPID-R: proposition counting over dependency parses.
//!
//! Each dependency arc with a proposition-bearing label is one proposition.
//! Caller-configurable filters drop whole sentences or single arcs first;
//! DEPID-R then counts each distinct arc once.
//!
//! - `dependency.rs`: the counted unit, the label set and DEPID-R keys.
//! - `filters.rs`: the published filters and [`FilterSet`].
//! - `engine.rs`: sentence then token filtering.
//! - `aggregate.rs`: counting and density.

#[path = "depid/aggregate.rs"]
mod aggregate;
#[path = "depid/dependency.rs"]
mod dependency;
#[path = "depid/engine.rs"]
mod engine;
#[path = "depid/filters.rs"]
mod filters;

#[cfg(test)]
#[path = "depid/tests.rs"]
mod tests;

pub(crate) use aggregate::summarize;
pub use dependency::{DedupKey, Dependency, PROPOSITION_DEPENDENCIES};
pub(crate) use engine::select;
pub use filters::{
    EXCLUDED_DETERMINERS, EXCLUDED_NSUBJ, FilterSet, SentenceFilter, TokenFilter, no_i_you_root_subject,
    not_coordinating_conjunction, not_excluded_determiner, not_excluded_nsubj,
};
