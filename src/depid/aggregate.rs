use std::collections::HashSet;

use super::dependency::{DedupKey, Dependency};
use crate::annotation::{Document, TokenRef};
use crate::api::DepidResult;
use crate::density::density_or_zero;

/// Count the kept dependencies against the document's words.
///
/// With `is_depid_r`, repeated dependencies (by `key`) count once and the
/// first occurrence keeps its place.
pub(crate) fn summarize(document: &Document, kept: Vec<TokenRef<'_>>, is_depid_r: bool, key: DedupKey) -> DepidResult {
    let word_count = document.tokens().filter(|t| !t.token.is_punct() && !t.token.is_space()).count();

    let dependencies: Vec<Dependency> = if is_depid_r {
        let mut seen = HashSet::new();
        kept.into_iter().filter(|&t| seen.insert(key.key(t))).map(Dependency::of).collect()
    } else {
        kept.into_iter().map(Dependency::of).collect()
    };

    let proposition_count = dependencies.len();
    let density = density_or_zero(proposition_count, word_count);
    DepidResult { density, word_count, proposition_count, dependencies }
}
