use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug_span;

use crate::annotation::{Annotator, Document};
use crate::cpidr::{self, RuleNumber, WordList};
use crate::depid::{self, DedupKey, Dependency, FilterSet};
use crate::error::{Error, Result};

/// Options for [`score_cpidr`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CpidrOptions {
    /// Treat the text as transcribed speech: fillers, "you know" and false
    /// starts stay words but never count as propositions.
    pub speech_mode: bool,
}

impl CpidrOptions {
    pub fn speech() -> Self {
        Self { speech_mode: true }
    }
}

/// Options for [`score_depid`].
#[derive(Debug, Default)]
pub struct DepidOptions {
    /// Count each distinct dependency once (DEPID-R).
    pub is_depid_r: bool,
    /// What "distinct" means when `is_depid_r` is set.
    pub dedup_key: DedupKey,
    /// Sentence and token filters, the published set by default.
    pub filters: FilterSet,
}

impl DepidOptions {
    pub fn depid_r() -> Self {
        Self { is_depid_r: true, ..Self::default() }
    }

    pub fn with_filters(mut self, filters: FilterSet) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_dedup_key(mut self, dedup_key: DedupKey) -> Self {
        self.dedup_key = dedup_key;
        self
    }
}

/// Result from [`score_cpidr`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CpidrResult {
    pub word_count: usize,
    pub proposition_count: usize,
    /// `proposition_count / word_count`, or 0.0 for a text without words.
    pub density: f64,
    /// One record per input token, in input order.
    pub word_list: WordList,
}

impl CpidrResult {
    /// How many tokens each rule decided last.
    pub fn rule_counts(&self) -> BTreeMap<RuleNumber, usize> {
        let mut counts = BTreeMap::new();
        for rule in self.word_list.iter().filter_map(|w| w.rule()) {
            *counts.entry(rule).or_insert(0) += 1;
        }
        counts
    }
}

/// Result from [`score_depid`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepidResult {
    /// `proposition_count / word_count`, or 0.0 for a text without words.
    pub density: f64,
    /// Non-punctuation, non-space tokens of the whole document, filtered or not.
    pub word_count: usize,
    pub proposition_count: usize,
    /// Counted dependencies in document order.
    pub dependencies: Vec<Dependency>,
}

/// Score a tagged document with CPIDR.
///
/// Never fails: unknown tags count as plain words and an empty document
/// scores zero.
pub fn score_cpidr(document: &Document, options: &CpidrOptions) -> CpidrResult {
    let _span = debug_span!(
        "score_cpidr",
        sentences = document.sentences().len(),
        tokens = document.token_count(),
        speech_mode = options.speech_mode
    )
    .entered();

    cpidr::summarize(cpidr::rate(document, options.speech_mode))
}

/// Score a dependency-parsed document with DEPID, or DEPID-R when
/// [`DepidOptions::is_depid_r`] is set.
///
/// Fails only when a caller-supplied filter fails.
pub fn score_depid(document: &Document, options: &DepidOptions) -> Result<DepidResult> {
    let _span = debug_span!(
        "score_depid",
        sentences = document.sentences().len(),
        tokens = document.token_count(),
        depid_r = options.is_depid_r
    )
    .entered();

    let kept = depid::select(document, &options.filters)?;
    Ok(depid::summarize(document, kept, options.is_depid_r, options.dedup_key))
}

/// Annotate `text` with `annotator`, then score it with CPIDR.
pub fn rate_text<A: Annotator>(annotator: &A, text: &str, options: &CpidrOptions) -> Result<CpidrResult> {
    let document = annotator.annotate(text).map_err(|err| Error::Annotator(Box::new(err)))?;
    Ok(score_cpidr(&document, options))
}

/// Annotate `text` with `annotator`, then score it with DEPID.
pub fn depid_text<A: Annotator>(annotator: &A, text: &str, options: &DepidOptions) -> Result<DepidResult> {
    let document = annotator.annotate(text).map_err(|err| Error::Annotator(Box::new(err)))?;
    score_depid(&document, options)
}
