use std::borrow::Cow;
use std::fmt;

use crate::annotation::{Sentence, TokenRef};
use crate::error::FilterError;

/// Determiners whose `det` arcs never count.
pub const EXCLUDED_DETERMINERS: &[&str] = &["a", "an", "the"];
/// Subjects whose `nsubj` arcs never count.
pub const EXCLUDED_NSUBJ: &[&str] = &["it", "this"];

/// Keep a sentence unless "I" or "you" is the subject of its root verb.
pub fn no_i_you_root_subject(sentence: &Sentence) -> bool {
    !sentence.iter().any(|t| matches!(t.lower(), "i" | "you") && t.dep() == "nsubj" && t.head().dep == "ROOT")
}

/// Keep a token unless it is a `det` arc on a/an/the.
pub fn not_excluded_determiner(token: TokenRef<'_>) -> bool {
    !(token.dep() == "det" && EXCLUDED_DETERMINERS.contains(&token.lower()))
}

/// Keep a token unless it is an `nsubj` arc on it/this.
pub fn not_excluded_nsubj(token: TokenRef<'_>) -> bool {
    !(token.dep() == "nsubj" && EXCLUDED_NSUBJ.contains(&token.lower()))
}

/// Keep a token unless it is a coordinating conjunction.
pub fn not_coordinating_conjunction(token: TokenRef<'_>) -> bool {
    token.dep() != "cc"
}

type SentencePredicate = Box<dyn Fn(&Sentence) -> Result<bool, FilterError> + Send + Sync>;
type TokenPredicate = Box<dyn for<'a> Fn(TokenRef<'a>) -> Result<bool, FilterError> + Send + Sync>;

/// A named predicate over whole sentences. `true` keeps the sentence.
pub struct SentenceFilter {
    name: Cow<'static, str>,
    predicate: SentencePredicate,
}

impl SentenceFilter {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&Sentence) -> bool + Send + Sync + 'static,
    {
        let predicate = move |sentence: &Sentence| -> Result<bool, FilterError> { Ok(predicate(sentence)) };
        Self { name: name.into(), predicate: Box::new(predicate) }
    }

    /// A predicate that can fail; its error reaches the caller as
    /// [`Error::CallerFilter`](crate::Error::CallerFilter).
    pub fn fallible<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: Fn(&Sentence) -> Result<bool, FilterError> + Send + Sync + 'static,
    {
        Self { name: name.into(), predicate: Box::new(predicate) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn keep(&self, sentence: &Sentence) -> Result<bool, FilterError> {
        (self.predicate)(sentence)
    }
}

impl fmt::Debug for SentenceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SentenceFilter").field("name", &self.name).field("predicate", &"<function>").finish()
    }
}

/// A named predicate over single dependencies. `true` keeps the token.
pub struct TokenFilter {
    name: Cow<'static, str>,
    predicate: TokenPredicate,
}

impl TokenFilter {
    pub fn new<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: for<'a> Fn(TokenRef<'a>) -> bool + Send + Sync + 'static,
    {
        let predicate = move |token: TokenRef<'_>| -> Result<bool, FilterError> { Ok(predicate(token)) };
        Self { name: name.into(), predicate: Box::new(predicate) }
    }

    pub fn fallible<F>(name: impl Into<Cow<'static, str>>, predicate: F) -> Self
    where
        F: for<'a> Fn(TokenRef<'a>) -> Result<bool, FilterError> + Send + Sync + 'static,
    {
        Self { name: name.into(), predicate: Box::new(predicate) }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn keep(&self, token: TokenRef<'_>) -> Result<bool, FilterError> {
        (self.predicate)(token)
    }
}

impl fmt::Debug for TokenFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenFilter").field("name", &self.name).field("predicate", &"<function>").finish()
    }
}

/// Ordered sentence and token predicates. A sentence or token is kept only
/// if every predicate of its level keeps it.
///
/// [`FilterSet::default`] is the published filter; [`FilterSet::new`] starts empty.
#[derive(Debug)]
pub struct FilterSet {
    sentence: Vec<SentenceFilter>,
    token: Vec<TokenFilter>,
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::new()
            .with_i_you_subject_filter()
            .with_excluded_determiner_filter()
            .with_excluded_nsubj_filter()
            .with_cc_filter()
    }
}

impl FilterSet {
    pub fn new() -> Self {
        Self { sentence: Vec::new(), token: Vec::new() }
    }

    /// Determiner and nsubj filters only, as in Sirts et al. (2017).
    pub fn sirts_default() -> Self {
        Self::new().with_excluded_determiner_filter().with_excluded_nsubj_filter()
    }

    pub fn with_i_you_subject_filter(self) -> Self {
        self.with_sentence_filter(SentenceFilter::new("i-you-root-subject", no_i_you_root_subject))
    }

    pub fn with_excluded_determiner_filter(self) -> Self {
        self.with_token_filter(TokenFilter::new("excluded-determiner", not_excluded_determiner))
    }

    pub fn with_excluded_nsubj_filter(self) -> Self {
        self.with_token_filter(TokenFilter::new("excluded-nsubj", not_excluded_nsubj))
    }

    pub fn with_cc_filter(self) -> Self {
        self.with_token_filter(TokenFilter::new("cc", not_coordinating_conjunction))
    }

    pub fn with_sentence_filter(mut self, filter: SentenceFilter) -> Self {
        self.sentence.push(filter);
        self
    }

    pub fn with_token_filter(mut self, filter: TokenFilter) -> Self {
        self.token.push(filter);
        self
    }

    pub fn sentence_filters(&self) -> &[SentenceFilter] {
        &self.sentence
    }

    pub fn token_filters(&self) -> &[TokenFilter] {
        &self.token
    }
}
