use std::fmt;

use thiserror::Error;

/// Error type returned by caller-supplied filter predicates.
pub type FilterError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Which level a DEPID filter runs at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterScope {
    Sentence,
    Token,
}

impl fmt::Display for FilterScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterScope::Sentence => f.write_str("sentence"),
            FilterScope::Token => f.write_str("token"),
        }
    }
}

/// A caller-supplied filter failed while scoring.
#[derive(Debug, Error)]
#[error(
    "{scope} filter `{filter}` failed on sentence {sentence}{}",
    .token.map(|t| format!(", token {t}")).unwrap_or_default()
)]
pub struct CallerFilterError {
    pub filter: String,
    pub scope: FilterScope,
    pub sentence: usize,
    pub token: Option<usize>,
    #[source]
    pub source: FilterError,
}

/// Errors surfaced by the scoring entry points.
#[derive(Debug, Error)]
pub enum Error {
    /// A caller-supplied DEPID filter failed.
    #[error(transparent)]
    CallerFilter(#[from] CallerFilterError),
    /// The [`Annotator`](crate::Annotator) given to `rate_text`/`depid_text` failed.
    #[error("annotator failed: {0}")]
    Annotator(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Density was requested for a text without words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("density is undefined for a text with no words")]
pub struct DivisionUndefined;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_filter_message_names_the_filter() {
        let err = CallerFilterError {
            filter: "no-numbers".into(),
            scope: FilterScope::Token,
            sentence: 2,
            token: Some(5),
            source: "bad token".into(),
        };
        assert_eq!(err.to_string(), "token filter `no-numbers` failed on sentence 2, token 5");
        let err = Error::from(err);
        let source = std::error::Error::source(&err).map(ToString::to_string);
        assert_eq!(source.as_deref(), Some("bad token"));
    }
}
