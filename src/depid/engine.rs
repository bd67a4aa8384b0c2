use tracing::trace;

use super::dependency::is_proposition_label;
use super::filters::FilterSet;
use crate::annotation::{Document, TokenRef};
use crate::error::{CallerFilterError, FilterScope};

/// Tokens whose dependency survives `filters`, in document order.
///
/// A sentence rejected by any sentence filter contributes nothing and its
/// tokens are never shown to token filters. Punctuation, whitespace and
/// labels outside [`PROPOSITION_DEPENDENCIES`](super::PROPOSITION_DEPENDENCIES)
/// are skipped before token filters run.
pub(crate) fn select<'a>(document: &'a Document, filters: &FilterSet) -> Result<Vec<TokenRef<'a>>, CallerFilterError> {
    let mut kept = Vec::new();

    'sentences: for sentence in document.sentences() {
        for filter in filters.sentence_filters() {
            match filter.keep(sentence) {
                Ok(true) => {}
                Ok(false) => {
                    trace!(sentence = sentence.index(), filter = filter.name(), "dropped sentence");
                    continue 'sentences;
                }
                Err(source) => {
                    return Err(CallerFilterError {
                        filter: filter.name().to_string(),
                        scope: FilterScope::Sentence,
                        sentence: sentence.index(),
                        token: None,
                        source,
                    });
                }
            }
        }

        'tokens: for token in sentence.iter() {
            if token.token.is_punct() || token.token.is_space() || !is_proposition_label(token.dep()) {
                continue;
            }
            for filter in filters.token_filters() {
                match filter.keep(token) {
                    Ok(true) => {}
                    Ok(false) => {
                        trace!(sentence = sentence.index(), token = token.text(), filter = filter.name(), "dropped dependency");
                        continue 'tokens;
                    }
                    Err(source) => {
                        return Err(CallerFilterError {
                            filter: filter.name().to_string(),
                            scope: FilterScope::Token,
                            sentence: sentence.index(),
                            token: Some(token.token.index),
                            source,
                        });
                    }
                }
            }
            kept.push(token);
        }
    }

    Ok(kept)
}
