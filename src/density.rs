use tracing::debug;

use crate::error::DivisionUndefined;

pub(crate) fn density(propositions: usize, words: usize) -> Result<f64, DivisionUndefined> {
    if words == 0 {
        return Err(DivisionUndefined);
    }
    Ok(propositions as f64 / words as f64)
}

/// Density with the zero-word guard applied: an empty text scores 0.0.
pub(crate) fn density_or_zero(propositions: usize, words: usize) -> f64 {
    density(propositions, words).unwrap_or_else(|err| {
        debug!(propositions, %err, "density guard fired");
        0.0
    })
}
