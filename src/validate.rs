use crate::throw::Throw;
use thiserror::Error;

/// Why a parsed answer does not finish the checkout.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("no darts thrown")]
    NoThrows,
    #[error("too many darts (maximum 3)")]
    TooManyThrows,
    #[error("total score {total} doesn't match checkout {target}")]
    ScoreMismatch { total: u16, target: u16 },
    #[error("checkout must end with a double")]
    MustEndOnDouble,
}

/// Check a throw sequence against a checkout target.
///
/// Rules are applied in a fixed order and the first failure wins: at least
/// one dart, at most three, values summing to the target, and a double as
/// the final dart. Nothing else is judged; any valid decomposition of the
/// target is as good as any other.
pub fn validate(target: u16, throws: &[Throw]) -> Result<(), CheckoutError> {
    if throws.is_empty() {
        return Err(CheckoutError::NoThrows);
    }
    if throws.len() > 3 {
        return Err(CheckoutError::TooManyThrows);
    }

    let total: u16 = throws.iter().map(|t| t.value).sum();
    if total != target {
        return Err(CheckoutError::ScoreMismatch { total, target });
    }

    if !throws.last().is_some_and(Throw::is_double) {
        return Err(CheckoutError::MustEndOnDouble);
    }

    Ok(())
}
