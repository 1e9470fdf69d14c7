pub mod num;
pub mod transform;

pub use crate::num::Weight;
pub use crate::transform::{Exponential, Linear, WeightTransform};

use rand::Rng;
use thiserror::Error;

/// Rejection reasons for a selection request. Every failure is surfaced
/// synchronously to the caller; nothing is retried or masked.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SelectionError {
    #[error("no candidates to select from")]
    EmptyCandidates,
    #[error("{candidates} candidates with {weights} weights")]
    LengthMismatch { candidates: usize, weights: usize },
    #[error("score at index {index} is not finite: {value}")]
    NonFiniteScore { index: usize, value: f64 },
    #[error("transform produced an invalid weight at index {index}: {value}")]
    InvalidWeight { index: usize, value: f64 },
}

/// Pick one candidate with probability proportional to its weight.
///
/// One uniform draw is scaled by the weight sum and walked down the candidate
/// list in index order; the first candidate whose weight brings the remainder
/// to zero or below is returned. When rounding error keeps the remainder
/// positive through the whole walk, the last candidate is returned; this is
/// a deliberate fallback, not an error. Over many independent calls the
/// selection frequency of candidate `i` converges to `weights[i] / total`.
///
/// Candidates are opaque: only their count and position matter. The generator
/// is caller-injected and the call holds no other state, so concurrent
/// callers with independent generator instances never interfere.
pub fn select<'c, R, T>(
    rng: &mut R,
    candidates: &'c [T],
    weights: &[Weight],
) -> Result<&'c T, SelectionError>
where
    R: Rng,
{
    if candidates.is_empty() {
        return Err(SelectionError::EmptyCandidates);
    }
    if candidates.len() != weights.len() {
        return Err(SelectionError::LengthMismatch {
            candidates: candidates.len(),
            weights: weights.len(),
        });
    }

    let total: f64 = weights.iter().map(Weight::as_f64).sum();
    let mut remainder = rng.gen::<f64>() * total;
    for (candidate, weight) in candidates.iter().zip(weights) {
        remainder -= weight.as_f64();
        if remainder <= 0.0 {
            return Ok(candidate);
        }
    }
    // Rounding at the span boundaries can leave the remainder positive after
    // the full walk. Resolve to the last candidate.
    Ok(&candidates[candidates.len() - 1])
}

/// Transform raw fitness scores and select in one call.
///
/// Scores line up with candidates one-to-one and are taken by absolute value
/// before the transform is applied.
pub fn select_scored<'c, R, T, W>(
    rng: &mut R,
    candidates: &'c [T],
    scores: &[f64],
    transform: &W,
) -> Result<&'c T, SelectionError>
where
    R: Rng,
    W: WeightTransform + ?Sized,
{
    if candidates.is_empty() {
        return Err(SelectionError::EmptyCandidates);
    }
    if candidates.len() != scores.len() {
        return Err(SelectionError::LengthMismatch {
            candidates: candidates.len(),
            weights: scores.len(),
        });
    }
    let weights = sampling_weights(scores, transform)?;
    select(rng, candidates, &weights)
}

/// Turn raw fitness scores into sampling weights.
///
/// Non-finite scores are rejected before the transform sees them. The
/// transform receives score magnitudes and must yield one weight per score;
/// each produced weight must be non-negative and finite.
pub fn sampling_weights<W>(scores: &[f64], transform: &W) -> Result<Vec<Weight>, SelectionError>
where
    W: WeightTransform + ?Sized,
{
    if let Some((index, &value)) = scores.iter().enumerate().find(|(_, s)| !s.is_finite()) {
        return Err(SelectionError::NonFiniteScore { index, value });
    }
    let magnitudes: Vec<f64> = scores.iter().map(|score| score.abs()).collect();
    let weights = transform.weights(&magnitudes);
    if weights.len() != scores.len() {
        return Err(SelectionError::LengthMismatch {
            candidates: scores.len(),
            weights: weights.len(),
        });
    }
    weights
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            Weight::new(value).ok_or(SelectionError::InvalidWeight { index, value })
        })
        .collect()
}
