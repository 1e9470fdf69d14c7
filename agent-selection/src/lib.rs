#[cfg(test)]
mod test;

use fitness_selection::{select_scored, Exponential, Linear, SelectionError, WeightTransform};
use rand::Rng;
use thiserror::Error;

/// A resolved script value. The selection actions never inspect content;
/// values are opaque and matter only by position.
#[derive(Clone, Debug, PartialEq)]
pub enum ScriptValue {
    Bool(bool),
    Num(f64),
    Text(String),
}

impl From<bool> for ScriptValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for ScriptValue {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<&str> for ScriptValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("bias must be numeric, got {0:?}")]
    NonNumericBias(ScriptValue),
}

/// Fitness-proportionate selection over resolved script values: picks one
/// value with probability proportional to its score. Scores are taken by
/// absolute value.
pub fn linear_selection(
    values: &[ScriptValue],
    scores: &[f64],
) -> Result<ScriptValue, ActionError> {
    selection_with(&mut rand::thread_rng(), values, scores, &Linear)
}

/// Fitness-proportionate selection with exponentially reshaped scores. The
/// first extra argument is the bias and defaults to 1; larger biases favor
/// the highest-scoring values more sharply.
pub fn exponential_selection(
    values: &[ScriptValue],
    scores: &[f64],
    args: &[ScriptValue],
) -> Result<ScriptValue, ActionError> {
    let transform = Exponential::new(bias(args)?);
    selection_with(&mut rand::thread_rng(), values, scores, &transform)
}

/// Selection with a caller-supplied generator. The wrappers above draw from
/// the calling thread's generator, so concurrently executing scripts never
/// contend on shared generator state.
pub fn selection_with<R, W>(
    rng: &mut R,
    values: &[ScriptValue],
    scores: &[f64],
    transform: &W,
) -> Result<ScriptValue, ActionError>
where
    R: Rng,
    W: WeightTransform + ?Sized,
{
    let selected = select_scored(rng, values, scores, transform)?;
    Ok(selected.clone())
}

fn bias(args: &[ScriptValue]) -> Result<f64, ActionError> {
    match args.first() {
        None => Ok(1.0),
        Some(ScriptValue::Num(bias)) => Ok(*bias),
        Some(other) => Err(ActionError::NonNumericBias(other.clone())),
    }
}
