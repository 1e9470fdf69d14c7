/// Strategy turning score magnitudes into sampling weights.
///
/// Implementations must be pure: no randomness, no state, identical output
/// for identical input. The returned vector must hold one weight per input
/// magnitude; the caller rejects anything else.
pub trait WeightTransform {
    fn weights(&self, magnitudes: &[f64]) -> Vec<f64>;
}

/// Identity passthrough: a candidate's weight is its score magnitude.
#[derive(Clone, Copy, Debug, Default)]
pub struct Linear;

impl WeightTransform for Linear {
    fn weights(&self, magnitudes: &[f64]) -> Vec<f64> {
        magnitudes.to_vec()
    }
}

/// Exponential reshaping: `w = e^(bias * magnitude)`.
///
/// A larger bias sharpens discrimination toward the highest-scoring
/// candidates; a bias of zero flattens the distribution to uniform.
#[derive(Clone, Copy, Debug)]
pub struct Exponential {
    pub bias: f64,
}

impl Exponential {
    pub fn new(bias: f64) -> Self {
        Self { bias }
    }
}

impl Default for Exponential {
    fn default() -> Self {
        Self { bias: 1.0 }
    }
}

impl WeightTransform for Exponential {
    fn weights(&self, magnitudes: &[f64]) -> Vec<f64> {
        magnitudes
            .iter()
            .map(|magnitude| (self.bias * magnitude).exp())
            .collect()
    }
}
