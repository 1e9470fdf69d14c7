use ordered_float::NotNan;

/// A non-negative, finite f64 sampling weight.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Weight(NotNan<f64>);

impl Weight {
    pub const ZERO: Self = Self(unsafe { NotNan::new_unchecked(0.0) });

    pub fn new(value: f64) -> Option<Self> {
        if value.is_infinite() {
            return None;
        }
        let value = NotNan::new(value).ok()?;
        if value.is_sign_negative() {
            return None;
        }
        Some(Self(value))
    }

    pub fn as_f64(&self) -> f64 {
        self.0.into_inner()
    }

    pub fn is_zero(&self) -> bool {
        self == &Self::ZERO
    }
}

impl std::fmt::Debug for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[track_caller]
pub fn assert_within(value: f64, expected: f64, tolerance: f64) {
    let diff = (value - expected).abs();
    assert!(
        diff <= tolerance,
        "Expected value of {expected} +- {tolerance} but got {value} which is off by {diff}",
    );
}
