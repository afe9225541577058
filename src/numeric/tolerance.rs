// ============================================================================
// Tolerance Comparator
// Epsilon-padded comparison of doubles
// ============================================================================

use super::errors::{ComplexError, ComplexResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Absolute tolerance used by every comparison unless configured otherwise.
pub const DEFAULT_EPSILON: f64 = 1.0e-6;

/// Approximate comparison of doubles within a fixed absolute epsilon.
///
/// Values closer than `epsilon` are simultaneously "equal", "not less" and
/// "not greater". The predicates therefore do not form a total order near the
/// boundary; `is_eq` is not transitive.
///
/// # Example
/// ```
/// use pg_complex::numeric::Tolerance;
///
/// let tol = Tolerance::default();
/// assert!(tol.is_eq(1.0, 1.0 + 0.9e-6));
/// assert!(tol.is_lt(1.0, 1.0 + 1.1e-6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    /// Create a comparator with the given epsilon.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if `epsilon` is negative, NaN or infinite.
    pub fn new(epsilon: f64) -> ComplexResult<Self> {
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ComplexError::InvalidConfig(format!(
                "epsilon must be finite and non-negative, got {epsilon}"
            )));
        }
        Ok(Self { epsilon })
    }

    /// Comparator with zero tolerance (plain IEEE comparisons).
    #[inline]
    pub const fn exact() -> Self {
        Self { epsilon: 0.0 }
    }

    #[inline]
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// `|a| <= epsilon`
    #[inline]
    pub fn is_zero(&self, a: f64) -> bool {
        a.abs() <= self.epsilon
    }

    /// `|a - b| <= epsilon`
    #[inline]
    pub fn is_eq(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.epsilon
    }

    /// `|a - b| > epsilon`
    #[inline]
    pub fn is_ne(&self, a: f64, b: f64) -> bool {
        (a - b).abs() > self.epsilon
    }

    /// `b - a > epsilon`
    #[inline]
    pub fn is_lt(&self, a: f64, b: f64) -> bool {
        b - a > self.epsilon
    }

    /// `a - b <= epsilon`
    #[inline]
    pub fn is_le(&self, a: f64, b: f64) -> bool {
        a - b <= self.epsilon
    }

    /// `a - b > epsilon`
    #[inline]
    pub fn is_gt(&self, a: f64, b: f64) -> bool {
        a - b > self.epsilon
    }

    /// `b - a <= epsilon`
    #[inline]
    pub fn is_ge(&self, a: f64, b: f64) -> bool {
        b - a <= self.epsilon
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
        }
    }
}
