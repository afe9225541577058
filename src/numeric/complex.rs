// ============================================================================
// Complex Value
// Immutable pair of doubles with negative-zero normalization
// ============================================================================

use super::errors::{ComplexError, ComplexResult};
use super::tolerance::Tolerance;
use std::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Complex number stored as real part `a` and imaginary part `b`.
///
/// Every constructor routes through [`Complex::new`], which replaces `-0.0`
/// with `0.0` in both components. Two values that differ only in the sign of
/// a zero are therefore bit-identical, format identically and encode
/// identically.
///
/// Non-finite components are accepted and carried through IEEE-754
/// arithmetic unchanged.
///
/// # Comparisons
/// `PartialEq` is exact. The tolerant predicates (`approx_eq`,
/// `is_strictly_left_of`, ...) take a [`Tolerance`] explicitly. The four
/// positional predicates treat the value as a 2-D point and compare a single
/// component each; they are not a lexicographic order on complex numbers.
///
/// # Example
/// ```
/// use pg_complex::numeric::{Complex, Tolerance};
///
/// let c = Complex::new(1.0, 2.0);
/// let d = Complex::new(3.0, 4.0);
/// assert_eq!(c + d, Complex::new(4.0, 6.0));
/// assert!(c.is_strictly_left_of(&d, &Tolerance::default()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(from = "ComplexParts", into = "ComplexParts")
)]
pub struct Complex {
    a: f64,
    b: f64,
}

#[inline]
fn positive_zero(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x
    }
}

impl Complex {
    /// Zero value
    pub const ZERO: Self = Self { a: 0.0, b: 0.0 };

    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a value from real and imaginary parts.
    ///
    /// A component that compares equal to zero is stored as `+0.0`.
    #[inline]
    pub fn new(re: f64, im: f64) -> Self {
        Self {
            a: positive_zero(re),
            b: positive_zero(im),
        }
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Real part.
    #[inline]
    pub const fn re(&self) -> f64 {
        self.a
    }

    /// Imaginary part.
    #[inline]
    pub const fn im(&self) -> f64 {
        self.b
    }

    /// Raw IEEE-754 bit patterns of both components.
    #[inline]
    pub fn to_bits(&self) -> (u64, u64) {
        (self.a.to_bits(), self.b.to_bits())
    }

    /// True when both components are within tolerance of zero.
    #[inline]
    pub fn is_zero(&self, tol: &Tolerance) -> bool {
        tol.is_zero(self.a) && tol.is_zero(self.b)
    }

    // ========================================================================
    // Unary Operations
    // ========================================================================

    /// `(a, -b)`
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self::new(self.a, -self.b)
    }

    // ========================================================================
    // Tolerant Predicates
    // ========================================================================

    /// Both components equal within tolerance.
    #[inline]
    pub fn approx_eq(&self, other: &Self, tol: &Tolerance) -> bool {
        tol.is_eq(self.a, other.a) && tol.is_eq(self.b, other.b)
    }

    #[inline]
    pub fn approx_ne(&self, other: &Self, tol: &Tolerance) -> bool {
        !self.approx_eq(other, tol)
    }

    /// Real part strictly less than `other`'s.
    #[inline]
    pub fn is_strictly_left_of(&self, other: &Self, tol: &Tolerance) -> bool {
        tol.is_lt(self.a, other.a)
    }

    /// Real part strictly greater than `other`'s.
    #[inline]
    pub fn is_strictly_right_of(&self, other: &Self, tol: &Tolerance) -> bool {
        tol.is_gt(self.a, other.a)
    }

    /// Imaginary part strictly less than `other`'s.
    #[inline]
    pub fn is_strictly_below(&self, other: &Self, tol: &Tolerance) -> bool {
        tol.is_lt(self.b, other.b)
    }

    /// Imaginary part strictly greater than `other`'s.
    #[inline]
    pub fn is_strictly_above(&self, other: &Self, tol: &Tolerance) -> bool {
        tol.is_gt(self.b, other.b)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Complex division.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if both components of `rhs` are
    /// tolerance-zero, even when the exact denominator would be non-zero.
    pub fn checked_div(&self, rhs: &Self, tol: &Tolerance) -> ComplexResult<Self> {
        if rhs.is_zero(tol) {
            return Err(ComplexError::DivisionByZero);
        }
        let den = rhs.a * rhs.a + rhs.b * rhs.b;
        Ok(Self::new(
            (self.a * rhs.a + self.b * rhs.b) / den,
            (self.b * rhs.a - self.a * rhs.b) / den,
        ))
    }

    /// Euclidean distance between the two values seen as points.
    ///
    /// Scales by the larger difference instead of squaring both, so it does
    /// not overflow or underflow for extreme magnitudes.
    pub fn distance(&self, other: &Self, tol: &Tolerance) -> f64 {
        let mut x = (self.a - other.a).abs();
        let mut y = (self.b - other.b).abs();
        if x < y {
            std::mem::swap(&mut x, &mut y);
        }
        if tol.is_zero(y) {
            return x;
        }
        let yx = y / x;
        x * (1.0 + yx * yx).sqrt()
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Complex {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<(f64, f64)> for Complex {
    #[inline]
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl From<Complex> for (f64, f64) {
    #[inline]
    fn from(c: Complex) -> Self {
        (c.a, c.b)
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.a + rhs.a, self.b + rhs.b)
    }
}

impl Sub for Complex {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.a - rhs.a, self.b - rhs.b)
    }
}

/// Componentwise product `(a1 * a2, b1 * b2)`.
///
/// This is NOT the complex product `(ac - bd, ad + bc)`. It matches the `*`
/// operator stored values were produced with, so existing results keep their
/// meaning.
impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self::new(self.a * rhs.a, self.b * rhs.b)
    }
}

// ============================================================================
// Serde Representation
// ============================================================================

#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct ComplexParts {
    re: f64,
    im: f64,
}

#[cfg(feature = "serde")]
impl From<ComplexParts> for Complex {
    fn from(p: ComplexParts) -> Self {
        Complex::new(p.re, p.im)
    }
}

#[cfg(feature = "serde")]
impl From<Complex> for ComplexParts {
    fn from(c: Complex) -> Self {
        ComplexParts { re: c.a, im: c.b }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tol() -> Tolerance {
        Tolerance::default()
    }

    #[test]
    fn test_negative_zero_normalized() {
        let neg = Complex::new(-0.0, -0.0);
        let pos = Complex::new(0.0, 0.0);
        assert_eq!(neg.to_bits(), pos.to_bits());
        assert!(neg.re().is_sign_positive());
        assert!(neg.im().is_sign_positive());
    }

    #[test]
    fn test_accessors() {
        let c = Complex::new(1.5, -2.5);
        assert_eq!(c.re(), 1.5);
        assert_eq!(c.im(), -2.5);
        assert_eq!(<(f64, f64)>::from(c), (1.5, -2.5));
        assert_eq!(Complex::from((1.5, -2.5)), c);
        assert_eq!(Complex::default(), Complex::ZERO);
    }

    #[test]
    fn test_non_finite_passes_through() {
        let c = Complex::new(f64::INFINITY, f64::NAN);
        assert!(c.re().is_infinite());
        assert!(c.im().is_nan());
    }

    #[test]
    fn test_conjugate() {
        assert_eq!(Complex::new(5.0, -3.0).conjugate(), Complex::new(5.0, 3.0));
        // Conjugate of a zero imaginary part stays +0.0
        let c = Complex::new(2.0, 0.0).conjugate();
        assert!(c.im().is_sign_positive());
    }

    #[test]
    fn test_add_sub() {
        let c = Complex::new(1.0, 2.0);
        let d = Complex::new(3.0, 4.0);
        assert_eq!(c + d, Complex::new(4.0, 6.0));
        assert_eq!((c + d) - d, c);
        assert_eq!(d - c, Complex::new(2.0, 2.0));
    }

    #[test]
    fn test_sub_self_is_positive_zero() {
        let c = Complex::new(-1.25, 7.0);
        assert_eq!((c - c).to_bits(), Complex::ZERO.to_bits());
    }

    #[test]
    fn test_mul_is_componentwise() {
        let c = Complex::new(1.0, 2.0);
        let d = Complex::new(3.0, 4.0);
        // Standard complex product would be (-5, 10)
        assert_eq!(c * d, Complex::new(3.0, 8.0));
    }

    #[test]
    fn test_div() {
        let c = Complex::new(1.0, 2.0);
        let d = Complex::new(3.0, 4.0);
        let q = c.checked_div(&d, &tol()).unwrap();
        // (1*3 + 2*4)/25, (2*3 - 1*4)/25
        assert!(q.approx_eq(&Complex::new(0.44, 0.08), &tol()));
    }

    #[test]
    fn test_div_by_zero() {
        let c = Complex::new(1.0, 1.0);
        assert_eq!(
            c.checked_div(&Complex::ZERO, &tol()),
            Err(ComplexError::DivisionByZero)
        );
        assert_eq!(
            c.checked_div(&Complex::new(1e-7, 1e-7), &tol()),
            Err(ComplexError::DivisionByZero)
        );
        // One component outside the window is enough
        assert!(c.checked_div(&Complex::new(1e-7, 1.0), &tol()).is_ok());
    }

    #[test]
    fn test_div_exact_tolerance_accepts_tiny_divisor() {
        let c = Complex::new(1.0, 0.0);
        let q = c
            .checked_div(&Complex::new(1e-7, 0.0), &Tolerance::exact())
            .unwrap();
        assert!((q.re() - 1e7).abs() < 1e-3);
    }

    #[test]
    fn test_approx_eq() {
        let c = Complex::new(1.0, 1.0);
        assert!(c.approx_eq(&Complex::new(1.0 + 0.9e-6, 1.0 - 0.9e-6), &tol()));
        assert!(c.approx_ne(&Complex::new(1.0, 1.0 + 1.1e-6), &tol()));
    }

    #[test]
    fn test_positional_predicates() {
        let c = Complex::new(1.0, 5.0);
        let d = Complex::new(2.0, -5.0);
        assert!(c.is_strictly_left_of(&d, &tol()));
        assert!(!c.is_strictly_right_of(&d, &tol()));
        assert!(d.is_strictly_below(&c, &tol()));
        assert!(c.is_strictly_above(&d, &tol()));
        // Predicates look at one component only
        assert!(!c.is_strictly_below(&Complex::new(-100.0, 5.0), &tol()));
    }

    #[test]
    fn test_distance() {
        let d = Complex::ZERO.distance(&Complex::new(3.0, 4.0), &tol());
        assert!((d - 5.0).abs() <= 1e-6);

        let c = Complex::new(-7.5, 2.25);
        assert_eq!(c.distance(&c, &tol()), 0.0);
    }

    #[test]
    fn test_distance_axis_aligned() {
        let d = Complex::new(1.0, 2.0).distance(&Complex::new(1.0, -8.0), &tol());
        assert_eq!(d, 10.0);
    }

    #[test]
    fn test_distance_extreme_magnitudes() {
        let big = Complex::new(1e300, 1e300);
        let d = big.distance(&Complex::ZERO, &tol());
        assert!(d.is_finite());
        assert!((d / 1e300 - std::f64::consts::SQRT_2).abs() < 1e-12);

        let small = Complex::new(3e-200, 4e-200);
        let d = small.distance(&Complex::ZERO, &Tolerance::exact());
        assert!((d / 5e-200 - 1.0).abs() < 1e-12);
    }
}
