// ============================================================================
// Numeric Module
// Complex value type and the tolerance it is compared with
// ============================================================================
//
// This module provides:
// - Complex: immutable (real, imaginary) pair of f64
// - Tolerance: epsilon-padded comparison predicates
// - ComplexError: error kinds shared by the whole crate
//
// Design principles:
// - Negative zero is normalized at construction
// - Tolerance is passed explicitly, never read from global state
// - Fallible operations return Result (no panics)

mod complex;
mod errors;
mod tolerance;

pub use complex::Complex;
pub use errors::{ComplexError, ComplexResult, SyntaxErrorKind};
pub use tolerance::{Tolerance, DEFAULT_EPSILON};
