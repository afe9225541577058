// ============================================================================
// Complex Type Library
// Complex number scalar type for a host data-management system
// ============================================================================

//! # pg-complex
//!
//! A complex number value type with the encodings and operators a database
//! host needs to expose it as a scalar type.
//!
//! ## Features
//!
//! - **Negative-zero normalization** at construction, so `-0.0` and `0.0`
//!   are indistinguishable everywhere
//! - **Tolerant comparison** with an explicit, substitutable epsilon
//!   (default `1e-6`)
//! - **Canonical text form** `(a, b)` that round-trips bit-exactly
//! - **16-byte big-endian binary form** for wire transfer
//! - **Operators**: equality, positional predicates, arithmetic, conjugate
//!   and distance
//! - **Host call surface**: one named function per registered entry point
//!
//! ## Example
//!
//! ```rust
//! use pg_complex::prelude::*;
//!
//! let ops = OperatorSuite::default();
//!
//! let c: Complex = "(1, 2)".parse().unwrap();
//! let d = Complex::new(3.0, 4.0);
//!
//! assert_eq!((c + d).to_string(), "(4, 6)");
//! assert!(ops.strictly_left_of(&c, &d));
//! assert!(ops.div(&c, &Complex::ZERO).is_err());
//!
//! let bytes = encode(&d);
//! assert_eq!(decode(&bytes), d);
//! ```

pub mod codec;
pub mod config;
pub mod functions;
pub mod interfaces;
pub mod numeric;
pub mod operators;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::codec::{decode, encode, format, parse};
    pub use crate::config::ComplexConfig;
    pub use crate::functions::{Datum, FunctionRegistry, FunctionRegistryBuilder, ScalarFunction};
    pub use crate::interfaces::{CallEvent, EventHandler, LoggingEventHandler, NoOpEventHandler};
    pub use crate::numeric::{Complex, ComplexError, ComplexResult, SyntaxErrorKind, Tolerance};
    pub use crate::operators::{Operator, OperatorOutput, OperatorSuite};
}
