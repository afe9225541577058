// ============================================================================
// Datum
// Argument and return values exchanged with the host
// ============================================================================

use crate::numeric::{Complex, ComplexError, ComplexResult};

/// A single argument or return value of a host function call.
#[derive(Debug, Clone, PartialEq)]
pub enum Datum {
    Complex(Complex),
    Float8(f64),
    Bool(bool),
    /// Text, used for input/output and the text casts
    Text(String),
    /// Raw bytes, used for binary send/receive
    Bytea(Vec<u8>),
}

impl Datum {
    /// Host-facing type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Datum::Complex(_) => "complex",
            Datum::Float8(_) => "float8",
            Datum::Bool(_) => "bool",
            Datum::Text(_) => "text",
            Datum::Bytea(_) => "bytea",
        }
    }

    pub(crate) fn as_complex(&self, function: &'static str) -> ComplexResult<Complex> {
        match self {
            Datum::Complex(c) => Ok(*c),
            other => Err(mismatch(function, "complex", other)),
        }
    }

    pub(crate) fn as_float8(&self, function: &'static str) -> ComplexResult<f64> {
        match self {
            Datum::Float8(v) => Ok(*v),
            other => Err(mismatch(function, "float8", other)),
        }
    }

    pub(crate) fn as_text(&self, function: &'static str) -> ComplexResult<&str> {
        match self {
            Datum::Text(s) => Ok(s.as_str()),
            other => Err(mismatch(function, "text", other)),
        }
    }

    pub(crate) fn as_bytea(&self, function: &'static str) -> ComplexResult<&[u8]> {
        match self {
            Datum::Bytea(b) => Ok(b.as_slice()),
            other => Err(mismatch(function, "bytea", other)),
        }
    }
}

fn mismatch(function: &'static str, expected: &str, got: &Datum) -> ComplexError {
    ComplexError::ArgumentMismatch {
        function,
        detail: format!("expected {expected}, got {}", got.type_name()),
    }
}

impl From<Complex> for Datum {
    fn from(c: Complex) -> Self {
        Datum::Complex(c)
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self {
        Datum::Float8(v)
    }
}

impl From<bool> for Datum {
    fn from(v: bool) -> Self {
        Datum::Bool(v)
    }
}

impl From<String> for Datum {
    fn from(s: String) -> Self {
        Datum::Text(s)
    }
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::Text(s.to_string())
    }
}
