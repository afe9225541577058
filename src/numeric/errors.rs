// ============================================================================
// Complex Errors
// Error types for parsing, decoding and arithmetic on complex values
// ============================================================================

use std::fmt;
use thiserror::Error;

/// Grammar position at which textual parsing stopped.
///
/// The parser never backtracks, so exactly one of these is reported per
/// failed input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxErrorKind {
    /// Input did not start with `(`
    MissingOpenParen,
    /// Real component is not a valid double
    InvalidReal,
    /// No `,` after the real component
    MissingComma,
    /// Imaginary component is not a valid double
    InvalidImaginary,
    /// No `)` after the imaginary component
    MissingCloseParen,
    /// Non-whitespace characters after the closing `)`
    TrailingCharacters,
}

impl SyntaxErrorKind {
    /// Name of the type whose grammar was violated.
    ///
    /// Malformed numbers report `double`; every delimiter problem reports
    /// `complex`.
    pub const fn type_name(self) -> &'static str {
        match self {
            SyntaxErrorKind::InvalidReal | SyntaxErrorKind::InvalidImaginary => "double",
            _ => "complex",
        }
    }
}

impl fmt::Display for SyntaxErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SyntaxErrorKind::MissingOpenParen => "expected \"(\"",
            SyntaxErrorKind::InvalidReal => "malformed real part",
            SyntaxErrorKind::MissingComma => "expected \",\"",
            SyntaxErrorKind::InvalidImaginary => "malformed imaginary part",
            SyntaxErrorKind::MissingCloseParen => "expected \")\"",
            SyntaxErrorKind::TrailingCharacters => "unexpected characters after \")\"",
        };
        f.write_str(text)
    }
}

/// Errors that can occur while building, decoding or combining complex values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComplexError {
    /// Textual input does not match `(real, imaginary)`
    #[error("invalid input syntax for type {}: {kind} at offset {offset}", .kind.type_name())]
    Syntax {
        /// Which token failed
        kind: SyntaxErrorKind,
        /// Byte offset into the input where the failure was detected
        offset: usize,
    },

    /// Divisor has both components tolerance-zero
    #[error("division by zero: can only divide by a non-zero complex number")]
    DivisionByZero,

    /// Binary message ended before a full value was read
    #[error("insufficient data left in message: needed {needed} bytes, {available} available")]
    InsufficientData { needed: usize, available: usize },

    /// Binary payload is not exactly one encoded value
    #[error("invalid binary representation for type complex: {0}")]
    InvalidBinary(String),

    /// Host call received arguments of the wrong count or type
    #[error("argument mismatch in {function}: {detail}")]
    ArgumentMismatch {
        function: &'static str,
        detail: String,
    },

    /// No function or operator is registered under this name
    #[error("unknown function or operator: {0}")]
    UnknownOperator(String),

    /// Configuration value out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ComplexError {
    pub(crate) fn syntax(kind: SyntaxErrorKind, offset: usize) -> Self {
        ComplexError::Syntax { kind, offset }
    }

    /// SQLSTATE code a host should report for this error.
    pub fn sqlstate(&self) -> &'static str {
        match self {
            ComplexError::Syntax { .. } => "22P02",
            ComplexError::DivisionByZero | ComplexError::InvalidConfig(_) => "22023",
            ComplexError::InsufficientData { .. } => "08P01",
            ComplexError::InvalidBinary(_) => "22P03",
            ComplexError::ArgumentMismatch { .. } | ComplexError::UnknownOperator(_) => "42883",
        }
    }

    /// The syntax error kind, if this is a parse failure.
    pub fn syntax_kind(&self) -> Option<SyntaxErrorKind> {
        match self {
            ComplexError::Syntax { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

/// Result type alias for complex operations
pub type ComplexResult<T> = Result<T, ComplexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ComplexError::syntax(SyntaxErrorKind::MissingComma, 3).to_string(),
            "invalid input syntax for type complex: expected \",\" at offset 3"
        );
        assert_eq!(
            ComplexError::syntax(SyntaxErrorKind::InvalidReal, 1).to_string(),
            "invalid input syntax for type double: malformed real part at offset 1"
        );
        assert_eq!(
            ComplexError::DivisionByZero.to_string(),
            "division by zero: can only divide by a non-zero complex number"
        );
    }

    #[test]
    fn test_type_name_distinguishes_tokens() {
        assert_eq!(SyntaxErrorKind::InvalidImaginary.type_name(), "double");
        assert_eq!(SyntaxErrorKind::MissingOpenParen.type_name(), "complex");
        assert_eq!(SyntaxErrorKind::TrailingCharacters.type_name(), "complex");
    }

    #[test]
    fn test_sqlstate() {
        assert_eq!(
            ComplexError::syntax(SyntaxErrorKind::MissingCloseParen, 4).sqlstate(),
            "22P02"
        );
        assert_eq!(ComplexError::DivisionByZero.sqlstate(), "22023");
        assert_eq!(
            ComplexError::InvalidBinary("1 trailing bytes".to_string()).sqlstate(),
            "22P03"
        );
        assert_eq!(
            ComplexError::InsufficientData {
                needed: 8,
                available: 3
            }
            .sqlstate(),
            "08P01"
        );
    }

    #[test]
    fn test_syntax_kind() {
        let err = ComplexError::syntax(SyntaxErrorKind::TrailingCharacters, 5);
        assert_eq!(err.syntax_kind(), Some(SyntaxErrorKind::TrailingCharacters));
        assert_eq!(ComplexError::DivisionByZero.syntax_kind(), None);
    }
}
