// ============================================================================
// Operator Catalog
// Symbols, backing functions and planner metadata for each operator
// ============================================================================

use crate::numeric::{ComplexError, ComplexResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operators exposed on the complex type.
///
/// The four positional operators (`<<`, `>>`, `<<|`, `|>>`) compare one
/// component each, treating values as 2-D points. They are not a total
/// order: `c << d` and `c >> d` can both be false for unequal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    /// `=` both components equal within tolerance
    Equal,
    /// `<>` negation of `=`
    NotEqual,
    /// `<<` real part strictly less
    StrictlyLeft,
    /// `>>` real part strictly greater
    StrictlyRight,
    /// `<<|` imaginary part strictly less
    StrictlyBelow,
    /// `|>>` imaginary part strictly greater
    StrictlyAbove,
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*` componentwise product
    Mul,
    /// `/` complex quotient
    Div,
    /// `<->` Euclidean distance
    Distance,
    /// `~` conjugate (prefix)
    Conjugate,
}

/// Kind of value an operator produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultType {
    Complex,
    Bool,
    Float8,
}

impl Operator {
    /// Every operator, in catalog order.
    pub const ALL: [Operator; 12] = [
        Operator::Equal,
        Operator::NotEqual,
        Operator::StrictlyLeft,
        Operator::StrictlyRight,
        Operator::StrictlyBelow,
        Operator::StrictlyAbove,
        Operator::Add,
        Operator::Sub,
        Operator::Mul,
        Operator::Div,
        Operator::Distance,
        Operator::Conjugate,
    ];

    pub const fn symbol(self) -> &'static str {
        match self {
            Operator::Equal => "=",
            Operator::NotEqual => "<>",
            Operator::StrictlyLeft => "<<",
            Operator::StrictlyRight => ">>",
            Operator::StrictlyBelow => "<<|",
            Operator::StrictlyAbove => "|>>",
            Operator::Add => "+",
            Operator::Sub => "-",
            Operator::Mul => "*",
            Operator::Div => "/",
            Operator::Distance => "<->",
            Operator::Conjugate => "~",
        }
    }

    /// Look up an operator by its symbol.
    ///
    /// # Errors
    /// Returns `UnknownOperator` for any other string.
    pub fn from_symbol(symbol: &str) -> ComplexResult<Self> {
        Self::ALL
            .into_iter()
            .find(|op| op.symbol() == symbol)
            .ok_or_else(|| ComplexError::UnknownOperator(symbol.to_string()))
    }

    /// Name of the host function implementing this operator.
    pub const fn procedure(self) -> &'static str {
        match self {
            Operator::Equal => "complex_eq",
            Operator::NotEqual => "complex_ne",
            Operator::StrictlyLeft => "complex_left",
            Operator::StrictlyRight => "complex_right",
            Operator::StrictlyBelow => "complex_below",
            Operator::StrictlyAbove => "complex_above",
            Operator::Add => "complex_add",
            Operator::Sub => "complex_sub",
            Operator::Mul => "complex_mult",
            Operator::Div => "complex_div",
            Operator::Distance => "complex_dist",
            Operator::Conjugate => "complex_conj",
        }
    }

    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            Operator::Conjugate => 1,
            _ => 2,
        }
    }

    pub const fn result_type(self) -> ResultType {
        match self {
            Operator::Equal
            | Operator::NotEqual
            | Operator::StrictlyLeft
            | Operator::StrictlyRight
            | Operator::StrictlyBelow
            | Operator::StrictlyAbove => ResultType::Bool,
            Operator::Distance => ResultType::Float8,
            Operator::Add
            | Operator::Sub
            | Operator::Mul
            | Operator::Div
            | Operator::Conjugate => ResultType::Complex,
        }
    }

    /// Operator `op'` such that `a op b == b op' a`.
    pub const fn commutator(self) -> Option<Operator> {
        match self {
            Operator::Equal => Some(Operator::Equal),
            Operator::NotEqual => Some(Operator::NotEqual),
            Operator::StrictlyLeft => Some(Operator::StrictlyRight),
            Operator::StrictlyRight => Some(Operator::StrictlyLeft),
            Operator::StrictlyBelow => Some(Operator::StrictlyAbove),
            Operator::StrictlyAbove => Some(Operator::StrictlyBelow),
            Operator::Add => Some(Operator::Add),
            Operator::Mul => Some(Operator::Mul),
            Operator::Distance => Some(Operator::Distance),
            Operator::Sub | Operator::Div | Operator::Conjugate => None,
        }
    }

    /// Operator returning the boolean negation of this one.
    ///
    /// Only `=` and `<>` have one; `<<` is not the negation of `>>` because
    /// of the tolerance window.
    pub const fn negator(self) -> Option<Operator> {
        match self {
            Operator::Equal => Some(Operator::NotEqual),
            Operator::NotEqual => Some(Operator::Equal),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

impl std::str::FromStr for Operator {
    type Err = ComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}
