// ============================================================================
// Scalar Functions
// One variant per entry point the host registers for the complex type
// ============================================================================

use super::datum::Datum;
use crate::codec::{binary, text};
use crate::numeric::{Complex, ComplexError, ComplexResult};
use crate::operators::{Operator, OperatorOutput, OperatorSuite};

/// Host-callable functions of the complex type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarFunction {
    /// `complex_in(text) -> complex`
    In,
    /// `complex_out(complex) -> text`
    Out,
    /// `complex_recv(bytea) -> complex`
    Recv,
    /// `complex_send(complex) -> bytea`
    Send,
    /// `complex_cast_from_text(text) -> complex`
    CastFromText,
    /// `complex_cast_to_text(complex) -> text`
    CastToText,
    /// `complex_constructor(float8, float8) -> complex`
    Constructor,
    /// `complex_re(complex) -> float8`
    Re,
    /// `complex_im(complex) -> float8`
    Im,
    /// Any function backing an operator
    Operator(Operator),
}

impl ScalarFunction {
    /// Every function, in registration order.
    pub fn all() -> impl Iterator<Item = ScalarFunction> {
        [
            ScalarFunction::In,
            ScalarFunction::Out,
            ScalarFunction::Recv,
            ScalarFunction::Send,
            ScalarFunction::CastFromText,
            ScalarFunction::CastToText,
            ScalarFunction::Constructor,
            ScalarFunction::Re,
            ScalarFunction::Im,
        ]
        .into_iter()
        .chain(Operator::ALL.into_iter().map(ScalarFunction::Operator))
    }

    pub fn name(self) -> &'static str {
        match self {
            ScalarFunction::In => "complex_in",
            ScalarFunction::Out => "complex_out",
            ScalarFunction::Recv => "complex_recv",
            ScalarFunction::Send => "complex_send",
            ScalarFunction::CastFromText => "complex_cast_from_text",
            ScalarFunction::CastToText => "complex_cast_to_text",
            ScalarFunction::Constructor => "complex_constructor",
            ScalarFunction::Re => "complex_re",
            ScalarFunction::Im => "complex_im",
            ScalarFunction::Operator(op) => op.procedure(),
        }
    }

    /// Look up a function by its registered name.
    pub fn from_name(name: &str) -> ComplexResult<Self> {
        Self::all()
            .find(|f| f.name() == name)
            .ok_or_else(|| ComplexError::UnknownOperator(name.to_string()))
    }

    pub fn arity(self) -> usize {
        match self {
            ScalarFunction::Constructor => 2,
            ScalarFunction::Operator(op) => op.arity(),
            _ => 1,
        }
    }

    /// Run the function on host-supplied arguments.
    ///
    /// # Errors
    /// - `ArgumentMismatch` for a wrong argument count or type
    /// - `Syntax` from the text input functions
    /// - `InsufficientData` from `complex_recv` on a short payload, and
    ///   `InvalidBinary` when bytes follow the value
    /// - `DivisionByZero` from `complex_div`
    pub fn call(self, suite: &OperatorSuite, args: &[Datum]) -> ComplexResult<Datum> {
        let name = self.name();
        if args.len() != self.arity() {
            return Err(ComplexError::ArgumentMismatch {
                function: name,
                detail: format!("expected {} arguments, got {}", self.arity(), args.len()),
            });
        }

        match self {
            ScalarFunction::In => Ok(Datum::Complex(suite.parse(args[0].as_text(name)?)?)),
            ScalarFunction::CastFromText => {
                Ok(Datum::Complex(text::cast_from_text(args[0].as_text(name)?)?))
            }
            ScalarFunction::Out | ScalarFunction::CastToText => {
                Ok(Datum::Text(suite.format(&args[0].as_complex(name)?)))
            }
            ScalarFunction::Recv => {
                let mut buf = args[0].as_bytea(name)?;
                let value = binary::recv(&mut buf)?;
                if !buf.is_empty() {
                    return Err(ComplexError::InvalidBinary(format!(
                        "{} trailing bytes after complex value",
                        buf.len()
                    )));
                }
                Ok(Datum::Complex(value))
            }
            ScalarFunction::Send => {
                let mut buf = Vec::with_capacity(binary::ENCODED_LEN);
                binary::send(&args[0].as_complex(name)?, &mut buf);
                Ok(Datum::Bytea(buf))
            }
            ScalarFunction::Constructor => Ok(Datum::Complex(
                suite.make(args[0].as_float8(name)?, args[1].as_float8(name)?),
            )),
            ScalarFunction::Re => Ok(Datum::Float8(suite.re(&args[0].as_complex(name)?))),
            ScalarFunction::Im => Ok(Datum::Float8(suite.im(&args[0].as_complex(name)?))),
            ScalarFunction::Operator(op) => {
                let values = args
                    .iter()
                    .map(|d| d.as_complex(name))
                    .collect::<ComplexResult<Vec<Complex>>>()?;
                suite.evaluate(op, &values).map(Datum::from)
            }
        }
    }
}

impl From<OperatorOutput> for Datum {
    fn from(output: OperatorOutput) -> Self {
        match output {
            OperatorOutput::Complex(c) => Datum::Complex(c),
            OperatorOutput::Bool(b) => Datum::Bool(b),
            OperatorOutput::Float8(v) => Datum::Float8(v),
        }
    }
}
