// ============================================================================
// Operator Suite
// Call surface over complex values bound to one configuration
// ============================================================================

use super::operator::Operator;
use crate::codec::{binary, text, ENCODED_LEN};
use crate::config::ComplexConfig;
use crate::numeric::{Complex, ComplexError, ComplexResult, Tolerance};

/// Value produced by an operator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperatorOutput {
    Complex(Complex),
    Bool(bool),
    Float8(f64),
}

/// Every operation on the complex type, bound to a tolerance and output
/// precision.
///
/// Stateless apart from its configuration, so one suite can be shared
/// freely across threads.
///
/// # Example
/// ```
/// use pg_complex::operators::OperatorSuite;
///
/// let ops = OperatorSuite::default();
/// let c = ops.parse("(1, 1)").unwrap();
/// let d = ops.make(0.0, 0.0);
/// assert!(ops.div(&c, &d).is_err());
/// assert_eq!(ops.format(&ops.conjugate(&c)), "(1, -1)");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OperatorSuite {
    config: ComplexConfig,
}

impl OperatorSuite {
    /// Create a suite from a validated configuration.
    pub fn new(config: ComplexConfig) -> ComplexResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Default configuration with a substituted tolerance.
    pub fn with_tolerance(tolerance: Tolerance) -> Self {
        Self {
            config: ComplexConfig::default().with_tolerance(tolerance),
        }
    }

    #[inline]
    pub fn config(&self) -> &ComplexConfig {
        &self.config
    }

    #[inline]
    pub fn tolerance(&self) -> &Tolerance {
        &self.config.tolerance
    }

    // ========================================================================
    // Construction and Codecs
    // ========================================================================

    #[inline]
    pub fn make(&self, re: f64, im: f64) -> Complex {
        Complex::new(re, im)
    }

    pub fn parse(&self, input: &str) -> ComplexResult<Complex> {
        text::parse(input)
    }

    /// Canonical text with the configured number of digits.
    pub fn format(&self, c: &Complex) -> String {
        text::format_with_digits(c, self.config.output_digits)
    }

    #[inline]
    pub fn encode(&self, c: &Complex) -> [u8; ENCODED_LEN] {
        binary::encode(c)
    }

    #[inline]
    pub fn decode(&self, bytes: &[u8; ENCODED_LEN]) -> Complex {
        binary::decode(bytes)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn re(&self, c: &Complex) -> f64 {
        c.re()
    }

    #[inline]
    pub fn im(&self, c: &Complex) -> f64 {
        c.im()
    }

    #[inline]
    pub fn conjugate(&self, c: &Complex) -> Complex {
        c.conjugate()
    }

    // ========================================================================
    // Predicates
    // ========================================================================

    pub fn equal(&self, c: &Complex, d: &Complex) -> bool {
        c.approx_eq(d, self.tolerance())
    }

    pub fn not_equal(&self, c: &Complex, d: &Complex) -> bool {
        c.approx_ne(d, self.tolerance())
    }

    pub fn strictly_left_of(&self, c: &Complex, d: &Complex) -> bool {
        c.is_strictly_left_of(d, self.tolerance())
    }

    pub fn strictly_right_of(&self, c: &Complex, d: &Complex) -> bool {
        c.is_strictly_right_of(d, self.tolerance())
    }

    pub fn strictly_below(&self, c: &Complex, d: &Complex) -> bool {
        c.is_strictly_below(d, self.tolerance())
    }

    pub fn strictly_above(&self, c: &Complex, d: &Complex) -> bool {
        c.is_strictly_above(d, self.tolerance())
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    #[inline]
    pub fn add(&self, c: &Complex, d: &Complex) -> Complex {
        *c + *d
    }

    #[inline]
    pub fn sub(&self, c: &Complex, d: &Complex) -> Complex {
        *c - *d
    }

    /// Componentwise product, see [`Complex`]'s `Mul` impl.
    #[inline]
    pub fn mul(&self, c: &Complex, d: &Complex) -> Complex {
        *c * *d
    }

    pub fn div(&self, c: &Complex, d: &Complex) -> ComplexResult<Complex> {
        c.checked_div(d, self.tolerance()).inspect_err(|err| {
            tracing::debug!(dividend = %c, divisor = %d, %err, "complex division rejected");
        })
    }

    pub fn distance(&self, c: &Complex, d: &Complex) -> f64 {
        c.distance(d, self.tolerance())
    }

    // ========================================================================
    // Dispatch
    // ========================================================================

    /// Apply `op` to `args`.
    ///
    /// # Errors
    /// - `ArgumentMismatch` if `args.len()` differs from the operator's arity
    /// - `DivisionByZero` from `/`
    pub fn evaluate(&self, op: Operator, args: &[Complex]) -> ComplexResult<OperatorOutput> {
        tracing::trace!(operator = %op, ?args, "evaluating complex operator");

        if args.len() != op.arity() {
            return Err(ComplexError::ArgumentMismatch {
                function: op.procedure(),
                detail: format!("expected {} arguments, got {}", op.arity(), args.len()),
            });
        }

        let c = &args[0];
        if let Operator::Conjugate = op {
            return Ok(OperatorOutput::Complex(self.conjugate(c)));
        }
        let d = &args[1];

        let output = match op {
            Operator::Equal => OperatorOutput::Bool(self.equal(c, d)),
            Operator::NotEqual => OperatorOutput::Bool(self.not_equal(c, d)),
            Operator::StrictlyLeft => OperatorOutput::Bool(self.strictly_left_of(c, d)),
            Operator::StrictlyRight => OperatorOutput::Bool(self.strictly_right_of(c, d)),
            Operator::StrictlyBelow => OperatorOutput::Bool(self.strictly_below(c, d)),
            Operator::StrictlyAbove => OperatorOutput::Bool(self.strictly_above(c, d)),
            Operator::Add => OperatorOutput::Complex(self.add(c, d)),
            Operator::Sub => OperatorOutput::Complex(self.sub(c, d)),
            Operator::Mul => OperatorOutput::Complex(self.mul(c, d)),
            Operator::Div => OperatorOutput::Complex(self.div(c, d)?),
            Operator::Distance => OperatorOutput::Float8(self.distance(c, d)),
            Operator::Conjugate => OperatorOutput::Complex(self.conjugate(c)),
        };
        Ok(output)
    }

    /// Look up `symbol` and apply it to `args`.
    pub fn evaluate_symbol(&self, symbol: &str, args: &[Complex]) -> ComplexResult<OperatorOutput> {
        self.evaluate(Operator::from_symbol(symbol)?, args)
    }
}
