// ============================================================================
// Operators Module
// Operator catalog and the suite that evaluates it
// ============================================================================

mod operator;
mod suite;

pub use operator::{Operator, ResultType};
pub use suite::{OperatorOutput, OperatorSuite};
