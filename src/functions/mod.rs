// ============================================================================
// Functions Module
// Host-facing call surface: named entry points over Datum arguments
// ============================================================================

mod datum;
mod registry;
mod scalar_function;

pub use datum::Datum;
pub use registry::{FunctionRegistry, FunctionRegistryBuilder};
pub use scalar_function::ScalarFunction;
