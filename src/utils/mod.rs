// ============================================================================
// Utilities Module
// Process-level helpers that sit outside the value type itself
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::{init_logging, DEFAULT_FILTER};
