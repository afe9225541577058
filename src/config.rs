// ============================================================================
// Complex Configuration
// Tolerance and output precision shared by operators and host functions
// ============================================================================

use crate::codec::text::{LEGACY_DIGITS, ROUND_TRIP_DIGITS};
use crate::numeric::{ComplexError, ComplexResult, Tolerance};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings that change how values are compared and printed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ComplexConfig {
    /// Comparator used by every relational and arithmetic operation
    pub tolerance: Tolerance,

    /// Significant digits per component in textual output (1-17).
    /// Anything below 17 may not parse back to the same bits.
    pub output_digits: usize,
}

impl ComplexConfig {
    /// Create a configuration with required parameters
    pub fn new(tolerance: Tolerance, output_digits: usize) -> Self {
        Self {
            tolerance,
            output_digits,
        }
    }

    /// Builder method: Set the comparison tolerance
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Builder method: Set textual output precision
    pub fn with_output_digits(mut self, digits: usize) -> Self {
        self.output_digits = digits;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> ComplexResult<()> {
        if !(1..=ROUND_TRIP_DIGITS).contains(&self.output_digits) {
            return Err(ComplexError::InvalidConfig(format!(
                "output digits must be between 1 and {}, got {}",
                ROUND_TRIP_DIGITS, self.output_digits
            )));
        }

        // Tolerance fields are private, but a deserialized one skips `Tolerance::new`
        let epsilon = self.tolerance.epsilon();
        if !epsilon.is_finite() || epsilon < 0.0 {
            return Err(ComplexError::InvalidConfig(format!(
                "epsilon must be finite and non-negative, got {epsilon}"
            )));
        }

        Ok(())
    }

    /// True when formatted output always parses back to identical bits.
    pub fn is_round_trip_safe(&self) -> bool {
        self.output_digits >= ROUND_TRIP_DIGITS
    }
}

impl Default for ComplexConfig {
    /// Epsilon 1e-6, 17 output digits
    fn default() -> Self {
        Self::new(Tolerance::default(), ROUND_TRIP_DIGITS)
    }
}

// ============================================================================
// Preset Configurations
// ============================================================================

impl ComplexConfig {
    /// Output as printed with `DBL_DIG` precision.
    /// - Epsilon 1e-6
    /// - 15 significant digits (short, not round-trip safe)
    pub fn legacy() -> Self {
        Self::new(Tolerance::default(), LEGACY_DIGITS)
    }

    /// Exact comparisons with round-trip output.
    pub fn exact() -> Self {
        Self::new(Tolerance::exact(), ROUND_TRIP_DIGITS)
    }
}

// ============================================================================
// JSON (serde feature)
// ============================================================================

#[cfg(feature = "serde")]
impl ComplexConfig {
    /// Load and validate a configuration from JSON.
    pub fn from_json(json: &str) -> ComplexResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ComplexError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> ComplexResult<String> {
        serde_json::to_string(self).map_err(|e| ComplexError::InvalidConfig(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ComplexConfig::default();
        assert_eq!(config.tolerance.epsilon(), 1.0e-6);
        assert_eq!(config.output_digits, 17);
        assert!(config.is_round_trip_safe());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ComplexConfig::default()
            .with_tolerance(Tolerance::new(1e-3).unwrap())
            .with_output_digits(10);

        assert_eq!(config.tolerance.epsilon(), 1e-3);
        assert_eq!(config.output_digits, 10);
        assert!(!config.is_round_trip_safe());
    }

    #[test]
    fn test_validation() {
        assert!(ComplexConfig::default()
            .with_output_digits(0)
            .validate()
            .is_err());
        assert!(ComplexConfig::default()
            .with_output_digits(18)
            .validate()
            .is_err());
    }

    #[test]
    fn test_preset_configs() {
        assert_eq!(ComplexConfig::legacy().output_digits, 15);
        assert_eq!(ComplexConfig::exact().tolerance, Tolerance::exact());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_json_round_trip() {
        let config = ComplexConfig::legacy();
        let json = config.to_json().unwrap();
        assert_eq!(ComplexConfig::from_json(&json).unwrap(), config);
        assert!(ComplexConfig::from_json(r#"{"tolerance":{"epsilon":-1.0},"output_digits":17}"#)
            .is_err());
    }
}
