// ============================================================================
// Function Registry
// Name-based dispatch of host calls with event reporting
// ============================================================================

use super::datum::Datum;
use super::scalar_function::ScalarFunction;
use crate::config::ComplexConfig;
use crate::interfaces::{CallEvent, EventHandler, NoOpEventHandler};
use crate::numeric::{ComplexResult, Tolerance};
use crate::operators::OperatorSuite;
use std::sync::Arc;

/// Resolves host function names and runs them against one operator suite.
///
/// Holds no mutable state; concurrent calls through a shared registry need
/// no locking.
pub struct FunctionRegistry {
    suite: OperatorSuite,
    event_handler: Arc<dyn EventHandler>,
}

impl FunctionRegistry {
    /// Create a registry over `suite`
    pub fn new(suite: OperatorSuite, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            suite,
            event_handler,
        }
    }

    #[inline]
    pub fn suite(&self) -> &OperatorSuite {
        &self.suite
    }

    /// Names of every registered function.
    pub fn function_names(&self) -> Vec<&'static str> {
        ScalarFunction::all().map(ScalarFunction::name).collect()
    }

    /// Call the function registered as `name`.
    pub fn invoke(&self, name: &str, args: &[Datum]) -> ComplexResult<Datum> {
        let function = match ScalarFunction::from_name(name) {
            Ok(f) => f,
            Err(error) => {
                self.event_handler.on_event(CallEvent::Failed {
                    function: name.to_string(),
                    error: error.clone(),
                });
                return Err(error);
            }
        };
        self.call(function, args)
    }

    /// Call an already resolved function.
    pub fn call(&self, function: ScalarFunction, args: &[Datum]) -> ComplexResult<Datum> {
        self.event_handler.on_event(CallEvent::Invoked {
            function: function.name(),
            arg_count: args.len(),
        });

        match function.call(&self.suite, args) {
            Ok(datum) => {
                self.event_handler.on_event(CallEvent::Completed {
                    function: function.name(),
                });
                Ok(datum)
            }
            Err(error) => {
                self.event_handler.on_event(CallEvent::Failed {
                    function: function.name().to_string(),
                    error: error.clone(),
                });
                Err(error)
            }
        }
    }
}

impl Default for FunctionRegistry {
    fn default() -> Self {
        Self::new(OperatorSuite::default(), Arc::new(NoOpEventHandler))
    }
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating registries with fluent API
///
/// # Example
/// ```
/// use pg_complex::prelude::*;
/// use std::sync::Arc;
///
/// let registry = FunctionRegistryBuilder::new()
///     .with_output_digits(15)
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
/// let out = registry
///     .invoke("complex_out", &[Datum::Complex(Complex::new(0.1, 0.2))])
///     .unwrap();
/// assert_eq!(out, Datum::Text("(0.1, 0.2)".to_string()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct FunctionRegistryBuilder {
    config: ComplexConfig,
}

impl FunctionRegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration
    pub fn from_config(config: ComplexConfig) -> Self {
        Self { config }
    }

    /// Set comparison tolerance
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.config.tolerance = tolerance;
        self
    }

    /// Set textual output precision
    pub fn with_output_digits(mut self, digits: usize) -> Self {
        self.config.output_digits = digits;
        self
    }

    /// Validate the configuration and build the registry
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> ComplexResult<FunctionRegistry> {
        let suite = OperatorSuite::new(self.config)?;
        Ok(FunctionRegistry::new(suite, event_handler))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Complex, ComplexError};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingHandler {
        events: Mutex<Vec<CallEvent>>,
    }

    impl EventHandler for RecordingHandler {
        fn on_event(&self, event: CallEvent) {
            if let Ok(mut events) = self.events.lock() {
                events.push(event);
            }
        }
    }

    #[test]
    fn test_invoke_reports_events() {
        let handler = Arc::new(RecordingHandler::default());
        let registry = FunctionRegistry::new(OperatorSuite::default(), handler.clone());

        let out = registry
            .invoke(
                "complex_dist",
                &[
                    Datum::Complex(Complex::ZERO),
                    Datum::Complex(Complex::new(3.0, 4.0)),
                ],
            )
            .unwrap();
        assert!(matches!(out, Datum::Float8(d) if (d - 5.0).abs() <= 1e-6));

        let events = handler.events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                CallEvent::Invoked {
                    function: "complex_dist",
                    arg_count: 2
                },
                CallEvent::Completed {
                    function: "complex_dist"
                },
            ]
        );
    }

    #[test]
    fn test_invoke_reports_failures() {
        let handler = Arc::new(RecordingHandler::default());
        let registry = FunctionRegistry::new(OperatorSuite::default(), handler.clone());

        assert!(registry.invoke("complex_sqrt", &[]).is_err());
        assert!(registry.invoke("complex_in", &["1,2)".into()]).is_err());

        let events = handler.events.lock().unwrap();
        assert!(matches!(
            &events[0],
            CallEvent::Failed { function, error: ComplexError::UnknownOperator(_) }
                if function == "complex_sqrt"
        ));
        assert!(matches!(
            events.last(),
            Some(CallEvent::Failed {
                error: ComplexError::Syntax { .. },
                ..
            })
        ));
    }

    #[test]
    fn test_builder_validates() {
        assert!(FunctionRegistryBuilder::new()
            .with_output_digits(40)
            .build(Arc::new(NoOpEventHandler))
            .is_err());

        let registry = FunctionRegistryBuilder::from_config(ComplexConfig::exact())
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert_eq!(registry.suite().tolerance(), &Tolerance::exact());
    }

    #[test]
    fn test_function_names() {
        let registry = FunctionRegistry::default();
        let names = registry.function_names();
        assert!(names.contains(&"complex_in"));
        assert!(names.contains(&"complex_dist"));
        assert_eq!(names.len(), 21);
    }
}
