// ============================================================================
// Event Handler Interface
// Defines the contract for observing host function calls
// ============================================================================

use crate::numeric::ComplexError;

/// Events emitted by the function registry
#[derive(Debug, Clone, PartialEq)]
pub enum CallEvent {
    /// Function resolved and about to run
    Invoked {
        function: &'static str,
        arg_count: usize,
    },

    /// Function returned a value
    Completed { function: &'static str },

    /// Function or name lookup failed
    Failed { function: String, error: ComplexError },
}

/// Event handler trait for processing registry events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a call event
    fn on_event(&self, event: CallEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<CallEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CallEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CallEvent) {
        match &event {
            CallEvent::Failed { function, error } => {
                tracing::debug!(
                    function = %function,
                    sqlstate = error.sqlstate(),
                    %error,
                    "complex function failed"
                );
            }
            _ => tracing::trace!("complex function event: {:?}", event),
        }
    }
}
