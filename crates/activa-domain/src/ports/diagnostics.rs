//! Population Diagnostics Port

use crate::error::{Error, Result};
use crate::value_objects::{TypeName, Value};

/// Receives property population failures
///
/// Both methods default to ignoring the failure. Returning an error
/// escalates it and aborts the activation.
pub trait PopulationCallback: Send + Sync {
    /// No settable member named `key` exists on `component`
    fn on_missing(&self, component: &TypeName, key: &str, value: &Value) -> Result<()> {
        let _ = (component, key, value);
        Ok(())
    }

    /// Assigning `key` on `component` failed
    fn on_conversion_error(&self, component: &TypeName, key: &str, error: &Error) -> Result<()> {
        let _ = (component, key, error);
        Ok(())
    }
}
