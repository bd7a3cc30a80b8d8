//! Tracing-backed failure handlers
//!
//! Hosts register [`TracingExceptionHandler`] in their service catalog to
//! keep failing hooks from aborting activations, and pass
//! [`TracingPopulationCallback`] to surface ignored property values.

use activa_domain::error::{Error, Result};
use activa_domain::ports::{ExceptionHandler, PopulationCallback};
use activa_domain::value_objects::{TypeName, Value};
use tracing::warn;

/// Logs hook failures and lets the remaining hooks run
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingExceptionHandler;

impl ExceptionHandler for TracingExceptionHandler {
    fn handle(&self, hook: &str, error: &Error) {
        warn!(hook = hook, error = %error, "Activation hook failed");
    }
}

/// Logs population failures; in strict mode they abort the activation
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPopulationCallback {
    strict: bool,
}

impl TracingPopulationCallback {
    pub fn new(strict: bool) -> Self {
        Self { strict }
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}

impl PopulationCallback for TracingPopulationCallback {
    fn on_missing(&self, component: &TypeName, key: &str, value: &Value) -> Result<()> {
        if self.strict {
            return Err(Error::invalid_argument(format!(
                "{component} has no settable member '{key}'"
            )));
        }
        warn!(component = %component, key = key, value = ?value, "Ignoring unknown member");
        Ok(())
    }

    fn on_conversion_error(&self, component: &TypeName, key: &str, error: &Error) -> Result<()> {
        if self.strict {
            return Err(Error::conversion(key, error.to_string()));
        }
        warn!(component = %component, key = key, error = %error, "Ignoring failed assignment");
        Ok(())
    }
}
