//! Post-activation hooks
//!
//! Hook discovery for a concrete type is done once and cached by the
//! engine; this module holds the always-present property hook runner and
//! the shared failure policy.

use std::sync::Arc;

use activa_domain::entities::Component;
use activa_domain::error::{Error, Result};
use activa_domain::ports::{
    ActivationContext, ActivationProvider, ExceptionHandler, ServiceDirectory, ServiceDirectoryExt,
};

/// Hooks discovered for one concrete type, in application order
pub type HookChain = Arc<[Arc<dyn ActivationProvider>]>;

/// Built-in hook running every property-level hook
///
/// Each declared property runs each hook that applies to it once. Failures
/// follow the same policy as type-level hooks.
#[derive(Debug, Default, Clone, Copy)]
pub struct PropertyHooks;

impl ActivationProvider for PropertyHooks {
    fn name(&self) -> &str {
        "property-hooks"
    }

    fn activate(
        &self,
        component: &mut dyn Component,
        context: &ActivationContext<'_>,
    ) -> Result<()> {
        let handler = exception_handler(context.services());
        for property in context.descriptor().properties() {
            for hook in property.hooks() {
                if !hook.applies_to(property) {
                    continue;
                }
                if let Err(error) = hook.activate_property(component, property, context) {
                    handle_failure(handler.as_deref(), hook.name(), error)?;
                }
            }
        }
        Ok(())
    }
}

/// Apply `hooks` in order under the hook failure policy
pub(crate) fn run_hooks(
    hooks: &[Arc<dyn ActivationProvider>],
    component: &mut dyn Component,
    context: &ActivationContext<'_>,
) -> Result<()> {
    let handler = exception_handler(context.services());
    for hook in hooks {
        if let Err(error) = hook.activate(component, context) {
            handle_failure(handler.as_deref(), hook.name(), error)?;
        }
    }
    Ok(())
}

fn exception_handler(services: Option<&dyn ServiceDirectory>) -> Option<Arc<dyn ExceptionHandler>> {
    services?.service::<dyn ExceptionHandler>()
}

/// Hand a hook failure to the handler, or rethrow it when there is none
fn handle_failure(handler: Option<&dyn ExceptionHandler>, hook: &str, error: Error) -> Result<()> {
    let error = match error {
        wrapped @ Error::ActivationProvider { .. } => wrapped,
        other => Error::activation_provider(hook, other),
    };
    match handler {
        Some(handler) => {
            handler.handle(hook, &error);
            Ok(())
        }
        None => Err(error),
    }
}
