//! Post-Activation Hook Ports
//!
//! Hooks run after construction and property population. Type-level hooks
//! see the whole component; property-level hooks run once per declared
//! property they apply to.

use std::fmt;

use crate::constants::{ACTIVATION_PROVIDER_CAPABILITY, CORE_NAMESPACE, EXCEPTION_HANDLER_CAPABILITY};
use crate::entities::{Capability, Component, PropertyDescriptor, TypeDescriptor};
use crate::error::{Error, Result};
use crate::ports::ServiceDirectory;
use crate::value_objects::TypeName;

/// What a hook can see about the activation in progress
#[derive(Clone, Copy)]
pub struct ActivationContext<'a> {
    descriptor: &'a TypeDescriptor,
    services: Option<&'a dyn ServiceDirectory>,
}

impl<'a> ActivationContext<'a> {
    pub fn new(descriptor: &'a TypeDescriptor, services: Option<&'a dyn ServiceDirectory>) -> Self {
        Self {
            descriptor,
            services,
        }
    }

    /// Descriptor of the concrete type being activated
    pub fn descriptor(&self) -> &'a TypeDescriptor {
        self.descriptor
    }

    /// Effective service directory of the activation
    pub fn services(&self) -> Option<&'a dyn ServiceDirectory> {
        self.services
    }
}

impl fmt::Debug for ActivationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivationContext")
            .field("type", self.descriptor.name())
            .field("has_services", &self.services.is_some())
            .finish()
    }
}

/// Post-activation hook
pub trait ActivationProvider: Send + Sync {
    /// Name reported to exception handlers and logs
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Inspect or mutate the freshly activated component
    fn activate(&self, component: &mut dyn Component, context: &ActivationContext<'_>)
    -> Result<()>;
}

impl Capability for dyn ActivationProvider {
    fn capability_name() -> TypeName {
        TypeName::new(CORE_NAMESPACE, ACTIVATION_PROVIDER_CAPABILITY)
    }
}

/// Property-level post-activation hook
pub trait PropertyActivationProvider: Send + Sync {
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Whether the hook runs for `property`
    fn applies_to(&self, property: &PropertyDescriptor) -> bool {
        let _ = property;
        true
    }

    fn activate_property(
        &self,
        component: &mut dyn Component,
        property: &PropertyDescriptor,
        context: &ActivationContext<'_>,
    ) -> Result<()>;
}

/// Receives hook failures; processing of the remaining hooks continues
pub trait ExceptionHandler: Send + Sync {
    fn handle(&self, hook: &str, error: &Error);
}

impl Capability for dyn ExceptionHandler {
    fn capability_name() -> TypeName {
        TypeName::new(CORE_NAMESPACE, EXCEPTION_HANDLER_CAPABILITY)
    }
}
