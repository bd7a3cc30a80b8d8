//! Per-call activation options

use std::fmt;
use std::sync::Arc;

use activa_domain::ports::{PopulationCallback, ServiceDirectory};
use activa_domain::value_objects::ActivationAttributes;

/// Collaborators and markers for one activation call
///
/// ```
/// use activa_application::activation::ActivationOptions;
/// use activa_domain::value_objects::ActivationAttributes;
///
/// let options = ActivationOptions::new().with_attributes(ActivationAttributes::REUSABLE);
/// assert!(options.services().is_none());
/// assert!(options.attributes().contains(ActivationAttributes::REUSABLE));
/// ```
#[derive(Clone, Default)]
pub struct ActivationOptions {
    callback: Option<Arc<dyn PopulationCallback>>,
    services: Option<Arc<dyn ServiceDirectory>>,
    attributes: ActivationAttributes,
}

impl ActivationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive property population failures
    #[must_use]
    pub fn with_callback(mut self, callback: Arc<dyn PopulationCallback>) -> Self {
        self.callback = Some(callback);
        self
    }

    /// Resolve unsupplied collaborators from `services`
    #[must_use]
    pub fn with_services(mut self, services: Arc<dyn ServiceDirectory>) -> Self {
        self.services = Some(services);
        self
    }

    /// Advisory markers; recorded but not enforced
    #[must_use]
    pub fn with_attributes(mut self, attributes: ActivationAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn callback(&self) -> Option<&Arc<dyn PopulationCallback>> {
        self.callback.as_ref()
    }

    pub fn services(&self) -> Option<&Arc<dyn ServiceDirectory>> {
        self.services.as_ref()
    }

    pub fn attributes(&self) -> ActivationAttributes {
        self.attributes
    }
}

impl fmt::Debug for ActivationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivationOptions")
            .field("has_callback", &self.callback.is_some())
            .field("has_services", &self.services.is_some())
            .field("attributes", &self.attributes)
            .finish()
    }
}
