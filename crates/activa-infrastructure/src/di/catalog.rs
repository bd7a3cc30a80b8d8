//! Service Catalog - Capability-Keyed Service Directory
//!
//! Immutable map from capability name to a shared object, built once at
//! composition time and handed to activations as their
//! [`ServiceDirectory`].
//!
//! ```text
//! ServiceCatalogBuilder::add(object)      → one entry per implemented capability
//! ServiceCatalogBuilder::bind(cap, obj)   → explicit entry
//!                      ↓
//!             ServiceCatalog::get_service(cap)
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use activa_domain::entities::{Capability, Object};
use activa_domain::ports::ServiceDirectory;
use activa_domain::value_objects::TypeName;
use tracing::trace;

/// Capability-keyed service directory
#[derive(Clone, Default)]
pub struct ServiceCatalog {
    services: Arc<BTreeMap<TypeName, Object>>,
}

impl ServiceCatalog {
    pub fn builder() -> ServiceCatalogBuilder {
        ServiceCatalogBuilder::default()
    }

    /// Capabilities with a registered service, in name order
    pub fn capabilities(&self) -> impl Iterator<Item = &TypeName> {
        self.services.keys()
    }

    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}

impl ServiceDirectory for ServiceCatalog {
    fn get_service(&self, capability: &TypeName) -> Option<Object> {
        let service = self.services.get(capability).cloned();
        trace!(capability = %capability, found = service.is_some(), "Service lookup");
        service
    }
}

impl std::fmt::Debug for ServiceCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceCatalog")
            .field("capabilities", &self.services.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`ServiceCatalog`]; later registrations replace earlier ones
#[derive(Default)]
pub struct ServiceCatalogBuilder {
    services: BTreeMap<TypeName, Object>,
}

impl ServiceCatalogBuilder {
    /// Register `object` under every capability its type implements
    #[must_use]
    pub fn add(mut self, object: Object) -> Self {
        let capabilities: Vec<TypeName> = object
            .descriptor()
            .implemented_capabilities()
            .cloned()
            .collect();
        for capability in capabilities {
            self.services.insert(capability, object.clone());
        }
        self
    }

    /// Register `object` under `capability` only
    #[must_use]
    pub fn bind(mut self, capability: TypeName, object: Object) -> Self {
        self.services.insert(capability, object);
        self
    }

    /// Register `object` under capability `C`
    #[must_use]
    pub fn bind_as<C: Capability + ?Sized>(self, object: Object) -> Self {
        self.bind(C::capability_name(), object)
    }

    pub fn build(self) -> ServiceCatalog {
        ServiceCatalog {
            services: Arc::new(self.services),
        }
    }
}
