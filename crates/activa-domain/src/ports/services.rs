//! Service Directory Port
//!
//! Answers "give me an instance implementing capability X". Directories are
//! composable (see the first-match chain in infrastructure) and made ambient
//! for nested activations through the application's service scope.

use std::sync::Arc;

use crate::entities::{Capability, Object};
use crate::value_objects::TypeName;

/// Pluggable "get collaborator by capability" resolver
pub trait ServiceDirectory: Send + Sync {
    /// Instance satisfying `capability`, if this directory has one
    fn get_service(&self, capability: &TypeName) -> Option<Object>;
}

/// Typed lookups over any [`ServiceDirectory`]
pub trait ServiceDirectoryExt {
    /// Service for capability `C`, cast to its trait object
    fn service<C: Capability + ?Sized>(&self) -> Option<Arc<C>>;
}

impl<D: ServiceDirectory + ?Sized> ServiceDirectoryExt for D {
    fn service<C: Capability + ?Sized>(&self) -> Option<Arc<C>> {
        self.get_service(&C::capability_name())?.cast::<C>()
    }
}

impl<D: ServiceDirectory + ?Sized> ServiceDirectory for Arc<D> {
    fn get_service(&self, capability: &TypeName) -> Option<Object> {
        (**self).get_service(capability)
    }
}
