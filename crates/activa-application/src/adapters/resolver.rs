//! Adapter resolution
//!
//! Candidate adapter types for (adaptee, role) are collected in a fixed
//! order and filtered through the role's validity rules:
//!
//! 1. adapters the adaptee type declares for the role
//! 2. the naming convention `{AdapteeLocalName}{Role}` in the adaptee's namespace
//! 3. module-level role bindings, in module registration order
//!
//! When no candidate survives, module-registered adapter factories are
//! consulted and the first answer wins.

use std::sync::Arc;

use activa_domain::entities::{Object, RoleDescriptor};
use activa_domain::error::{Error, Result};
use activa_domain::value_objects::{ProxyFallback, TypeName, ValueBag};

use crate::activation::{ActivationEngine, ActivationOptions};
use crate::catalog::TypeCatalog;

/// Resolves role adapters for types and objects
pub struct AdapterResolver {
    catalog: Arc<TypeCatalog>,
}

impl AdapterResolver {
    pub fn new(catalog: Arc<TypeCatalog>) -> Self {
        Self { catalog }
    }

    /// Role by name; empty names are invalid and unknown names an error
    pub fn role(&self, role: &str) -> Result<Arc<RoleDescriptor>> {
        let role = role.trim();
        if role.is_empty() {
            return Err(Error::invalid_argument("role name cannot be empty"));
        }
        self.catalog
            .role(role)
            .ok_or_else(|| Error::unknown_role(role))
    }

    /// Every valid adapter type for `adaptee` in `role`, in resolution order
    pub fn get_adapter_types(&self, adaptee: &TypeName, role: &str) -> Result<Vec<TypeName>> {
        let role = self.role(role)?;
        let role_name = role.name();

        let mut candidates: Vec<TypeName> = Vec::new();
        if let Some(descriptor) = self.catalog.resolve_type(adaptee) {
            candidates.extend(descriptor.adapters_for(role_name).cloned());
        }
        candidates.push(adaptee.with_suffix(role_name));
        candidates.extend(self.catalog.bound_adapters(adaptee, role_name));

        let mut accepted: Vec<TypeName> = Vec::new();
        for candidate in candidates {
            let Some(descriptor) = self.catalog.resolve_type(&candidate) else {
                continue;
            };
            if accepted.contains(descriptor.name()) || !role.accepts(&descriptor) {
                continue;
            }
            accepted.push(descriptor.name().clone());
        }
        Ok(accepted)
    }

    /// Best adapter type for `adaptee` in `role`, if any
    pub fn get_adapter_type(&self, adaptee: &TypeName, role: &str) -> Result<Option<TypeName>> {
        if let Some(first) = self.get_adapter_types(adaptee, role)?.into_iter().next() {
            return Ok(Some(first));
        }
        let role = self.role(role)?;
        let Some(descriptor) = self.catalog.resolve_type(adaptee) else {
            return Ok(None);
        };
        Ok(self
            .catalog
            .adapter_factories()
            .iter()
            .find_map(|factory| factory.get_adapter_type(&descriptor, role.name())))
    }

    /// Adapter instance for `adaptee` in `role`
    ///
    /// In order: the adaptee itself when it already implements the role's
    /// capability, an activated adapter type (the adaptee bound as
    /// positional argument `0`), a factory-made instance, and finally a
    /// proxy over the adaptee when the role names a capability.
    pub fn get_adapter(
        &self,
        engine: &ActivationEngine,
        adaptee: &Object,
        role: &str,
    ) -> Result<Option<Object>> {
        let role = self.role(role)?;
        if let Some(capability) = role.capability()
            && self.catalog.satisfies(adaptee, capability)
        {
            return Ok(Some(adaptee.clone()));
        }

        if let Some(adapter) = self.get_adapter_type(adaptee.type_name(), role.name())? {
            let mut values = ValueBag::positional([adaptee.clone()]);
            let instance = engine.create_instance(&adapter, &mut values, &ActivationOptions::default())?;
            return Ok(Some(instance));
        }

        if let Some(instance) = self
            .catalog
            .adapter_factories()
            .iter()
            .find_map(|factory| factory.get_adapter(adaptee, role.name()))
        {
            return Ok(Some(instance));
        }

        match role.capability() {
            Some(capability) if self.catalog.capability(capability).is_some() => engine
                .proxies()
                .implement(adaptee, capability, ProxyFallback::None),
            _ => Ok(None),
        }
    }
}

impl std::fmt::Debug for AdapterResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdapterResolver").finish_non_exhaustive()
    }
}
