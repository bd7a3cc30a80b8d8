//! Module descriptors
//!
//! A module is the unit of discovery: it carries every declaration the
//! catalog and the provider registry index when the module is scanned.

use std::fmt;
use std::sync::Arc;

use crate::entities::{
    CapabilityDescriptor, ProviderDeclaration, RoleBinding, RoleDescriptor, TypeDescriptor,
};
use crate::ports::AdapterFactory;
use crate::value_objects::TypeName;

/// Declarations contributed by one module
#[derive(Clone, Default)]
pub struct ModuleDescriptor {
    name: String,
    types: Vec<Arc<TypeDescriptor>>,
    capabilities: Vec<Arc<CapabilityDescriptor>>,
    roles: Vec<Arc<RoleDescriptor>>,
    role_bindings: Vec<RoleBinding>,
    providers: Vec<ProviderDeclaration>,
    roots: Vec<TypeName>,
    adapter_factories: Vec<Arc<dyn AdapterFactory>>,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_type(mut self, descriptor: TypeDescriptor) -> Self {
        self.types.push(Arc::new(descriptor));
        self
    }

    #[must_use]
    pub fn with_capability(mut self, descriptor: CapabilityDescriptor) -> Self {
        self.capabilities.push(Arc::new(descriptor));
        self
    }

    #[must_use]
    pub fn with_role(mut self, role: RoleDescriptor) -> Self {
        self.roles.push(Arc::new(role));
        self
    }

    /// Declare `adapter` as the `role` adapter of `adaptee`
    #[must_use]
    pub fn bind_role(mut self, adaptee: TypeName, role: impl Into<String>, adapter: TypeName) -> Self {
        self.role_bindings
            .push(RoleBinding::new(adaptee, role, adapter));
        self
    }

    #[must_use]
    pub fn with_provider(mut self, provider: ProviderDeclaration) -> Self {
        self.providers.push(provider);
        self
    }

    /// Declare a capability eligible for registry lookups
    #[must_use]
    pub fn with_root(mut self, root: TypeName) -> Self {
        self.roots.push(root);
        self
    }

    #[must_use]
    pub fn with_adapter_factory(mut self, factory: Arc<dyn AdapterFactory>) -> Self {
        self.adapter_factories.push(factory);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn types(&self) -> &[Arc<TypeDescriptor>] {
        &self.types
    }

    pub fn capabilities(&self) -> &[Arc<CapabilityDescriptor>] {
        &self.capabilities
    }

    pub fn roles(&self) -> &[Arc<RoleDescriptor>] {
        &self.roles
    }

    pub fn role_bindings(&self) -> &[RoleBinding] {
        &self.role_bindings
    }

    pub fn providers(&self) -> &[ProviderDeclaration] {
        &self.providers
    }

    pub fn roots(&self) -> &[TypeName] {
        &self.roots
    }

    pub fn adapter_factories(&self) -> &[Arc<dyn AdapterFactory>] {
        &self.adapter_factories
    }
}

impl fmt::Debug for ModuleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModuleDescriptor")
            .field("name", &self.name)
            .field("types", &self.types.len())
            .field("capabilities", &self.capabilities.len())
            .field("roles", &self.roles.len())
            .field("role_bindings", &self.role_bindings.len())
            .field("providers", &self.providers.len())
            .field("roots", &self.roots)
            .field("adapter_factories", &self.adapter_factories.len())
            .finish()
    }
}
