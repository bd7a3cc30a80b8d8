//! Type catalog
//!
//! Resolves type, capability and role names against everything the
//! registered modules declare. Exact names win; a case-insensitive match is
//! accepted only when it is unique.

use std::any::TypeId;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use activa_domain::constants::{ACTIVATION_PROVIDER_ROLE, BUILDER_ROLE, STREAMING_SOURCE_ROLE};
use activa_domain::entities::{
    Capability, CapabilityDescriptor, Component, MemberSignature, ModuleDescriptor, Object,
    RoleBinding, RoleDescriptor, TypeDescriptor,
};
use activa_domain::error::{Error, Result};
use activa_domain::ports::{ActivationProvider, AdapterFactory, ExceptionHandler};
use activa_domain::value_objects::TypeName;

use super::{LazyIndex, ModuleIndex, ModuleSet};

#[derive(Clone)]
struct CatalogIndex {
    types: Vec<Arc<TypeDescriptor>>,
    by_name: HashMap<TypeName, usize>,
    by_key: HashMap<(String, String), Vec<usize>>,
    by_type_id: HashMap<TypeId, usize>,
    capabilities: HashMap<TypeName, Arc<CapabilityDescriptor>>,
    capability_keys: HashMap<(String, String), Vec<TypeName>>,
    roles: HashMap<String, Arc<RoleDescriptor>>,
    role_bindings: Vec<RoleBinding>,
    adapter_factories: Vec<Arc<dyn AdapterFactory>>,
}

impl Default for CatalogIndex {
    fn default() -> Self {
        let mut index = Self {
            types: Vec::new(),
            by_name: HashMap::new(),
            by_key: HashMap::new(),
            by_type_id: HashMap::new(),
            capabilities: HashMap::new(),
            capability_keys: HashMap::new(),
            roles: HashMap::new(),
            role_bindings: Vec::new(),
            adapter_factories: Vec::new(),
        };
        index.add_capability(Arc::new(CapabilityDescriptor::of::<dyn ActivationProvider>()));
        index.add_capability(Arc::new(CapabilityDescriptor::of::<dyn ExceptionHandler>()));
        index.add_role(Arc::new(RoleDescriptor::new(BUILDER_ROLE)));
        index.add_role(Arc::new(RoleDescriptor::new(STREAMING_SOURCE_ROLE)));
        index.add_role(Arc::new(
            RoleDescriptor::new(ACTIVATION_PROVIDER_ROLE)
                .with_capability(<dyn ActivationProvider as Capability>::capability_name()),
        ));
        index
    }
}

impl CatalogIndex {
    fn add_type(&mut self, descriptor: Arc<TypeDescriptor>) {
        if self.by_name.contains_key(descriptor.name()) {
            return;
        }
        let position = self.types.len();
        self.by_name.insert(descriptor.name().clone(), position);
        self.by_key
            .entry(descriptor.name().lookup_key())
            .or_default()
            .push(position);
        if let Some(id) = descriptor.rust_type_id() {
            self.by_type_id.entry(id).or_insert(position);
        }
        self.types.push(descriptor);
    }

    fn add_capability(&mut self, descriptor: Arc<CapabilityDescriptor>) {
        if self.capabilities.contains_key(descriptor.name()) {
            return;
        }
        self.capability_keys
            .entry(descriptor.name().lookup_key())
            .or_default()
            .push(descriptor.name().clone());
        self.capabilities
            .insert(descriptor.name().clone(), descriptor);
    }

    fn add_role(&mut self, role: Arc<RoleDescriptor>) {
        self.roles
            .entry(role.name().to_ascii_lowercase())
            .or_insert(role);
    }

    fn resolve(&self, name: &TypeName) -> Option<&Arc<TypeDescriptor>> {
        if let Some(&position) = self.by_name.get(name) {
            return self.types.get(position);
        }
        match self.by_key.get(&name.lookup_key())?.as_slice() {
            [position] => self.types.get(*position),
            _ => None,
        }
    }

    fn capability(&self, name: &TypeName) -> Option<&Arc<CapabilityDescriptor>> {
        if let Some(descriptor) = self.capabilities.get(name) {
            return Some(descriptor);
        }
        match self.capability_keys.get(&name.lookup_key())?.as_slice() {
            [exact] => self.capabilities.get(exact),
            _ => None,
        }
    }
}

impl ModuleIndex for CatalogIndex {
    fn index_module(&mut self, module: &ModuleDescriptor) {
        for descriptor in module.types() {
            self.add_type(Arc::clone(descriptor));
        }
        for descriptor in module.capabilities() {
            self.add_capability(Arc::clone(descriptor));
        }
        for role in module.roles() {
            self.add_role(Arc::clone(role));
        }
        self.role_bindings
            .extend(module.role_bindings().iter().cloned());
        self.adapter_factories
            .extend(module.adapter_factories().iter().cloned());
    }
}

/// Name resolution over the module set
pub struct TypeCatalog {
    index: LazyIndex<CatalogIndex>,
}

impl TypeCatalog {
    pub fn new(modules: Arc<ModuleSet>) -> Self {
        Self {
            index: LazyIndex::new(modules),
        }
    }

    pub fn modules(&self) -> &Arc<ModuleSet> {
        self.index.modules()
    }

    /// Index pending modules now instead of on the next lookup
    pub fn sync(&self) {
        self.index.sync();
    }

    /// Descriptor for `name`; `None` if unknown or ambiguous
    pub fn resolve_type(&self, name: &TypeName) -> Option<Arc<TypeDescriptor>> {
        self.index.load().resolve(name).cloned()
    }

    /// Descriptor for `name`, or a not-found error
    pub fn require_type(&self, name: &TypeName) -> Result<Arc<TypeDescriptor>> {
        self.resolve_type(name)
            .ok_or_else(|| Error::not_found(format!("type {name}")))
    }

    /// Descriptor registered for Rust type `T`
    pub fn descriptor_for<T: Component>(&self) -> Option<Arc<TypeDescriptor>> {
        let index = self.index.load();
        let position = *index.by_type_id.get(&TypeId::of::<T>())?;
        index.types.get(position).cloned()
    }

    /// Pair a typed value with its registered descriptor
    pub fn wrap<T: Component>(&self, value: T) -> Result<Object> {
        let descriptor = self.descriptor_for::<T>().ok_or_else(|| {
            Error::not_found(format!("descriptor for {}", std::any::type_name::<T>()))
        })?;
        Object::wrap(descriptor, value)
    }

    /// All registered types, in registration order
    pub fn types(&self) -> Vec<Arc<TypeDescriptor>> {
        self.index.load().types.clone()
    }

    pub fn capability(&self, name: &TypeName) -> Option<Arc<CapabilityDescriptor>> {
        self.index.load().capability(name).cloned()
    }

    /// `name` followed by its transitive base capabilities, breadth first
    pub fn capability_lineage(&self, name: &TypeName) -> Vec<TypeName> {
        let index = self.index.load();
        let mut lineage = Vec::new();
        let mut seen = HashSet::new();
        let mut queue = VecDeque::from([name.clone()]);
        while let Some(next) = queue.pop_front() {
            let canonical = index
                .capability(&next)
                .map_or_else(|| next.clone(), |c| c.name().clone());
            if !seen.insert(canonical.clone()) {
                continue;
            }
            if let Some(descriptor) = index.capability(&canonical) {
                queue.extend(descriptor.bases().iter().cloned());
            }
            lineage.push(canonical);
        }
        lineage
    }

    /// Whether `capability` is `ancestor` or inherits from it
    pub fn capability_reaches(&self, capability: &TypeName, ancestor: &TypeName) -> bool {
        self.capability_lineage(capability)
            .iter()
            .any(|name| name.matches(ancestor))
    }

    /// Whether values of `descriptor` can stand in for `target`
    ///
    /// Extends [`TypeDescriptor::is_assignable_to`] with capability
    /// inheritance: implementing a capability also satisfies its bases.
    pub fn is_assignable(&self, descriptor: &TypeDescriptor, target: &TypeName) -> bool {
        descriptor.is_assignable_to(target)
            || descriptor
                .implemented_capabilities()
                .any(|capability| self.capability_reaches(capability, target))
    }

    /// Whether `object` is, derives from, or implements `target` directly or through inheritance
    pub fn satisfies(&self, object: &Object, target: &TypeName) -> bool {
        self.is_assignable(object.descriptor(), target)
    }

    /// Members of a capability including inherited ones; `None` if unknown
    pub fn capability_members(&self, name: &TypeName) -> Option<Vec<MemberSignature>> {
        self.capability(name)?;
        let index = self.index.load();
        let mut members: Vec<MemberSignature> = Vec::new();
        for capability in self.capability_lineage(name) {
            let Some(descriptor) = index.capability(&capability) else {
                continue;
            };
            for member in descriptor.members() {
                if !members.contains(member) {
                    members.push(member.clone());
                }
            }
        }
        Some(members)
    }

    /// Role by name, ignoring case
    pub fn role(&self, name: &str) -> Option<Arc<RoleDescriptor>> {
        self.index
            .load()
            .roles
            .get(&name.to_ascii_lowercase())
            .cloned()
    }

    /// Module-level adapters bound to `adaptee` for `role`, in module order
    pub fn bound_adapters(&self, adaptee: &TypeName, role: &str) -> Vec<TypeName> {
        self.index
            .load()
            .role_bindings
            .iter()
            .filter(|b| b.adaptee().matches(adaptee) && b.role().eq_ignore_ascii_case(role))
            .map(|b| b.adapter().clone())
            .collect()
    }

    /// Module-registered adapter factories, in module order
    pub fn adapter_factories(&self) -> Vec<Arc<dyn AdapterFactory>> {
        self.index.load().adapter_factories.clone()
    }
}

impl std::fmt::Debug for TypeCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeCatalog")
            .field("index", &self.index)
            .finish()
    }
}
