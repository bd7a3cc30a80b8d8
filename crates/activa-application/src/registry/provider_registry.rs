//! Provider registry
//!
//! Providers are indexed per module as modules are registered; which of
//! them are visible is decided at lookup time against the roots declared so
//! far, so a root declared by a later module also exposes earlier providers.

use std::sync::{Arc, Weak};

use activa_domain::entities::{ModuleDescriptor, Object, ProviderSource};
use activa_domain::error::{Error, Result};
use activa_domain::ports::ModuleObserver;
use activa_domain::value_objects::{TypeName, ValueBag};
use tracing::debug;

use super::{ProviderCriteria, ProviderInfo};
use crate::activation::{ActivationEngine, ActivationOptions};
use crate::catalog::{LazyIndex, ModuleIndex, TypeCatalog};

#[derive(Clone, Default)]
struct RegistryIndex {
    providers: Vec<ProviderInfo>,
    roots: Vec<TypeName>,
}

impl ModuleIndex for RegistryIndex {
    fn index_module(&mut self, module: &ModuleDescriptor) {
        for declaration in module.providers() {
            let order = self.providers.len();
            self.providers
                .push(ProviderInfo::new(declaration.clone(), module.name(), order));
        }
        for root in module.roots() {
            if !self.roots.contains(root) {
                self.roots.push(root.clone());
            }
        }
    }
}

struct Inner {
    index: LazyIndex<RegistryIndex>,
    catalog: Arc<TypeCatalog>,
    engine: Arc<ActivationEngine>,
}

/// Named providers of capability values, discovered from registered modules
#[derive(Clone)]
pub struct ProviderRegistry {
    inner: Arc<Inner>,
}

impl ProviderRegistry {
    pub fn new(engine: Arc<ActivationEngine>) -> Self {
        let catalog = Arc::clone(engine.catalog());
        Self {
            inner: Arc::new(Inner {
                index: LazyIndex::new(Arc::clone(catalog.modules())),
                catalog,
                engine,
            }),
        }
    }

    /// Index modules as soon as they are registered instead of on next lookup
    pub fn watch(&self) {
        self.inner.index.sync();
        self.inner
            .catalog
            .modules()
            .subscribe(Arc::new(RegistryWatcher {
                inner: Arc::downgrade(&self.inner),
            }));
    }

    /// Number of modules indexed so far, without scanning new ones
    pub fn indexed_modules(&self) -> usize {
        self.inner.index.peek().scanned()
    }

    /// Capabilities declared as registry roots, in declaration order
    pub fn root_types(&self) -> Vec<TypeName> {
        self.inner.index.load().roots.clone()
    }

    /// The provider named `name`; namespace exact, local name ignoring case
    pub fn get_provider(&self, capability: &TypeName, name: &TypeName) -> Result<Option<Object>> {
        match self.find_named(capability, &name.to_string(), |info| info.name().matches(name))? {
            Some(info) => self.materialize(&info).map(Some),
            None => Ok(None),
        }
    }

    /// The provider whose local name is `local`, in any namespace
    pub fn get_provider_by_local_name(
        &self,
        capability: &TypeName,
        local: &str,
    ) -> Result<Option<Object>> {
        match self.find_named(capability, local, |info| info.name().matches_local(local))? {
            Some(info) => self.materialize(&info).map(Some),
            None => Ok(None),
        }
    }

    /// One value per visible provider, in declaration order
    pub fn get_providers(&self, capability: &TypeName) -> Result<Vec<Object>> {
        self.get_provider_infos(capability)
            .iter()
            .map(|info| self.materialize(info))
            .collect()
    }

    /// Type the named provider materializes, when statically known
    pub fn get_provider_type(
        &self,
        capability: &TypeName,
        name: &TypeName,
    ) -> Result<Option<TypeName>> {
        Ok(self
            .get_provider_info(capability, name)?
            .and_then(|info| info.provider_type().cloned()))
    }

    pub fn get_provider_info(
        &self,
        capability: &TypeName,
        name: &TypeName,
    ) -> Result<Option<ProviderInfo>> {
        self.find_named(capability, &name.to_string(), |info| info.name().matches(name))
    }

    /// Visible providers of `capability`, in declaration order
    pub fn get_provider_infos(&self, capability: &TypeName) -> Vec<ProviderInfo> {
        let index = self.inner.index.load();
        index
            .providers
            .iter()
            .filter(|info| self.is_visible(&index.roots, info, capability))
            .cloned()
            .collect()
    }

    pub fn get_provider_names(&self, capability: &TypeName) -> Vec<TypeName> {
        self.get_provider_infos(capability)
            .into_iter()
            .map(|info| info.name().clone())
            .collect()
    }

    /// Name of the provider `instance` came from
    ///
    /// Field providers match by identity, type providers by the instance's
    /// type after following concrete redirects; method providers are never
    /// matched.
    pub fn get_provider_name(&self, capability: &TypeName, instance: &Object) -> Option<TypeName> {
        self.get_provider_infos(capability)
            .into_iter()
            .find(|info| self.produced(info, instance))
            .map(|info| info.name().clone())
    }

    fn produced(&self, info: &ProviderInfo, instance: &Object) -> bool {
        if info.declaration().is_value(instance) {
            return true;
        }
        match info.declaration().source() {
            ProviderSource::Type(type_name) => self
                .inner
                .engine
                .resolve_concrete(type_name)
                .is_ok_and(|descriptor| instance.type_name().matches(descriptor.name())),
            _ => false,
        }
    }

    /// Best provider for `criteria`; see [`ProviderCriteria::select`]
    pub fn find_provider(
        &self,
        capability: &TypeName,
        criteria: &ProviderCriteria,
    ) -> Result<Option<Object>> {
        match self.find_provider_info(capability, criteria) {
            Some(info) => self.materialize(&info).map(Some),
            None => Ok(None),
        }
    }

    pub fn find_provider_info(
        &self,
        capability: &TypeName,
        criteria: &ProviderCriteria,
    ) -> Option<ProviderInfo> {
        let candidates = self.get_provider_infos(capability);
        criteria.select(&candidates).cloned()
    }

    /// Providers declared by `module` for exactly `capability`, roots ignored
    pub fn raw_providers(&self, capability: &TypeName, module: &str) -> Vec<ProviderInfo> {
        self.inner
            .index
            .load()
            .providers
            .iter()
            .filter(|info| info.module() == module && info.capability().matches(capability))
            .cloned()
            .collect()
    }

    fn find_named<F>(&self, capability: &TypeName, name: &str, matches: F) -> Result<Option<ProviderInfo>>
    where
        F: Fn(&ProviderInfo) -> bool,
    {
        let mut found: Vec<ProviderInfo> = self
            .get_provider_infos(capability)
            .into_iter()
            .filter(|info| matches(info))
            .collect();
        match found.len() {
            0 => Ok(None),
            1 => Ok(found.pop()),
            _ => Err(Error::ambiguous_provider(
                name,
                found.iter().map(|info| info.name().to_string()).collect(),
            )),
        }
    }

    fn is_visible(&self, roots: &[TypeName], info: &ProviderInfo, capability: &TypeName) -> bool {
        let catalog = &self.inner.catalog;
        catalog.capability_reaches(info.capability(), capability)
            && roots
                .iter()
                .any(|root| catalog.capability_reaches(info.capability(), root))
    }

    fn materialize(&self, info: &ProviderInfo) -> Result<Object> {
        match info.declaration().source() {
            ProviderSource::Field(value) => Ok(value.clone()),
            ProviderSource::Method(factory) => factory(),
            ProviderSource::Type(type_name) => self.inner.engine.create_instance(
                type_name,
                &mut ValueBag::new(),
                &ActivationOptions::default(),
            ),
        }
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let index = self.inner.index.peek();
        f.debug_struct("ProviderRegistry")
            .field("providers", &index.providers.len())
            .field("roots", &index.roots)
            .finish()
    }
}

struct RegistryWatcher {
    inner: Weak<Inner>,
}

impl ModuleObserver for RegistryWatcher {
    fn on_module_registered(&self, module: &Arc<ModuleDescriptor>) {
        if let Some(inner) = self.inner.upgrade() {
            let snapshot = inner.index.sync();
            debug!(
                module = module.name(),
                providers = snapshot.providers.len(),
                "Provider registry indexed module"
            );
        }
    }
}
