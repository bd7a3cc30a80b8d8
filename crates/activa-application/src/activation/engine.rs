//! Activation engine
//!
//! Construct-then-initialize pipeline:
//!
//! 1. resolve the concrete type (following concrete redirects)
//! 2. select the constructor (explicit marker, else first declared)
//! 3. bind arguments from the value bag, then the service directory
//! 4. invoke; a null result means no usable constructor
//! 5. populate properties from the unbound values
//! 6. run post-activation hooks
//!
//! The effective service directory (explicit, else ambient) is entered as
//! the ambient scope for the whole call so nested activations see it.

use std::sync::Arc;

use activa_domain::constants::ACTIVATION_PROVIDER_ROLE;
use activa_domain::entities::{Capability, Component, Object, TypeDescriptor};
use activa_domain::error::{Error, Result};
use activa_domain::ports::{
    ActivationContext, ActivationProvider, PopulationCallback, ServiceDirectory,
};
use activa_domain::value_objects::{ProxyFallback, TypeName, ValueBag};
use tracing::trace;

use super::binder::{Binder, select_constructor};
use super::coercion::Coercer;
use super::hooks::{HookChain, PropertyHooks, run_hooks};
use super::population::populate;
use super::ActivationOptions;
use crate::adapters::AdapterResolver;
use crate::cache::SnapshotCache;
use crate::catalog::TypeCatalog;
use crate::proxy::ProxyFactory;
use crate::services::ServiceScope;

/// Central constructor binder, populator and hook runner
pub struct ActivationEngine {
    catalog: Arc<TypeCatalog>,
    proxies: Arc<ProxyFactory>,
    resolver: AdapterResolver,
    hooks: SnapshotCache<TypeName, HookChain>,
}

impl ActivationEngine {
    pub fn new(catalog: Arc<TypeCatalog>, proxies: Arc<ProxyFactory>) -> Self {
        Self {
            resolver: AdapterResolver::new(Arc::clone(&catalog)),
            catalog,
            proxies,
            hooks: SnapshotCache::new(),
        }
    }

    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        &self.catalog
    }

    pub fn proxies(&self) -> &Arc<ProxyFactory> {
        &self.proxies
    }

    pub fn resolver(&self) -> &AdapterResolver {
        &self.resolver
    }

    /// Construct and fully initialize an instance of `type_name`
    ///
    /// Entries of `values` bound to constructor parameters are removed; the
    /// rest are assigned to properties, leaving the bag empty on success.
    pub fn create_instance(
        &self,
        type_name: &TypeName,
        values: &mut ValueBag,
        options: &ActivationOptions,
    ) -> Result<Object> {
        let descriptor = self.resolve_concrete(type_name)?;
        let services = options.services().cloned().or_else(ServiceScope::current);
        let _scope = services.clone().map(ServiceScope::enter);
        let services = services.as_deref();

        if !options.attributes().is_empty() {
            trace!(
                type_name = %descriptor.name(),
                attributes = ?options.attributes(),
                "Activation attributes are advisory and not enforced"
            );
        }

        let constructor = select_constructor(&descriptor)?;
        let mut args = Binder::new(&self.catalog, &self.proxies, &descriptor, services)
            .bind(constructor, values)?;
        let mut component = constructor
            .invoke(&mut args)?
            .ok_or_else(|| Error::no_constructor(descriptor.name()))?;

        self.populate(
            &mut *component,
            &descriptor,
            values,
            options.callback().map(Arc::as_ref),
        )?;
        self.apply_hooks(&mut *component, &descriptor, services)?;

        trace!(type_name = %descriptor.name(), "Component activated");
        Ok(Object::from_boxed(descriptor, component))
    }

    /// [`ActivationEngine::create_instance`] with a typed result
    pub fn create_instance_of<T: Component>(
        &self,
        type_name: &TypeName,
        values: &mut ValueBag,
        options: &ActivationOptions,
    ) -> Result<Arc<T>> {
        let object = self.create_instance(type_name, values, options)?;
        object.downcast_arc::<T>().ok_or_else(|| {
            Error::invalid_argument(format!(
                "{} activated as {}, not {}",
                type_name,
                object.type_name(),
                std::any::type_name::<T>()
            ))
        })
    }

    /// Activate the type registered for Rust type `T`
    pub fn create_object<T: Component>(
        &self,
        values: &mut ValueBag,
        options: &ActivationOptions,
    ) -> Result<Object> {
        let descriptor = self.catalog.descriptor_for::<T>().ok_or_else(|| {
            Error::not_found(format!("descriptor for {}", std::any::type_name::<T>()))
        })?;
        self.create_instance(descriptor.name(), values, options)
    }

    /// Populate properties of an existing component from `values`
    pub fn initialize(
        &self,
        component: &mut dyn Component,
        descriptor: &TypeDescriptor,
        values: &mut ValueBag,
        options: &ActivationOptions,
    ) -> Result<()> {
        let services = options.services().cloned().or_else(ServiceScope::current);
        let _scope = services.map(ServiceScope::enter);
        self.populate(
            component,
            descriptor,
            values,
            options.callback().map(Arc::as_ref),
        )
    }

    /// Run the post-activation hooks of `descriptor` on an existing component
    pub fn activate_component(
        &self,
        component: &mut dyn Component,
        descriptor: &TypeDescriptor,
        options: &ActivationOptions,
    ) -> Result<()> {
        let services = options.services().cloned().or_else(ServiceScope::current);
        let _scope = services.clone().map(ServiceScope::enter);
        self.apply_hooks(component, descriptor, services.as_deref())
    }

    /// Adapter for `adaptee` in `role`; see [`AdapterResolver::get_adapter`]
    pub fn get_adapter(&self, adaptee: &Object, role: &str) -> Result<Option<Object>> {
        self.resolver.get_adapter(self, adaptee, role)
    }

    /// An object assignable to `target`; see [`ProxyFactory::implement`]
    pub fn implement(
        &self,
        instance: &Object,
        target: &TypeName,
        fallback: ProxyFallback,
    ) -> Result<Option<Object>> {
        self.proxies.implement(instance, target, fallback)
    }

    /// Typed view of `instance` as capability `C`
    pub fn implement_as<C: Capability + ?Sized>(
        &self,
        instance: &Object,
        fallback: ProxyFallback,
    ) -> Result<Option<Arc<C>>> {
        self.proxies.implement_as::<C>(instance, fallback)
    }

    /// Hooks applied to `descriptor`'s instances, in application order
    ///
    /// Type-declared providers, then capability-declared providers, then
    /// `ActivationProvider` role adapters of the type and its capabilities,
    /// then the built-in property hook runner.
    pub fn activation_providers(&self, descriptor: &TypeDescriptor) -> Result<HookChain> {
        self.hooks
            .get_or_try_insert_with(descriptor.name().clone(), || self.discover_hooks(descriptor))
    }

    /// Descriptor at the end of `type_name`'s concrete redirects
    pub fn resolve_concrete(&self, type_name: &TypeName) -> Result<Arc<TypeDescriptor>> {
        let mut descriptor = self.catalog.require_type(type_name)?;
        let mut visited = vec![descriptor.name().clone()];
        loop {
            let Some(concrete) = descriptor.concrete().cloned() else {
                return Ok(descriptor);
            };
            let next = self.catalog.require_type(&concrete)?;
            if visited.contains(next.name()) {
                return Err(Error::no_constructor(type_name));
            }
            visited.push(next.name().clone());
            descriptor = next;
        }
    }

    fn populate(
        &self,
        component: &mut dyn Component,
        descriptor: &TypeDescriptor,
        values: &mut ValueBag,
        callback: Option<&dyn PopulationCallback>,
    ) -> Result<()> {
        let coercer = Coercer::new(&self.catalog, &self.proxies);
        populate(&coercer, component, descriptor, values, callback)
    }

    fn apply_hooks(
        &self,
        component: &mut dyn Component,
        descriptor: &TypeDescriptor,
        services: Option<&dyn ServiceDirectory>,
    ) -> Result<()> {
        let hooks = self.activation_providers(descriptor)?;
        let context = ActivationContext::new(descriptor, services);
        run_hooks(&hooks, component, &context)
    }

    fn discover_hooks(&self, descriptor: &TypeDescriptor) -> Result<HookChain> {
        let mut hooks: Vec<Arc<dyn ActivationProvider>> = descriptor.activation_providers().to_vec();
        let capabilities: Vec<TypeName> = descriptor.implemented_capabilities().cloned().collect();

        for capability in &capabilities {
            if let Some(declared) = self.catalog.capability(capability) {
                hooks.extend(declared.activation_providers().iter().cloned());
            }
        }

        for target in std::iter::once(descriptor.name()).chain(capabilities.iter()) {
            for adapter in self
                .resolver
                .get_adapter_types(target, ACTIVATION_PROVIDER_ROLE)?
            {
                let instance =
                    self.create_instance(&adapter, &mut ValueBag::new(), &ActivationOptions::default())?;
                let provider = instance.cast::<dyn ActivationProvider>().ok_or_else(|| {
                    Error::invalid_argument(format!(
                        "{adapter} is bound as an activation provider but does not implement it"
                    ))
                })?;
                hooks.push(provider);
            }
        }

        hooks.push(Arc::new(PropertyHooks));
        Ok(hooks.into())
    }
}

impl std::fmt::Debug for ActivationEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivationEngine")
            .field("catalog", &self.catalog)
            .field("proxies", &self.proxies)
            .field("cached_hook_chains", &self.hooks.len())
            .finish()
    }
}
