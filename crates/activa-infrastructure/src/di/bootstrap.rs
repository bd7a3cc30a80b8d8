//! Runtime Bootstrap - Composition Root
//!
//! Wires the module set, type catalog, proxy factory, activation engine and
//! provider registry from an [`AppConfig`].
//!
//! ```text
//! AppConfig → ModuleSet (LINKED_MODULES) → TypeCatalog → ProxyFactory
//!                                               ↓             ↓
//!                                          ActivationEngine ←─┘
//!                                               ↓
//!                                        ProviderRegistry
//! ```
//!
//! ## Usage
//!
//! ```
//! use activa_infrastructure::config::AppConfig;
//! use activa_infrastructure::di::bootstrap;
//!
//! let runtime = bootstrap(AppConfig::default()).unwrap();
//! assert!(runtime.modules().contains("activa-infrastructure"));
//! ```

use std::sync::Arc;

use activa_application::{
    ActivationEngine, ActivationOptions, ModuleSet, ProviderRegistry, ProxyFactory, TypeCatalog,
};
use activa_domain::entities::{Capability, Component, ModuleDescriptor, Object};
use activa_domain::error::Result;
use activa_domain::ports::ServiceDirectory;
use activa_domain::value_objects::{TypeName, ValueBag};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::config::loader::validate_app_config;
use crate::di::{ServiceCatalog, TracingPopulationCallback, tracing_exception_handler};

/// Activation runtime assembled from configuration
pub struct Runtime {
    config: Arc<AppConfig>,
    modules: Arc<ModuleSet>,
    catalog: Arc<TypeCatalog>,
    proxies: Arc<ProxyFactory>,
    engine: Arc<ActivationEngine>,
    registry: ProviderRegistry,
    services: Arc<dyn ServiceDirectory>,
}

/// Build a [`Runtime`] from `config`
///
/// Linked modules are registered in link order when
/// `activation.link_static_modules` is set. With `registry.eager_scan` the
/// registry indexes each module as it is registered. Activations see an
/// empty service catalog, so a failing hook fails its activation, unless
/// `activation.handle_hook_failures` installs a
/// [`TracingExceptionHandler`](crate::di::TracingExceptionHandler).
/// [`Runtime::with_services`] replaces the catalog either way.
pub fn bootstrap(config: AppConfig) -> Result<Runtime> {
    validate_app_config(&config)?;

    let modules = Arc::new(if config.activation.link_static_modules {
        ModuleSet::with_linked_modules()
    } else {
        ModuleSet::new()
    });
    info!(modules = modules.len(), "Module set initialized");

    let catalog = Arc::new(TypeCatalog::new(Arc::clone(&modules)));
    let proxies = Arc::new(ProxyFactory::new(Arc::clone(&catalog)));
    let engine = Arc::new(ActivationEngine::new(
        Arc::clone(&catalog),
        Arc::clone(&proxies),
    ));
    let registry = ProviderRegistry::new(Arc::clone(&engine));
    if config.registry.eager_scan {
        registry.watch();
        debug!(
            indexed = registry.indexed_modules(),
            "Provider registry watching module set"
        );
    }

    let services = if config.activation.handle_hook_failures {
        debug!("Hook failures are logged, not propagated");
        ServiceCatalog::builder()
            .add(tracing_exception_handler()?)
            .build()
    } else {
        ServiceCatalog::default()
    };

    Ok(Runtime {
        config: Arc::new(config),
        modules,
        catalog,
        proxies,
        engine,
        registry,
        services: Arc::new(services),
    })
}

impl Runtime {
    /// Replace the service directory handed to activations
    #[must_use]
    pub fn with_services(mut self, services: Arc<dyn ServiceDirectory>) -> Self {
        self.services = services;
        self
    }

    pub fn config(&self) -> &Arc<AppConfig> {
        &self.config
    }

    pub fn modules(&self) -> &Arc<ModuleSet> {
        &self.modules
    }

    pub fn catalog(&self) -> &Arc<TypeCatalog> {
        &self.catalog
    }

    pub fn proxies(&self) -> &Arc<ProxyFactory> {
        &self.proxies
    }

    pub fn engine(&self) -> &Arc<ActivationEngine> {
        &self.engine
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    pub fn services(&self) -> &Arc<dyn ServiceDirectory> {
        &self.services
    }

    /// Register a module; returns `false` if its name is taken
    pub fn register_module(&self, module: ModuleDescriptor) -> bool {
        let name = module.name().to_string();
        let added = self.modules.register(module);
        if added {
            info!(module = %name, "Module registered");
        } else {
            debug!(module = %name, "Module already registered");
        }
        added
    }

    /// Options carrying the runtime's services and population policy
    pub fn activation_options(&self) -> ActivationOptions {
        ActivationOptions::new()
            .with_services(Arc::clone(&self.services))
            .with_callback(Arc::new(TracingPopulationCallback::new(
                self.config.activation.strict_population,
            )))
    }

    /// Activate `type_name` with the runtime's options
    pub fn create_instance(&self, type_name: &TypeName, values: &mut ValueBag) -> Result<Object> {
        self.engine
            .create_instance(type_name, values, &self.activation_options())
    }

    /// Pair `value` with its registered descriptor
    pub fn object<T: Component>(&self, value: T) -> Result<Object> {
        self.catalog.wrap(value)
    }

    /// View `instance` as `target` using the configured fallback
    pub fn implement(&self, instance: &Object, target: &TypeName) -> Result<Option<Object>> {
        self.engine
            .implement(instance, target, self.config.activation.default_fallback)
    }

    /// Typed view of `instance` as capability `C` using the configured fallback
    pub fn implement_as<C: Capability + ?Sized>(&self, instance: &Object) -> Result<Option<Arc<C>>> {
        self.engine
            .implement_as::<C>(instance, self.config.activation.default_fallback)
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("config", &self.config)
            .field("modules", &self.modules.len())
            .finish()
    }
}
