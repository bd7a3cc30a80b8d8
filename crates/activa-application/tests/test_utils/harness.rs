//! Wired activation stack over an explicit module set

use std::sync::{Arc, Mutex};

use activa_application::{
    ActivationEngine, ModuleSet, ProviderRegistry, ProxyFactory, TypeCatalog,
};
use activa_domain::entities::{Component, ModuleDescriptor, Object};
use activa_domain::error::{Error, Result};
use activa_domain::ports::{ExceptionHandler, PopulationCallback, ServiceDirectory};
use activa_domain::value_objects::{TypeName, Value};

pub struct Harness {
    pub modules: Arc<ModuleSet>,
    pub catalog: Arc<TypeCatalog>,
    pub proxies: Arc<ProxyFactory>,
    pub engine: Arc<ActivationEngine>,
}

impl Harness {
    pub fn new(modules: impl IntoIterator<Item = ModuleDescriptor>) -> Self {
        let set = Arc::new(ModuleSet::new());
        for module in modules {
            set.register(module);
        }
        let catalog = Arc::new(TypeCatalog::new(Arc::clone(&set)));
        let proxies = Arc::new(ProxyFactory::new(Arc::clone(&catalog)));
        let engine = Arc::new(ActivationEngine::new(
            Arc::clone(&catalog),
            Arc::clone(&proxies),
        ));
        Self {
            modules: set,
            catalog,
            proxies,
            engine,
        }
    }

    /// Harness over the standard fixture module
    pub fn standard() -> Self {
        Self::new([crate::test_utils::fixture_module()])
    }

    pub fn registry(&self) -> ProviderRegistry {
        ProviderRegistry::new(Arc::clone(&self.engine))
    }

    /// Wrap a value using its registered descriptor
    pub fn object<T: Component>(&self, value: T) -> Object {
        self.catalog.wrap(value).expect("fixture type is registered")
    }
}

/// Directory answering from an explicit capability list
#[derive(Default)]
pub struct TestDirectory {
    services: Vec<(TypeName, Object)>,
}

impl TestDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn provide(mut self, capability: TypeName, service: Object) -> Self {
        self.services.push((capability, service));
        self
    }
}

impl ServiceDirectory for TestDirectory {
    fn get_service(&self, capability: &TypeName) -> Option<Object> {
        self.services
            .iter()
            .find(|(name, _)| name.matches(capability))
            .map(|(_, service)| service.clone())
    }
}

/// Exception handler remembering which hooks failed
#[derive(Default)]
pub struct RecordingHandler {
    pub failures: Mutex<Vec<String>>,
}

impl ExceptionHandler for RecordingHandler {
    fn handle(&self, hook: &str, error: &Error) {
        assert!(matches!(error, Error::ActivationProvider { .. }));
        self.failures.lock().unwrap().push(hook.to_string());
    }
}

/// Population callback remembering every report
#[derive(Default)]
pub struct RecordingCallback {
    pub missing: Mutex<Vec<String>>,
    pub conversion_errors: Mutex<Vec<String>>,
    pub strict: bool,
}

impl RecordingCallback {
    pub fn strict() -> Self {
        Self {
            strict: true,
            ..Self::default()
        }
    }
}

impl PopulationCallback for RecordingCallback {
    fn on_missing(&self, component: &TypeName, key: &str, _value: &Value) -> Result<()> {
        self.missing.lock().unwrap().push(key.to_string());
        if self.strict {
            return Err(Error::not_found(format!("member '{key}' on {component}")));
        }
        Ok(())
    }

    fn on_conversion_error(&self, _component: &TypeName, key: &str, _error: &Error) -> Result<()> {
        self.conversion_errors.lock().unwrap().push(key.to_string());
        Ok(())
    }
}
