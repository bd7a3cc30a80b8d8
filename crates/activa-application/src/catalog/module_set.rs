//! Module set
//!
//! The live, append-only set of registered modules. Indexes built over the
//! set remember how many modules they have scanned and catch up on demand,
//! which keeps discovery independent of registration order.

use std::sync::{Arc, Mutex, PoisonError};

use activa_domain::entities::ModuleDescriptor;
use activa_domain::ports::ModuleObserver;
use arc_swap::ArcSwap;
use tracing::debug;

/// Compile-time module registration entry
///
/// Modules register themselves with
/// `#[linkme::distributed_slice(LINKED_MODULES)]` and are picked up by
/// [`ModuleSet::with_linked_modules`].
pub struct ModuleEntry {
    /// Unique module name
    pub name: &'static str,
    /// Builds the module's declarations
    pub factory: fn() -> ModuleDescriptor,
}

#[linkme::distributed_slice]
pub static LINKED_MODULES: [ModuleEntry] = [..];

/// Names of all modules registered at link time
pub fn list_linked_modules() -> Vec<&'static str> {
    LINKED_MODULES.iter().map(|entry| entry.name).collect()
}

/// Append-only set of registered modules
pub struct ModuleSet {
    modules: ArcSwap<Vec<Arc<ModuleDescriptor>>>,
    observers: ArcSwap<Vec<Arc<dyn ModuleObserver>>>,
    write: Mutex<()>,
}

impl ModuleSet {
    pub fn new() -> Self {
        Self {
            modules: ArcSwap::from_pointee(Vec::new()),
            observers: ArcSwap::from_pointee(Vec::new()),
            write: Mutex::new(()),
        }
    }

    /// Module set seeded with every [`LINKED_MODULES`] entry, in link order
    pub fn with_linked_modules() -> Self {
        let set = Self::new();
        for entry in LINKED_MODULES {
            set.register((entry.factory)());
        }
        set
    }

    /// Add a module; returns `false` if a module with the same name exists
    pub fn register(&self, module: ModuleDescriptor) -> bool {
        let module = Arc::new(module);
        {
            let _guard = self.write.lock().unwrap_or_else(PoisonError::into_inner);
            let current = self.modules.load();
            if current.iter().any(|m| m.name() == module.name()) {
                debug!(module = module.name(), "Module already registered, skipping");
                return false;
            }
            let mut next = Vec::with_capacity(current.len() + 1);
            next.extend(current.iter().cloned());
            next.push(Arc::clone(&module));
            self.modules.store(Arc::new(next));
        }

        debug!(
            module = module.name(),
            types = module.types().len(),
            providers = module.providers().len(),
            "Module registered"
        );
        for observer in self.observers.load().iter() {
            observer.on_module_registered(&module);
        }
        true
    }

    /// Current modules, in registration order
    pub fn snapshot(&self) -> Arc<Vec<Arc<ModuleDescriptor>>> {
        self.modules.load_full()
    }

    /// Notify `observer` of every module registered from now on
    pub fn subscribe(&self, observer: Arc<dyn ModuleObserver>) {
        let _guard = self.write.lock().unwrap_or_else(PoisonError::into_inner);
        let mut next: Vec<_> = self.observers.load().iter().cloned().collect();
        next.push(observer);
        self.observers.store(Arc::new(next));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.modules.load().iter().any(|m| m.name() == name)
    }

    pub fn len(&self) -> usize {
        self.modules.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ModuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ModuleSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self
            .modules
            .load()
            .iter()
            .map(|m| m.name().to_string())
            .collect();
        f.debug_struct("ModuleSet").field("modules", &names).finish()
    }
}
