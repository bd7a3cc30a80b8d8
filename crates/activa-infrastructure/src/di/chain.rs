//! First-match chain of service directories

use std::sync::Arc;

use activa_domain::entities::Object;
use activa_domain::ports::ServiceDirectory;
use activa_domain::value_objects::TypeName;

/// Asks each directory in order; the first answer wins
#[derive(Clone, Default)]
pub struct ServiceChain {
    directories: Vec<Arc<dyn ServiceDirectory>>,
}

impl ServiceChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directory consulted after the existing ones
    #[must_use]
    pub fn then(mut self, directory: Arc<dyn ServiceDirectory>) -> Self {
        self.directories.push(directory);
        self
    }

    pub fn len(&self) -> usize {
        self.directories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.directories.is_empty()
    }
}

impl ServiceDirectory for ServiceChain {
    fn get_service(&self, capability: &TypeName) -> Option<Object> {
        self.directories
            .iter()
            .find_map(|directory| directory.get_service(capability))
    }
}

impl std::fmt::Debug for ServiceChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceChain")
            .field("directories", &self.directories.len())
            .finish()
    }
}
