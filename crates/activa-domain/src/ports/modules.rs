//! Module Registration Port

use std::sync::Arc;

use crate::entities::ModuleDescriptor;

/// Notified after a module joins the module set
pub trait ModuleObserver: Send + Sync {
    fn on_module_registered(&self, module: &Arc<ModuleDescriptor>);
}
