//! Adapter Factory Port

use crate::entities::{Object, TypeDescriptor};
use crate::value_objects::TypeName;

/// Adapter source registered by a module
///
/// Factories are consulted in module registration order and the first
/// answer wins.
pub trait AdapterFactory: Send + Sync {
    /// Adapter type for `adaptee` in `role`
    fn get_adapter_type(&self, adaptee: &TypeDescriptor, role: &str) -> Option<TypeName>;

    /// Ready-made adapter instance for `adaptee` in `role`
    fn get_adapter(&self, adaptee: &Object, role: &str) -> Option<Object> {
        let _ = (adaptee, role);
        None
    }
}
