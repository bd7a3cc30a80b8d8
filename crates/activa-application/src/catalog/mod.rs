//! Module set and name resolution
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ModuleSet`] | Append-only registered modules with observers |
//! | [`LazyIndex`] | Copy-on-write index that scans new modules on demand |
//! | [`TypeCatalog`] | Type, capability and role lookups |

pub mod index;
pub mod module_set;
pub mod type_catalog;

pub use index::{IndexSnapshot, LazyIndex, ModuleIndex};
pub use module_set::{LINKED_MODULES, ModuleEntry, ModuleSet, list_linked_modules};
pub use type_catalog::TypeCatalog;
