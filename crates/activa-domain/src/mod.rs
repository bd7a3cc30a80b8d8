//! # Domain Layer
//!
//! The metadata model and contracts of the activation core. Nothing here
//! performs activation; the application layer drives these types.
//!
//! ## Module Categories
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Type identifiers, dynamic values, value bags, policies |
//! | [`entities`] | Descriptors, objects, capabilities, roles, providers, modules |
//! | [`ports`] | Service directory, callbacks, hooks, adapter factories |
//! | [`error`] | Error taxonomy shared by every layer |
//! | [`constants`] | Built-in namespaces, roles and criteria keys |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use entities::{
    Capability, CapabilityDescriptor, Component, ModuleDescriptor, Object, ProviderDeclaration,
    RoleDescriptor, TypeDescriptor,
};
pub use error::{Error, Result};
pub use value_objects::{ProxyFallback, TypeName, Value, ValueBag, ValueType};
