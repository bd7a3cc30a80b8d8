//! Domain Entities
//!
//! The metadata model that stands in for runtime reflection: descriptors
//! are registered explicitly through modules and shared behind `Arc`.
//!
//! | Entity | Description |
//! |--------|-------------|
//! | [`Object`] | Shared component paired with its descriptor |
//! | [`TypeDescriptor`] | Constructors, properties, methods, capabilities of a type |
//! | [`CapabilityDescriptor`] | Member shape of a capability |
//! | [`RoleDescriptor`] | Adapter role with validity rules |
//! | [`ProviderDeclaration`] | Named provider of a capability value |
//! | [`ModuleDescriptor`] | Unit of discovery |

/// Capability descriptors
pub mod capability;
/// Components, objects and capability casts
pub mod component;
/// Type descriptors and their builder
pub mod descriptor;
/// Member descriptors and bound arguments
pub mod members;
/// Module descriptors
pub mod module;
/// Provider declarations
pub mod provider;
/// Roles and role bindings
pub mod role;

pub use capability::{BridgeFn, CapabilityDescriptor};
pub use component::{Capability, CastFn, Component, Object};
pub use descriptor::{
    CapabilityCast, DefaultFn, ParseFn, TypeBuilder, TypeDescriptor, TypeKind,
};
pub use members::{
    Arguments, ConstructFn, ConstructorDescriptor, ConstructorKind, InvokeFn, MemberSignature,
    MethodDescriptor, ParameterDescriptor, PropertyDescriptor, SetterFn,
};
pub use module::ModuleDescriptor;
pub use provider::{ProviderDeclaration, ProviderFactoryFn, ProviderKind, ProviderSource};
pub use role::{RoleBinding, RoleDescriptor, ValidityFn};
