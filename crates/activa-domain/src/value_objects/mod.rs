//! Domain Value Objects
//!
//! Immutable value objects without identity.
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TypeName`] | Namespace-scoped type identifier |
//! | [`Value`] | Dynamically typed value |
//! | [`ValueType`] | Declared type of a parameter, property or return |
//! | [`ValueBag`] | Ordered named values consumed by activation |
//! | [`ProxyFallback`] | Proxy synthesis policy for unmatched members |
//! | [`ActivationAttributes`] | Advisory activation markers |

/// Activation policies
pub mod policy;
/// Qualified type identifiers
pub mod type_name;
/// Dynamic values
pub mod value;
/// Named value bags
pub mod value_bag;

pub use policy::{ActivationAttributes, ProxyFallback};
pub use type_name::TypeName;
pub use value::{Value, ValueType};
pub use value_bag::ValueBag;
