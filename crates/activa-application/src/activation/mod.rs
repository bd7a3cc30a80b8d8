//! Activation engine
//!
//! | Stage | Module |
//! |-------|--------|
//! | Constructor selection and argument binding | `binder` |
//! | Value coercion | `coercion` |
//! | Property population | `population` |
//! | Post-activation hooks | [`hooks`] |

mod binder;
mod coercion;
pub mod engine;
pub mod hooks;
pub mod options;
mod population;

pub use engine::ActivationEngine;
pub use hooks::{HookChain, PropertyHooks};
pub use options::ActivationOptions;
