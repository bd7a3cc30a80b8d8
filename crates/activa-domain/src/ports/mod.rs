//! Domain Port Interfaces
//!
//! Boundary contracts between the activation core and its host. The
//! application layer consumes these traits; infrastructure and host code
//! implement them.
//!
//! ## Organization
//!
//! | Port | Description |
//! |------|-------------|
//! | [`ServiceDirectory`] | Resolves collaborators by capability |
//! | [`PopulationCallback`] | Receives non-fatal property population failures |
//! | [`ActivationProvider`] | Post-activation hook |
//! | [`PropertyActivationProvider`] | Property-level post-activation hook |
//! | [`ExceptionHandler`] | Receives hook failures instead of rethrowing |
//! | [`AdapterFactory`] | Module-registered adapter source |
//! | [`ModuleObserver`] | Notified when a module is registered |

/// Module-registered adapter sources
pub mod adapters;
/// Population diagnostics
pub mod diagnostics;
/// Post-activation hooks
pub mod hooks;
/// Module registration notifications
pub mod modules;
/// Service directory
pub mod services;

pub use adapters::AdapterFactory;
pub use diagnostics::PopulationCallback;
pub use hooks::{
    ActivationContext, ActivationProvider, ExceptionHandler, PropertyActivationProvider,
};
pub use modules::ModuleObserver;
pub use services::{ServiceDirectory, ServiceDirectoryExt};
