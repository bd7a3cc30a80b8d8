//! Composition
//!
//! Service directories handed to activations, tracing-backed failure
//! handlers, the infrastructure module and the runtime bootstrap.
//!
//! | Item | Description |
//! |------|-------------|
//! | [`ServiceCatalog`] | Capability-keyed directory built once |
//! | [`ServiceChain`] | First-match chain of directories |
//! | [`TracingExceptionHandler`] | Logs hook failures instead of rethrowing |
//! | [`TracingPopulationCallback`] | Logs or escalates population failures |
//! | [`Runtime`] | Engines wired from [`AppConfig`](crate::config::AppConfig) |

pub mod bootstrap;
pub mod catalog;
pub mod chain;
pub mod handlers;
pub mod module;

pub use bootstrap::{Runtime, bootstrap};
pub use catalog::{ServiceCatalog, ServiceCatalogBuilder};
pub use chain::ServiceChain;
pub use handlers::{TracingExceptionHandler, TracingPopulationCallback};
pub use module::{
    infrastructure_module, tracing_exception_handler, tracing_exception_handler_type,
};
