//! Infrastructure Layer - Activa
//!
//! Host-facing plumbing around the activation engines.
//!
//! ## Architecture
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-merged configuration (defaults, TOML, environment) |
//! | [`logging`] | Tracing subscriber setup with optional rotated files |
//! | [`di`] | Service directories, failure handlers and the runtime bootstrap |
//! | [`error_ext`] | Context helpers mapping foreign errors into domain errors |
//! | [`constants`] | File names, environment prefixes and module identity |

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use di::{
    Runtime, ServiceCatalog, ServiceChain, TracingExceptionHandler, TracingPopulationCallback,
    bootstrap,
};
pub use error_ext::ErrorContext;
pub use logging::init_logging;
