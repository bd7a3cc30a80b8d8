//! Configuration
//!
//! Figment-merged configuration: defaults, then `activa.toml`, then
//! `ACTIVA_` environment variables (`__` separates nested keys).

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ActivationConfig, AppConfig, LoggingConfig, RegistryConfig};
