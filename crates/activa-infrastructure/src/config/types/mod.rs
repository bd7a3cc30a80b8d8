//! Configuration types module

pub mod activation;
pub mod app;
pub mod logging;
pub mod registry;

pub use activation::ActivationConfig;
pub use app::AppConfig;
pub use logging::LoggingConfig;
pub use registry::RegistryConfig;
