//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{ActivationConfig, LoggingConfig, RegistryConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,

    /// Activation engine configuration
    pub activation: ActivationConfig,

    /// Provider registry configuration
    pub registry: RegistryConfig,
}
