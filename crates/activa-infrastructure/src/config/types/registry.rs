//! Provider registry configuration types

use serde::{Deserialize, Serialize};

/// Provider registry configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Index modules as they are registered instead of on the next lookup
    pub eager_scan: bool,
}
