//! Activation configuration types

use activa_domain::value_objects::ProxyFallback;
use serde::{Deserialize, Serialize};

/// Activation engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationConfig {
    /// Proxy fallback used by [`Runtime::implement`](crate::di::Runtime::implement)
    pub default_fallback: ProxyFallback,

    /// Abort activation on unknown members and failed property assignments
    pub strict_population: bool,

    /// Register every module linked into the binary at bootstrap
    pub link_static_modules: bool,

    /// Log failing activation hooks and carry on instead of failing the activation
    pub handle_hook_failures: bool,
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            default_fallback: ProxyFallback::None,
            strict_population: false,
            link_static_modules: true,
            handle_hook_failures: false,
        }
    }
}
