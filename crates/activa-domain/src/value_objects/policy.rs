//! Proxy fallback policy and activation attributes

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// What a synthesized proxy does for a target member the source cannot supply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProxyFallback {
    /// Abort synthesis: no proxy is produced
    #[default]
    None,
    /// Return the member's default value
    CreateDefault,
    /// Fail every call with "not implemented"
    ThrowException,
}

bitflags! {
    /// Activation marker attributes
    ///
    /// Recognized and carried through activation but not enforced.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ActivationAttributes: u8 {
        /// Run the component in a separate process
        const PROCESS_ISOLATION = 0b0001;
        /// Run the component in a separate application domain
        const APP_DOMAIN_ISOLATION = 0b0010;
        /// The activated instance may be reused across requests
        const REUSABLE = 0b0100;
    }
}
