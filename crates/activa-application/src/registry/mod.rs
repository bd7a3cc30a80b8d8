//! Provider registry
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ProviderRegistry`] | Lookup by name, local name, instance or criteria |
//! | [`ProviderInfo`] | Provider metadata without materialization |
//! | [`ProviderCriteria`] | Weighted selection among candidates |

pub mod criteria;
pub mod provider_info;
pub mod provider_registry;

pub use criteria::ProviderCriteria;
pub use provider_info::ProviderInfo;
pub use provider_registry::ProviderRegistry;
