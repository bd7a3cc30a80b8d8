//! Application Layer - Activa
//!
//! Runtime component activation over the metadata model of `activa-domain`.
//!
//! ## Architecture
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`catalog`] | Module set, incremental indexes, type/capability/role resolution |
//! | [`activation`] | Construct-then-initialize pipeline and post-activation hooks |
//! | [`adapters`] | Role adapter resolution |
//! | [`proxy`] | Forwarding proxy synthesis over dispatch tables |
//! | [`registry`] | Named providers discovered from modules |
//! | [`services`] | Ambient service directory scope |
//! | [`cache`] | Copy-on-write memoization shared by the engines |
//!
//! ## Concurrency
//!
//! Every index and cache publishes immutable snapshots through `arc-swap`.
//! Readers never lock; writers serialize on one mutex per index and
//! re-check after acquiring it.
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `activa-domain`: descriptors, values, ports and the error taxonomy
//! - `arc-swap`, `linkme` and `tracing`

pub mod activation;
pub mod adapters;
pub mod cache;
pub mod catalog;
pub mod proxy;
pub mod registry;
pub mod services;

pub use activation::{ActivationEngine, ActivationOptions};
pub use adapters::AdapterResolver;
pub use catalog::{LINKED_MODULES, ModuleEntry, ModuleSet, TypeCatalog};
pub use proxy::{ForwardingProxy, ProxyFactory, ProxyType};
pub use registry::{ProviderCriteria, ProviderInfo, ProviderRegistry};
pub use services::ServiceScope;
