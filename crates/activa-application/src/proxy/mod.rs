//! Proxy synthesis engine
//!
//! Runtime code generation is replaced by dispatch tables: a proxy type is
//! a table of per-member implementations plus a descriptor whose methods
//! index into it.

pub mod dispatch;
pub mod synthesis;

pub use dispatch::{DispatchEntry, DispatchTable, ForwardingProxy};
pub use synthesis::{ProxyFactory, ProxyType};
