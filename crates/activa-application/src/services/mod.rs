//! Ambient service directory

pub mod scope;

pub use scope::ServiceScope;
