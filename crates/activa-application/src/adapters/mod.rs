//! Adapter resolution engine

pub mod resolver;

pub use resolver::AdapterResolver;
