//! Provider metadata snapshots

use std::collections::BTreeMap;

use activa_domain::entities::{ProviderDeclaration, ProviderKind};
use activa_domain::value_objects::TypeName;

/// Everything the registry knows about one provider, without materializing it
#[derive(Debug, Clone)]
pub struct ProviderInfo {
    declaration: ProviderDeclaration,
    module: String,
    order: usize,
}

impl ProviderInfo {
    pub(crate) fn new(declaration: ProviderDeclaration, module: impl Into<String>, order: usize) -> Self {
        Self {
            declaration,
            module: module.into(),
            order,
        }
    }

    pub fn name(&self) -> &TypeName {
        self.declaration.name()
    }

    pub fn capability(&self) -> &TypeName {
        self.declaration.capability()
    }

    pub fn kind(&self) -> ProviderKind {
        self.declaration.kind()
    }

    /// Name of the module that declared the provider
    pub fn module(&self) -> &str {
        &self.module
    }

    pub fn member(&self) -> &str {
        self.declaration.member()
    }

    pub fn provider_type(&self) -> Option<&TypeName> {
        self.declaration.provider_type()
    }

    pub fn criteria(&self) -> &BTreeMap<String, String> {
        self.declaration.criteria()
    }

    /// Declared criterion value, key compared ignoring case
    pub fn criterion(&self, key: &str) -> Option<&str> {
        self.criteria()
            .iter()
            .find(|(declared, _)| declared.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    pub fn declaration(&self) -> &ProviderDeclaration {
        &self.declaration
    }

    /// Position in global declaration order
    pub fn order(&self) -> usize {
        self.order
    }
}
