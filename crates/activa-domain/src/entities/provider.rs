//! Provider declarations
//!
//! A provider is a named, discoverable source of a value for a capability.
//! Three kinds of source exist:
//!
//! | Kind | Backing | Identity |
//! |------|---------|----------|
//! | `Field` | a pre-built object | singleton, identity-stable |
//! | `Method` | a static factory | fresh value per call |
//! | `Type` | a type activated on demand | fresh value per call |

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::constants::{CRITERIA_CONTENT_TYPE, CRITERIA_EXTENSION, CRITERIA_OUTPUT_TYPE};
use crate::entities::Object;
use crate::error::Result;
use crate::value_objects::TypeName;

/// Static factory backing a method provider
pub type ProviderFactoryFn = Arc<dyn Fn() -> Result<Object> + Send + Sync>;

/// How a provider's value is obtained
#[derive(Clone)]
pub enum ProviderSource {
    /// Singleton value
    Field(Object),
    /// Factory invoked on every request
    Method(ProviderFactoryFn),
    /// Type activated on every request
    Type(TypeName),
}

impl ProviderSource {
    pub fn kind(&self) -> ProviderKind {
        match self {
            Self::Field(_) => ProviderKind::Field,
            Self::Method(_) => ProviderKind::Method,
            Self::Type(_) => ProviderKind::Type,
        }
    }
}

impl fmt::Debug for ProviderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(object) => f.debug_tuple("Field").field(object).finish(),
            Self::Method(_) => f.write_str("Method(..)"),
            Self::Type(name) => f.debug_tuple("Type").field(name).finish(),
        }
    }
}

/// Source kind, without the backing value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Field,
    Method,
    Type,
}

/// A provider declared by a module
#[derive(Debug, Clone)]
pub struct ProviderDeclaration {
    name: TypeName,
    capability: TypeName,
    member: String,
    source: ProviderSource,
    criteria: BTreeMap<String, String>,
}

impl ProviderDeclaration {
    fn with_source(name: TypeName, capability: TypeName, source: ProviderSource) -> Self {
        let member = name.local_name().to_string();
        Self {
            name,
            capability,
            member,
            source,
            criteria: BTreeMap::new(),
        }
    }

    /// Provider backed by a singleton value
    pub fn field(name: TypeName, capability: TypeName, value: Object) -> Self {
        Self::with_source(name, capability, ProviderSource::Field(value))
    }

    /// Provider backed by a static factory
    pub fn method<F>(name: TypeName, capability: TypeName, factory: F) -> Self
    where
        F: Fn() -> Result<Object> + Send + Sync + 'static,
    {
        Self::with_source(name, capability, ProviderSource::Method(Arc::new(factory)))
    }

    /// Provider backed by a type activated on demand
    pub fn of_type(name: TypeName, capability: TypeName, type_name: TypeName) -> Self {
        Self::with_source(name, capability, ProviderSource::Type(type_name))
    }

    /// Name of the declaring member (defaults to the local name)
    #[must_use]
    pub fn declared_by(mut self, member: impl Into<String>) -> Self {
        self.member = member.into();
        self
    }

    /// Attach a match criterion
    #[must_use]
    pub fn criterion(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.criteria.insert(key.into(), value.into());
        self
    }

    /// Handled file extensions (`;` or `,` separated)
    #[must_use]
    pub fn extension(self, extensions: impl Into<String>) -> Self {
        self.criterion(CRITERIA_EXTENSION, extensions)
    }

    #[must_use]
    pub fn content_type(self, content_type: impl Into<String>) -> Self {
        self.criterion(CRITERIA_CONTENT_TYPE, content_type)
    }

    #[must_use]
    pub fn output_type(self, output_type: &TypeName) -> Self {
        self.criterion(CRITERIA_OUTPUT_TYPE, output_type.to_string())
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Capability the provider advertises
    pub fn capability(&self) -> &TypeName {
        &self.capability
    }

    pub fn member(&self) -> &str {
        &self.member
    }

    pub fn source(&self) -> &ProviderSource {
        &self.source
    }

    pub fn kind(&self) -> ProviderKind {
        self.source.kind()
    }

    pub fn criteria(&self) -> &BTreeMap<String, String> {
        &self.criteria
    }

    /// Type the provider materializes, when statically known
    pub fn provider_type(&self) -> Option<&TypeName> {
        match &self.source {
            ProviderSource::Field(object) => Some(object.type_name()),
            ProviderSource::Type(name) => Some(name),
            ProviderSource::Method(_) => None,
        }
    }

    /// Whether `instance` is (field) or is of (type) this provider's value
    ///
    /// Method providers never claim identity.
    pub fn is_value(&self, instance: &Object) -> bool {
        match &self.source {
            ProviderSource::Field(object) => object.ptr_eq(instance),
            ProviderSource::Type(name) => instance.type_name().matches(name),
            ProviderSource::Method(_) => false,
        }
    }
}
