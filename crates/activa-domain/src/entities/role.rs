//! Adapter roles and module-level role bindings

use std::fmt;
use std::sync::Arc;

use crate::entities::{MemberSignature, TypeDescriptor};
use crate::value_objects::TypeName;

/// Predicate over candidate adapter types
pub type ValidityFn = Arc<dyn Fn(&TypeDescriptor) -> bool + Send + Sync>;

/// A named capability an object can be adapted to
#[derive(Clone)]
pub struct RoleDescriptor {
    name: String,
    capability: Option<TypeName>,
    validity: Option<ValidityFn>,
    expected_methods: Vec<MemberSignature>,
}

impl RoleDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            capability: None,
            validity: None,
            expected_methods: Vec::new(),
        }
    }

    /// Capability adapters for this role implement
    #[must_use]
    pub fn with_capability(mut self, capability: TypeName) -> Self {
        self.capability = Some(capability);
        self
    }

    #[must_use]
    pub fn with_validity<F>(mut self, validity: F) -> Self
    where
        F: Fn(&TypeDescriptor) -> bool + Send + Sync + 'static,
    {
        self.validity = Some(Arc::new(validity));
        self
    }

    /// Require candidates to expose a delegate-shaped member
    #[must_use]
    pub fn expect_method(mut self, signature: MemberSignature) -> Self {
        self.expected_methods.push(signature);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capability(&self) -> Option<&TypeName> {
        self.capability.as_ref()
    }

    pub fn expected_methods(&self) -> &[MemberSignature] {
        &self.expected_methods
    }

    /// Whether `candidate` may serve as an adapter for this role
    pub fn accepts(&self, candidate: &TypeDescriptor) -> bool {
        self.validity.as_ref().is_none_or(|valid| valid(candidate))
            && self
                .expected_methods
                .iter()
                .all(|signature| candidate.find_method(signature).is_some())
    }
}

impl fmt::Debug for RoleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RoleDescriptor")
            .field("name", &self.name)
            .field("capability", &self.capability)
            .field("has_validity", &self.validity.is_some())
            .field("expected_methods", &self.expected_methods)
            .finish()
    }
}

/// Adapter declared by a module independently of the adaptee type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleBinding {
    adaptee: TypeName,
    role: String,
    adapter: TypeName,
}

impl RoleBinding {
    pub fn new(adaptee: TypeName, role: impl Into<String>, adapter: TypeName) -> Self {
        Self {
            adaptee,
            role: role.into(),
            adapter,
        }
    }

    pub fn adaptee(&self) -> &TypeName {
        &self.adaptee
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn adapter(&self) -> &TypeName {
        &self.adapter
    }
}
