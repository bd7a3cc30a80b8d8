//! Capability descriptors

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::entities::{Capability, MemberSignature, Object};
use crate::ports::ActivationProvider;
use crate::value_objects::{TypeName, ValueType};

/// Wraps a dynamic object as the typed trait object of a capability
pub type BridgeFn = Arc<dyn Fn(Object) -> Box<dyn Any + Send + Sync> + Send + Sync>;

/// Shape of a capability: the members a forwarding proxy must supply
#[derive(Clone)]
pub struct CapabilityDescriptor {
    name: TypeName,
    members: Vec<MemberSignature>,
    bases: Vec<TypeName>,
    value_type: bool,
    activation_providers: Vec<Arc<dyn ActivationProvider>>,
    bridge: Option<BridgeFn>,
}

impl CapabilityDescriptor {
    pub fn new(name: TypeName) -> Self {
        Self {
            name,
            members: Vec::new(),
            bases: Vec::new(),
            value_type: false,
            activation_providers: Vec::new(),
            bridge: None,
        }
    }

    /// Descriptor named after capability `C`
    pub fn of<C: Capability + ?Sized>() -> Self {
        Self::new(C::capability_name())
    }

    /// Declare an overridable member
    #[must_use]
    pub fn member(
        mut self,
        name: impl Into<String>,
        params: Vec<ValueType>,
        returns: ValueType,
    ) -> Self {
        self.members
            .push(MemberSignature::new(name, params, returns));
        self
    }

    /// Declare a base capability whose members are inherited
    #[must_use]
    pub fn base(mut self, base: TypeName) -> Self {
        self.bases.push(base);
        self
    }

    /// Mark as a value type; value types cannot be proxy targets
    #[must_use]
    pub fn value_type(mut self) -> Self {
        self.value_type = true;
        self
    }

    /// Declare a post-activation hook applied to every implementor
    #[must_use]
    pub fn activation_provider(mut self, provider: Arc<dyn ActivationProvider>) -> Self {
        self.activation_providers.push(provider);
        self
    }

    /// Bridge dynamic objects (proxies) to the typed trait object
    #[must_use]
    pub fn bridge<C, F>(mut self, wrap: F) -> Self
    where
        C: Capability + ?Sized,
        F: Fn(Object) -> Arc<C> + Send + Sync + 'static,
    {
        self.bridge = Some(Arc::new(move |object| {
            Box::new(wrap(object)) as Box<dyn Any + Send + Sync>
        }));
        self
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    /// Members declared directly on this capability
    pub fn members(&self) -> &[MemberSignature] {
        &self.members
    }

    pub fn bases(&self) -> &[TypeName] {
        &self.bases
    }

    pub fn is_value_type(&self) -> bool {
        self.value_type
    }

    pub fn activation_providers(&self) -> &[Arc<dyn ActivationProvider>] {
        &self.activation_providers
    }

    pub fn bridge_fn(&self) -> Option<&BridgeFn> {
        self.bridge.as_ref()
    }
}

impl fmt::Debug for CapabilityDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityDescriptor")
            .field("name", &self.name)
            .field("members", &self.members)
            .field("bases", &self.bases)
            .field("value_type", &self.value_type)
            .field("bridged", &self.bridge.is_some())
            .finish_non_exhaustive()
    }
}
