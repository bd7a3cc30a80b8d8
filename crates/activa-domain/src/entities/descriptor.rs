//! Type descriptors
//!
//! A [`TypeDescriptor`] is the capability descriptor built once per type: its
//! construction paths, settable members, invocable members, implemented
//! capabilities and declared role bindings. Descriptors are produced through
//! [`TypeBuilder`] and shared behind `Arc`.

use std::any::{Any, TypeId};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use crate::entities::{
    Arguments, Capability, CastFn, Component, ConstructFn, ConstructorDescriptor,
    ConstructorKind, InvokeFn, MemberSignature, MethodDescriptor, Object, ParameterDescriptor,
    PropertyDescriptor, SetterFn,
};
use crate::error::{Error, Result};
use crate::ports::{ActivationProvider, PropertyActivationProvider};
use crate::value_objects::{TypeName, Value, ValueType};

/// Erased local string-to-type conversion
pub type ParseFn = Arc<dyn Fn(&str) -> Result<Box<dyn Component>> + Send + Sync>;

/// Erased default instance of a value type
pub type DefaultFn = Arc<dyn Fn() -> Box<dyn Component> + Send + Sync>;

/// Broad classification of a described type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    /// Concrete, activatable type
    Class,
    /// Abstract type; activation follows its concrete redirect
    Abstract,
    /// Enumeration
    Enum,
    /// Type with static members only
    StaticOnly,
}

/// Capability implemented by a type, with its typed cast
#[derive(Clone)]
pub struct CapabilityCast {
    capability: TypeName,
    cast: Option<CastFn>,
}

impl CapabilityCast {
    pub fn capability(&self) -> &TypeName {
        &self.capability
    }
}

/// Described type
#[derive(Clone)]
pub struct TypeDescriptor {
    name: TypeName,
    kind: TypeKind,
    type_id: Option<TypeId>,
    concrete: Option<TypeName>,
    bases: Vec<TypeName>,
    constructors: Vec<ConstructorDescriptor>,
    properties: Vec<PropertyDescriptor>,
    methods: Vec<MethodDescriptor>,
    capabilities: Vec<CapabilityCast>,
    adapters: Vec<(String, TypeName)>,
    activation_providers: Vec<Arc<dyn ActivationProvider>>,
    parser: Option<ParseFn>,
    default: Option<DefaultFn>,
}

impl TypeDescriptor {
    fn empty(name: TypeName, kind: TypeKind, type_id: Option<TypeId>) -> Self {
        Self {
            name,
            kind,
            type_id,
            concrete: None,
            bases: Vec::new(),
            constructors: Vec::new(),
            properties: Vec::new(),
            methods: Vec::new(),
            capabilities: Vec::new(),
            adapters: Vec::new(),
            activation_providers: Vec::new(),
            parser: None,
            default: None,
        }
    }

    /// Describe a concrete Rust type
    pub fn class<T: Component>(name: TypeName) -> TypeBuilder<T> {
        TypeBuilder::new(Self::empty(name, TypeKind::Class, Some(TypeId::of::<T>())))
    }

    /// Describe an enumeration backed by a Rust type
    pub fn enumeration<T: Component>(name: TypeName) -> TypeBuilder<T> {
        TypeBuilder::new(Self::empty(name, TypeKind::Enum, Some(TypeId::of::<T>())))
    }

    /// Describe an abstract type (pair with [`TypeBuilder::concrete`])
    pub fn abstract_type(name: TypeName) -> TypeBuilder<()> {
        TypeBuilder::new(Self::empty(name, TypeKind::Abstract, None))
    }

    /// Describe a type exposing only static members
    pub fn static_only(name: TypeName) -> TypeBuilder<()> {
        TypeBuilder::new(Self::empty(name, TypeKind::StaticOnly, None))
    }

    pub fn name(&self) -> &TypeName {
        &self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Rust type backing the descriptor; `None` for abstract and static-only types
    pub fn rust_type_id(&self) -> Option<TypeId> {
        self.type_id
    }

    /// Concrete-class redirect used when activating this type
    pub fn concrete(&self) -> Option<&TypeName> {
        self.concrete.as_ref()
    }

    pub fn bases(&self) -> &[TypeName] {
        &self.bases
    }

    pub fn constructors(&self) -> &[ConstructorDescriptor] {
        &self.constructors
    }

    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    pub fn methods(&self) -> &[MethodDescriptor] {
        &self.methods
    }

    pub fn activation_providers(&self) -> &[Arc<dyn ActivationProvider>] {
        &self.activation_providers
    }

    /// Capabilities this type implements, in declaration order
    pub fn implemented_capabilities(&self) -> impl Iterator<Item = &TypeName> {
        self.capabilities.iter().map(CapabilityCast::capability)
    }

    /// Whether values of this type can stand in for `type_name`
    pub fn is_assignable_to(&self, type_name: &TypeName) -> bool {
        self.name == *type_name
            || self.bases.contains(type_name)
            || self.capabilities.iter().any(|c| c.capability == *type_name)
    }

    pub fn capability_cast(&self, capability: &TypeName) -> Option<&CastFn> {
        self.capabilities
            .iter()
            .find(|c| c.capability == *capability)
            .and_then(|c| c.cast.as_ref())
    }

    /// Settable member by name, ignoring case
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties
            .iter()
            .find(|p| p.name().eq_ignore_ascii_case(name))
    }

    /// Non-static member with exactly this name, parameter types and return type
    pub fn find_method(&self, signature: &MemberSignature) -> Option<&MethodDescriptor> {
        self.methods
            .iter()
            .find(|m| !m.is_static() && m.signature() == signature)
    }

    /// Non-static member by name and arity
    pub fn find_instance_method(&self, name: &str, arity: usize) -> Option<&MethodDescriptor> {
        self.methods
            .iter()
            .find(|m| !m.is_static() && m.name() == name && m.signature().params().len() == arity)
    }

    /// Static member by name and arity
    pub fn find_static_method(&self, name: &str, arity: usize) -> Option<&MethodDescriptor> {
        self.methods
            .iter()
            .find(|m| m.is_static() && m.name() == name && m.signature().params().len() == arity)
    }

    /// Declared adapter types for `role`, in declaration order
    pub fn adapters_for<'a>(&'a self, role: &'a str) -> impl Iterator<Item = &'a TypeName> + 'a {
        self.adapters
            .iter()
            .filter(move |(r, _)| r.eq_ignore_ascii_case(role))
            .map(|(_, adapter)| adapter)
    }

    /// Convert text into an instance, when the type declares a parser
    pub fn parse_text(&self, text: &str) -> Option<Result<Box<dyn Component>>> {
        self.parser.as_ref().map(|parse| parse(text))
    }

    /// Default instance, when the type declares one
    pub fn default_instance(&self) -> Option<Box<dyn Component>> {
        self.default.as_ref().map(|create| create())
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("concrete", &self.concrete)
            .field("constructors", &self.constructors)
            .field("properties", &self.properties)
            .field("methods", &self.methods)
            .field(
                "capabilities",
                &self.implemented_capabilities().collect::<Vec<_>>(),
            )
            .finish_non_exhaustive()
    }
}

/// Builder for [`TypeDescriptor`]
///
/// ```
/// use std::sync::Arc;
/// use activa_domain::entities::{ParameterDescriptor, TypeDescriptor};
/// use activa_domain::value_objects::{TypeName, Value, ValueType};
///
/// struct Counter {
///     count: i64,
///     label: Option<String>,
/// }
///
/// let descriptor = TypeDescriptor::class::<Counter>(TypeName::new("urn:demo", "Counter"))
///     .constructor(vec![ParameterDescriptor::new("count", ValueType::Int)], |args| {
///         Ok(Counter { count: args.int(0)?, label: None })
///     })
///     .property("label", ValueType::Text, |counter: &mut Counter, value| {
///         counter.label = value.into_text();
///         Ok(())
///     })
///     .method("count", vec![], ValueType::Int, |counter: &Counter, _| {
///         Ok(Value::Int(counter.count))
///     })
///     .build();
///
/// assert_eq!(descriptor.constructors().len(), 1);
/// assert!(descriptor.property("LABEL").is_some());
/// ```
pub struct TypeBuilder<T> {
    descriptor: TypeDescriptor,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Component> TypeBuilder<T> {
    fn new(descriptor: TypeDescriptor) -> Self {
        Self {
            descriptor,
            _marker: PhantomData,
        }
    }

    /// Activate `concrete` whenever this type is requested
    #[must_use]
    pub fn concrete(mut self, concrete: TypeName) -> Self {
        self.descriptor.concrete = Some(concrete);
        self
    }

    /// Declare a base type
    #[must_use]
    pub fn base(mut self, base: TypeName) -> Self {
        self.descriptor.bases.push(base);
        self
    }

    /// Declare an instance constructor
    #[must_use]
    pub fn constructor<F>(self, params: Vec<ParameterDescriptor>, construct: F) -> Self
    where
        F: Fn(&mut Arguments) -> Result<T> + Send + Sync + 'static,
    {
        self.push_constructor("new", ConstructorKind::Constructor, params, false, move |a| {
            construct(a).map(Some)
        })
    }

    /// Declare the explicit activation constructor
    #[must_use]
    pub fn preferred_constructor<F>(self, params: Vec<ParameterDescriptor>, construct: F) -> Self
    where
        F: Fn(&mut Arguments) -> Result<T> + Send + Sync + 'static,
    {
        self.push_constructor("new", ConstructorKind::Constructor, params, true, move |a| {
            construct(a).map(Some)
        })
    }

    /// Declare a static factory method; returning `None` is a null result
    #[must_use]
    pub fn factory<F>(
        self,
        name: impl Into<String>,
        params: Vec<ParameterDescriptor>,
        create: F,
    ) -> Self
    where
        F: Fn(&mut Arguments) -> Result<Option<T>> + Send + Sync + 'static,
    {
        self.push_constructor(name, ConstructorKind::Factory, params, false, create)
    }

    /// Declare the explicit activation factory method
    #[must_use]
    pub fn preferred_factory<F>(
        self,
        name: impl Into<String>,
        params: Vec<ParameterDescriptor>,
        create: F,
    ) -> Self
    where
        F: Fn(&mut Arguments) -> Result<Option<T>> + Send + Sync + 'static,
    {
        self.push_constructor(name, ConstructorKind::Factory, params, true, create)
    }

    fn push_constructor<F>(
        mut self,
        name: impl Into<String>,
        kind: ConstructorKind,
        params: Vec<ParameterDescriptor>,
        preferred: bool,
        create: F,
    ) -> Self
    where
        F: Fn(&mut Arguments) -> Result<Option<T>> + Send + Sync + 'static,
    {
        let invoke: ConstructFn = Arc::new(move |args: &mut Arguments| {
            Ok(create(args)?.map(|value| Box::new(value) as Box<dyn Component>))
        });
        let mut constructor = ConstructorDescriptor::new(name, kind, params, invoke);
        if preferred {
            constructor = constructor.preferred();
        }
        self.descriptor.constructors.push(constructor);
        self
    }

    /// Declare a settable member
    #[must_use]
    pub fn property<F>(mut self, name: impl Into<String>, ty: ValueType, set: F) -> Self
    where
        F: Fn(&mut T, Value) -> Result<()> + Send + Sync + 'static,
    {
        let name = name.into();
        let member = name.clone();
        let setter: SetterFn = Arc::new(move |component: &mut dyn Component, value| {
            let target = component.downcast_mut::<T>().ok_or_else(|| {
                Error::internal(format!(
                    "property '{member}' applied to a component that is not {}",
                    std::any::type_name::<T>()
                ))
            })?;
            set(target, value)
        });
        self.descriptor
            .properties
            .push(PropertyDescriptor::new(name, ty, setter));
        self
    }

    /// Attach a property-level activation hook to an already declared property
    #[must_use]
    pub fn property_hook(
        mut self,
        property: &str,
        hook: Arc<dyn PropertyActivationProvider>,
    ) -> Self {
        if let Some(p) = self
            .descriptor
            .properties
            .iter_mut()
            .find(|p| p.name().eq_ignore_ascii_case(property))
        {
            p.push_hook(hook);
        }
        self
    }

    /// Declare an instance member
    #[must_use]
    pub fn method<F>(
        mut self,
        name: impl Into<String>,
        params: Vec<ValueType>,
        returns: ValueType,
        call: F,
    ) -> Self
    where
        F: Fn(&T, &[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        let name = name.into();
        let member = name.clone();
        let invoke: InvokeFn = Arc::new(move |component: &dyn Component, args| {
            let receiver = component.downcast_ref::<T>().ok_or_else(|| {
                Error::internal(format!(
                    "member '{member}' invoked on a component that is not {}",
                    std::any::type_name::<T>()
                ))
            })?;
            call(receiver, args)
        });
        self.descriptor.methods.push(MethodDescriptor::new(
            MemberSignature::new(name, params, returns),
            false,
            invoke,
        ));
        self
    }

    /// Declare a static member
    #[must_use]
    pub fn static_method<F>(
        mut self,
        name: impl Into<String>,
        params: Vec<ValueType>,
        returns: ValueType,
        call: F,
    ) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        let invoke: InvokeFn = Arc::new(move |_: &dyn Component, args| call(args));
        self.descriptor.methods.push(MethodDescriptor::new(
            MemberSignature::new(name, params, returns),
            true,
            invoke,
        ));
        self
    }

    /// Declare that this type implements capability `C`
    #[must_use]
    pub fn implements<C, F>(mut self, upcast: F) -> Self
    where
        C: Capability + ?Sized,
        F: Fn(Arc<T>) -> Arc<C> + Send + Sync + 'static,
    {
        let cast: CastFn = Arc::new(move |object: &Object| {
            let concrete = object.downcast_arc::<T>()?;
            Some(Box::new(upcast(concrete)) as Box<dyn Any + Send + Sync>)
        });
        self.descriptor.capabilities.push(CapabilityCast {
            capability: C::capability_name(),
            cast: Some(cast),
        });
        self
    }

    /// Declare an implemented capability with a pre-built cast
    ///
    /// Without a cast the declaration is structural only: the type is
    /// assignable to the capability but [`Object::cast`] yields `None`.
    #[must_use]
    pub fn implements_name(mut self, capability: TypeName, cast: Option<CastFn>) -> Self {
        self.descriptor
            .capabilities
            .push(CapabilityCast { capability, cast });
        self
    }

    /// Declare an adapter type for a role
    #[must_use]
    pub fn adapter(mut self, role: impl Into<String>, adapter: TypeName) -> Self {
        self.descriptor.adapters.push((role.into(), adapter));
        self
    }

    /// Declare a post-activation hook
    #[must_use]
    pub fn activation_provider(mut self, provider: Arc<dyn ActivationProvider>) -> Self {
        self.descriptor.activation_providers.push(provider);
        self
    }

    /// Declare the local text conversion for this type
    #[must_use]
    pub fn parse_with<F>(mut self, parse: F) -> Self
    where
        F: Fn(&str) -> Result<T> + Send + Sync + 'static,
    {
        self.descriptor.parser = Some(Arc::new(move |text: &str| {
            parse(text).map(|value| Box::new(value) as Box<dyn Component>)
        }));
        self
    }

    /// Declare the default instance (value types)
    #[must_use]
    pub fn default_with<F>(mut self, create: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.descriptor.default = Some(Arc::new(move || Box::new(create()) as Box<dyn Component>));
        self
    }

    pub fn build(self) -> TypeDescriptor {
        self.descriptor
    }
}
