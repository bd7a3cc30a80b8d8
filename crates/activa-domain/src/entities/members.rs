//! Member descriptors: constructors, parameters, properties and methods

use std::fmt;
use std::sync::Arc;

use crate::entities::{Capability, Component, Object};
use crate::error::{Error, Result};
use crate::ports::PropertyActivationProvider;
use crate::value_objects::{Value, ValueType};

/// Erased constructor or factory; `None` is a null result
pub type ConstructFn =
    Arc<dyn Fn(&mut Arguments) -> Result<Option<Box<dyn Component>>> + Send + Sync>;

/// Erased property setter
pub type SetterFn = Arc<dyn Fn(&mut dyn Component, Value) -> Result<()> + Send + Sync>;

/// Erased member invocation (static members ignore the receiver)
pub type InvokeFn = Arc<dyn Fn(&dyn Component, &[Value]) -> Result<Value> + Send + Sync>;

/// Name, parameter types and return type of a member
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberSignature {
    name: String,
    params: Vec<ValueType>,
    returns: ValueType,
}

impl MemberSignature {
    pub fn new(name: impl Into<String>, params: Vec<ValueType>, returns: ValueType) -> Self {
        Self {
            name: name.into(),
            params,
            returns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn params(&self) -> &[ValueType] {
        &self.params
    }

    pub fn returns(&self) -> &ValueType {
        &self.returns
    }
}

impl fmt::Display for MemberSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") -> {}", self.returns)
    }
}

/// Formal parameter of a constructor or factory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterDescriptor {
    name: String,
    ty: ValueType,
    optional: bool,
    subscription_required: bool,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, ty: ValueType) -> Self {
        Self {
            name: name.into(),
            ty,
            optional: false,
            subscription_required: false,
        }
    }

    /// Unresolved optional collaborators bind as `Null`
    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Unresolved values are always a hard failure
    #[must_use]
    pub fn subscription_required(mut self) -> Self {
        self.subscription_required = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &ValueType {
        &self.ty
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_subscription_required(&self) -> bool {
        self.subscription_required
    }
}

/// How a construction path is declared
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorKind {
    /// Instance constructor
    Constructor,
    /// Static factory method
    Factory,
}

/// Construction path of a type
#[derive(Clone)]
pub struct ConstructorDescriptor {
    name: String,
    kind: ConstructorKind,
    params: Vec<ParameterDescriptor>,
    preferred: bool,
    invoke: ConstructFn,
}

impl ConstructorDescriptor {
    pub fn new(
        name: impl Into<String>,
        kind: ConstructorKind,
        params: Vec<ParameterDescriptor>,
        invoke: ConstructFn,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            params,
            preferred: false,
            invoke,
        }
    }

    /// Mark as the explicit activation constructor
    #[must_use]
    pub fn preferred(mut self) -> Self {
        self.preferred = true;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ConstructorKind {
        self.kind
    }

    pub fn params(&self) -> &[ParameterDescriptor] {
        &self.params
    }

    pub fn is_preferred(&self) -> bool {
        self.preferred
    }

    pub fn invoke(&self, args: &mut Arguments) -> Result<Option<Box<dyn Component>>> {
        (self.invoke)(args)
    }
}

impl fmt::Debug for ConstructorDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstructorDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("params", &self.params)
            .field("preferred", &self.preferred)
            .finish_non_exhaustive()
    }
}

/// Settable member
#[derive(Clone)]
pub struct PropertyDescriptor {
    name: String,
    ty: ValueType,
    setter: SetterFn,
    hooks: Vec<Arc<dyn PropertyActivationProvider>>,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, ty: ValueType, setter: SetterFn) -> Self {
        Self {
            name: name.into(),
            ty,
            setter,
            hooks: Vec::new(),
        }
    }

    pub(crate) fn push_hook(&mut self, hook: Arc<dyn PropertyActivationProvider>) {
        self.hooks.push(hook);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &ValueType {
        &self.ty
    }

    /// Property-level activation hooks declared on this member
    pub fn hooks(&self) -> &[Arc<dyn PropertyActivationProvider>] {
        &self.hooks
    }

    pub fn set(&self, component: &mut dyn Component, value: Value) -> Result<()> {
        (self.setter)(component, value)
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("ty", &self.ty)
            .field("hooks", &self.hooks.len())
            .finish_non_exhaustive()
    }
}

/// Invocable member
#[derive(Clone)]
pub struct MethodDescriptor {
    signature: MemberSignature,
    is_static: bool,
    invoke: InvokeFn,
}

impl MethodDescriptor {
    pub fn new(signature: MemberSignature, is_static: bool, invoke: InvokeFn) -> Self {
        Self {
            signature,
            is_static,
            invoke,
        }
    }

    pub fn signature(&self) -> &MemberSignature {
        &self.signature
    }

    pub fn name(&self) -> &str {
        self.signature.name()
    }

    pub fn is_static(&self) -> bool {
        self.is_static
    }

    pub fn invoke(&self) -> &InvokeFn {
        &self.invoke
    }
}

impl fmt::Debug for MethodDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDescriptor")
            .field("signature", &self.signature)
            .field("is_static", &self.is_static)
            .finish_non_exhaustive()
    }
}

/// Bound constructor arguments, in parameter order
#[derive(Debug, Clone, Default)]
pub struct Arguments {
    names: Vec<String>,
    values: Vec<Value>,
}

impl Arguments {
    /// Positional arguments without parameter names
    pub fn new(values: Vec<Value>) -> Self {
        Self {
            names: Vec::new(),
            values,
        }
    }

    /// Arguments bound against named parameters
    pub fn named(names: Vec<String>, values: Vec<Value>) -> Self {
        Self { names, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    /// Move a value out, leaving `Null`
    pub fn take(&mut self, index: usize) -> Value {
        self.values
            .get_mut(index)
            .map(std::mem::take)
            .unwrap_or_default()
    }

    pub fn bool(&self, index: usize) -> Result<bool> {
        self.value(index)?
            .as_bool()
            .ok_or_else(|| self.mismatch(index, "bool"))
    }

    pub fn int(&self, index: usize) -> Result<i64> {
        self.value(index)?
            .as_i64()
            .ok_or_else(|| self.mismatch(index, "int"))
    }

    pub fn float(&self, index: usize) -> Result<f64> {
        self.value(index)?
            .as_f64()
            .ok_or_else(|| self.mismatch(index, "float"))
    }

    pub fn text(&self, index: usize) -> Result<String> {
        self.value(index)?
            .as_text()
            .map(str::to_string)
            .ok_or_else(|| self.mismatch(index, "text"))
    }

    pub fn optional_text(&self, index: usize) -> Result<Option<String>> {
        match self.value(index)? {
            Value::Null => Ok(None),
            _ => self.text(index).map(Some),
        }
    }

    pub fn object(&self, index: usize) -> Result<Object> {
        self.value(index)?
            .as_object()
            .cloned()
            .ok_or_else(|| self.mismatch(index, "object"))
    }

    pub fn optional_object(&self, index: usize) -> Result<Option<Object>> {
        match self.value(index)? {
            Value::Null => Ok(None),
            _ => self.object(index).map(Some),
        }
    }

    /// Typed capability view of an object argument
    pub fn capability<C: Capability + ?Sized>(&self, index: usize) -> Result<Arc<C>> {
        self.object(index)?
            .cast::<C>()
            .ok_or_else(|| self.mismatch(index, &C::capability_name().to_string()))
    }

    pub fn optional_capability<C: Capability + ?Sized>(
        &self,
        index: usize,
    ) -> Result<Option<Arc<C>>> {
        match self.value(index)? {
            Value::Null => Ok(None),
            _ => self.capability::<C>(index).map(Some),
        }
    }

    /// Concrete component behind an object argument
    pub fn component<T: Component>(&self, index: usize) -> Result<Arc<T>> {
        self.object(index)?
            .downcast_arc::<T>()
            .ok_or_else(|| self.mismatch(index, std::any::type_name::<T>()))
    }

    fn value(&self, index: usize) -> Result<&Value> {
        self.values
            .get(index)
            .ok_or_else(|| Error::invalid_argument(format!("no argument at position {index}")))
    }

    fn mismatch(&self, index: usize, expected: &str) -> Error {
        let member = self
            .names
            .get(index)
            .cloned()
            .unwrap_or_else(|| index.to_string());
        let actual = self.values.get(index).map_or("nothing", Value::kind_name);
        Error::conversion(member, format!("expected {expected}, got {actual}"))
    }
}
