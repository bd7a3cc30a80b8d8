//! Components, objects and capabilities
//!
//! A [`Component`] is any `Send + Sync + 'static` Rust value. An [`Object`]
//! pairs a shared component with the [`TypeDescriptor`] that describes it,
//! which is what makes dynamic assignability checks, capability casts and
//! member invocation possible without runtime reflection.

use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use downcast_rs::{DowncastSync, impl_downcast};

use crate::entities::TypeDescriptor;
use crate::error::{Error, Result};
use crate::value_objects::{TypeName, Value};

/// Marker trait for activatable values
pub trait Component: DowncastSync {}
impl_downcast!(sync Component);

impl<T: Send + Sync + 'static> Component for T {}

/// A capability is a trait object type with a registered qualified name
///
/// Implemented on the trait object itself:
///
/// ```
/// use activa_domain::entities::Capability;
/// use activa_domain::value_objects::TypeName;
///
/// pub trait Color: Send + Sync {
///     fn name(&self) -> String;
/// }
///
/// impl Capability for dyn Color {
///     fn capability_name() -> TypeName {
///         TypeName::new("urn:demo", "Color")
///     }
/// }
/// ```
pub trait Capability: Send + Sync + 'static {
    /// Qualified name of the capability
    fn capability_name() -> TypeName;
}

/// Type-erased cast from an object to `Arc<dyn C>` (boxed as `Any`)
pub type CastFn = Arc<dyn Fn(&Object) -> Option<Box<dyn Any + Send + Sync>> + Send + Sync>;

/// Shared component plus its descriptor
#[derive(Clone)]
pub struct Object {
    value: Arc<dyn Component>,
    descriptor: Arc<TypeDescriptor>,
}

impl Object {
    /// Pair a shared component with its descriptor
    pub fn new(descriptor: Arc<TypeDescriptor>, value: Arc<dyn Component>) -> Self {
        Self { value, descriptor }
    }

    /// Pair a freshly constructed component with its descriptor
    pub fn from_boxed(descriptor: Arc<TypeDescriptor>, value: Box<dyn Component>) -> Self {
        Self::new(descriptor, Arc::from(value))
    }

    /// Wrap a typed value, checking it is the type the descriptor describes
    pub fn wrap<T: Component>(descriptor: Arc<TypeDescriptor>, value: T) -> Result<Self> {
        match descriptor.rust_type_id() {
            Some(id) if id == TypeId::of::<T>() => Ok(Self::new(descriptor, Arc::new(value))),
            _ => Err(Error::invalid_argument(format!(
                "{} does not describe Rust type {}",
                descriptor.name(),
                std::any::type_name::<T>()
            ))),
        }
    }

    /// Qualified name of the object's type
    pub fn type_name(&self) -> &TypeName {
        self.descriptor.name()
    }

    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.descriptor
    }

    /// Borrow the underlying component
    pub fn component(&self) -> &dyn Component {
        &*self.value
    }

    pub fn is<T: Component>(&self) -> bool {
        self.component().is::<T>()
    }

    pub fn downcast_ref<T: Component>(&self) -> Option<&T> {
        self.component().downcast_ref::<T>()
    }

    pub fn downcast_arc<T: Component>(&self) -> Option<Arc<T>> {
        self.value.clone().downcast_arc::<T>().ok()
    }

    /// Whether the descriptor itself names `type_name` as its type, a base or a capability
    ///
    /// Inherited capabilities need the catalog's view of the lineage.
    pub fn satisfies(&self, type_name: &TypeName) -> bool {
        self.descriptor.is_assignable_to(type_name)
    }

    /// Typed view of the object as capability `C`
    pub fn cast<C: Capability + ?Sized>(&self) -> Option<Arc<C>> {
        let cast = self.descriptor.capability_cast(&C::capability_name())?;
        let boxed = cast(self)?;
        boxed.downcast::<Arc<C>>().ok().map(|arc| *arc)
    }

    /// Invoke an instance member by name
    pub fn invoke(&self, member: &str, args: &[Value]) -> Result<Value> {
        let method = self
            .descriptor
            .find_instance_method(member, args.len())
            .ok_or_else(|| {
                Error::not_found(format!(
                    "member '{member}/{}' on {}",
                    args.len(),
                    self.type_name()
                ))
            })?;
        (method.invoke())(self.component(), args)
    }

    /// Identity comparison of the underlying component
    pub fn ptr_eq(&self, other: &Object) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.value), Arc::as_ptr(&other.value))
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Object({})", self.type_name())
    }
}
