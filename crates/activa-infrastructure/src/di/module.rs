//! Infrastructure module registration
//!
//! Declares this crate's activatable types and links the declaration into
//! [`LINKED_MODULES`] so that [`bootstrap`](crate::di::bootstrap()) picks it
//! up without explicit registration.

use std::sync::Arc;

use activa_application::catalog::{LINKED_MODULES, ModuleEntry};
use activa_domain::entities::{ModuleDescriptor, Object, TypeDescriptor};
use activa_domain::error::Result;
use activa_domain::ports::ExceptionHandler;
use activa_domain::value_objects::TypeName;

use crate::constants::{INFRASTRUCTURE_MODULE, INFRASTRUCTURE_NAMESPACE};
use crate::di::TracingExceptionHandler;

#[linkme::distributed_slice(LINKED_MODULES)]
static INFRASTRUCTURE: ModuleEntry = ModuleEntry {
    name: INFRASTRUCTURE_MODULE,
    factory: infrastructure_module,
};

/// Qualified name of [`TracingExceptionHandler`]
pub fn tracing_exception_handler_type() -> TypeName {
    TypeName::new(INFRASTRUCTURE_NAMESPACE, "TracingExceptionHandler")
}

fn tracing_exception_handler_descriptor() -> TypeDescriptor {
    TypeDescriptor::class::<TracingExceptionHandler>(tracing_exception_handler_type())
        .constructor(vec![], |_| Ok(TracingExceptionHandler))
        .implements::<dyn ExceptionHandler, _>(|handler| handler as Arc<dyn ExceptionHandler>)
        .build()
}

/// A [`TracingExceptionHandler`] usable without registering this module
pub fn tracing_exception_handler() -> Result<Object> {
    Object::wrap(
        Arc::new(tracing_exception_handler_descriptor()),
        TracingExceptionHandler,
    )
}

/// Declarations contributed by this crate
pub fn infrastructure_module() -> ModuleDescriptor {
    ModuleDescriptor::new(INFRASTRUCTURE_MODULE).with_type(tracing_exception_handler_descriptor())
}
