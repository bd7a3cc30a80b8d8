//! # Activa
//!
//! Runtime component activation over an explicit metadata model.
//!
//! Given a type name and a bag of named values, the activation engine picks
//! a constructor, binds arguments, fetches missing collaborators from a
//! service directory, assigns the remaining values to properties and runs
//! post-activation hooks. Adapter resolution finds role implementations for
//! arbitrary objects and synthesizes forwarding proxies where none exist.
//! The provider registry discovers named providers declared by modules.
//!
//! ## Example
//!
//! ```
//! use activa::prelude::*;
//!
//! struct Greeter {
//!     greeting: String,
//!     excited: bool,
//! }
//!
//! let runtime = bootstrap(AppConfig::default()).unwrap();
//! runtime.register_module(
//!     ModuleDescriptor::new("greetings").with_type(
//!         TypeDescriptor::class::<Greeter>(TypeName::new("urn:demo", "Greeter"))
//!             .constructor(
//!                 vec![ParameterDescriptor::new("greeting", ValueType::Text)],
//!                 |args| Ok(Greeter { greeting: args.text(0)?, excited: false }),
//!             )
//!             .property("Excited", ValueType::Bool, |greeter: &mut Greeter, value| {
//!                 greeter.excited = value.as_bool().unwrap_or_default();
//!                 Ok(())
//!             })
//!             .build(),
//!     ),
//! );
//!
//! let mut values =
//!     ValueBag::from_json(serde_json::json!({ "greeting": "hello", "excited": true })).unwrap();
//! let greeter = runtime
//!     .create_instance(&TypeName::parse("urn:demo:Greeter").unwrap(), &mut values)
//!     .unwrap();
//!
//! let greeter = greeter.downcast_ref::<Greeter>().unwrap();
//! assert_eq!(greeter.greeting, "hello");
//! assert!(greeter.excited);
//! assert!(values.is_empty());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Type names, values, descriptors, ports and the error taxonomy
//! - `application` - Type catalog, activation engine, adapters, proxies, provider registry
//! - `infrastructure` - Configuration, logging, service directories and bootstrap

/// Domain layer - metadata model, ports and errors
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use activa_domain::*;
}

/// Application layer - activation, adaptation and discovery engines
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use activa_application::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use activa_infrastructure::*;
}

pub use activa_application::{
    ActivationEngine, ActivationOptions, AdapterResolver, ProviderCriteria, ProviderInfo,
    ProviderRegistry, ProxyFactory, ServiceScope, TypeCatalog,
};
pub use activa_domain::error::{Error, Result};
pub use activa_infrastructure::{AppConfig, Runtime, bootstrap};

/// Common imports for hosts declaring and activating components
pub mod prelude {
    pub use activa_application::{
        ActivationEngine, ActivationOptions, LINKED_MODULES, ModuleEntry, ProviderCriteria,
        ProviderRegistry, ServiceScope,
    };
    pub use activa_domain::entities::{
        Capability, CapabilityDescriptor, Component, MemberSignature, ModuleDescriptor, Object,
        ParameterDescriptor, ProviderDeclaration, RoleDescriptor, TypeDescriptor,
    };
    pub use activa_domain::error::{Error, Result};
    pub use activa_domain::ports::{
        ActivationContext, ActivationProvider, ExceptionHandler, PopulationCallback,
        PropertyActivationProvider, ServiceDirectory, ServiceDirectoryExt,
    };
    pub use activa_domain::value_objects::{ProxyFallback, TypeName, Value, ValueBag, ValueType};
    pub use activa_infrastructure::{AppConfig, Runtime, ServiceCatalog, bootstrap};
}
