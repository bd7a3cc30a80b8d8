//! Runtime Bootstrap and Service Directory Tests

use std::sync::Arc;

use activa_domain::entities::{
    Capability, Component, ModuleDescriptor, ParameterDescriptor, TypeDescriptor,
};
use activa_domain::error::{Error, Result};
use activa_domain::ports::{
    ActivationContext, ActivationProvider, ExceptionHandler, PopulationCallback,
    ServiceDirectory, ServiceDirectoryExt,
};
use activa_domain::value_objects::{ProxyFallback, TypeName, Value, ValueBag, ValueType};
use activa_infrastructure::config::AppConfig;
use activa_infrastructure::constants::INFRASTRUCTURE_MODULE;
use activa_infrastructure::di::{
    ServiceCatalog, ServiceChain, TracingExceptionHandler, TracingPopulationCallback, bootstrap,
    tracing_exception_handler_type,
};

const NS: &str = "urn:infra-test";

fn name(local: &str) -> TypeName {
    TypeName::new(NS, local)
}

#[derive(Default)]
struct Gauge {
    size: i64,
    label: String,
    activated: bool,
}

#[allow(dead_code)]
struct Token(&'static str);

struct Broken;

impl ActivationProvider for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    fn activate(&self, _: &mut dyn Component, _: &ActivationContext<'_>) -> Result<()> {
        Err(Error::internal("broken hook"))
    }
}

struct MarkActivated;

impl ActivationProvider for MarkActivated {
    fn activate(&self, component: &mut dyn Component, _: &ActivationContext<'_>) -> Result<()> {
        if let Some(gauge) = component.downcast_mut::<Gauge>() {
            gauge.activated = true;
        }
        Ok(())
    }
}

fn gauge_module() -> ModuleDescriptor {
    ModuleDescriptor::new("gauges")
        .with_type(
            TypeDescriptor::class::<Gauge>(name("Gauge"))
                .constructor(
                    vec![ParameterDescriptor::new("size", ValueType::Int)],
                    |args| {
                        Ok(Gauge {
                            size: args.int(0)?,
                            ..Gauge::default()
                        })
                    },
                )
                .property("Label", ValueType::Text, |gauge: &mut Gauge, value| {
                    gauge.label = value.into_text().unwrap_or_default();
                    Ok(())
                })
                .activation_provider(Arc::new(Broken))
                .activation_provider(Arc::new(MarkActivated))
                .build(),
        )
        .with_type(
            TypeDescriptor::class::<Token>(name("Token"))
                .constructor(vec![], |_| Ok(Token("token")))
                .build(),
        )
}

fn unlinked_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.activation.link_static_modules = false;
    config
}

fn forgiving_config() -> AppConfig {
    let mut config = unlinked_config();
    config.activation.handle_hook_failures = true;
    config
}


#[test]
fn test_bootstrap_registers_linked_modules() {
    let runtime = bootstrap(AppConfig::default()).unwrap();

    assert!(runtime.modules().contains(INFRASTRUCTURE_MODULE));
    let handler = runtime
        .create_instance(&tracing_exception_handler_type(), &mut ValueBag::new())
        .unwrap();
    assert!(handler.cast::<dyn ExceptionHandler>().is_some());
}

#[test]
fn test_bootstrap_without_linked_modules() {
    let runtime = bootstrap(unlinked_config()).unwrap();

    assert!(runtime.modules().is_empty());
    let error = runtime
        .create_instance(&tracing_exception_handler_type(), &mut ValueBag::new())
        .unwrap_err();
    assert!(error.is_not_found());
}

#[test]
fn test_bootstrap_rejects_invalid_config() {
    let mut config = AppConfig::default();
    config.logging.level = "verbose".to_string();

    assert!(matches!(
        bootstrap(config),
        Err(Error::Configuration { .. })
    ));
}

#[test]
fn test_register_module_once() {
    let runtime = bootstrap(unlinked_config()).unwrap();

    assert!(runtime.register_module(gauge_module()));
    assert!(!runtime.register_module(gauge_module()));
    assert_eq!(runtime.modules().len(), 1);
}

#[test]
fn test_failing_hook_fails_activation_by_default() {
    let runtime = bootstrap(unlinked_config()).unwrap();
    runtime.register_module(gauge_module());

    let error = runtime
        .create_instance(&name("Gauge"), &mut ValueBag::new().with("size", 3))
        .unwrap_err();

    assert!(matches!(
        error,
        Error::ActivationProvider { ref provider, .. } if provider == "broken"
    ));
}

#[test]
fn test_replaced_services_drop_the_configured_handler() {
    let runtime = bootstrap(forgiving_config())
        .unwrap()
        .with_services(Arc::new(ServiceCatalog::default()));
    runtime.register_module(gauge_module());

    let error = runtime
        .create_instance(&name("Gauge"), &mut ValueBag::new().with("size", 3))
        .unwrap_err();

    assert!(matches!(error, Error::ActivationProvider { .. }));
}

#[test]
fn test_tracing_handler_keeps_activation_going() {
    let runtime = bootstrap(forgiving_config()).unwrap();
    runtime.register_module(gauge_module());

    let gauge = runtime
        .create_instance(
            &name("Gauge"),
            &mut ValueBag::new().with("size", 3).with("label", "north"),
        )
        .unwrap();
    let gauge = gauge.downcast_ref::<Gauge>().unwrap();

    assert_eq!(gauge.size, 3);
    assert_eq!(gauge.label, "north");
    assert!(gauge.activated);
}

#[test]
fn test_lenient_population_ignores_unknown_members() {
    let runtime = bootstrap(forgiving_config()).unwrap();
    runtime.register_module(gauge_module());

    let mut bag = ValueBag::new().with("size", 1).with("colour", "blue");
    let gauge = runtime.create_instance(&name("Gauge"), &mut bag).unwrap();

    assert_eq!(gauge.downcast_ref::<Gauge>().unwrap().size, 1);
}

#[test]
fn test_strict_population_aborts_on_unknown_members() {
    let mut config = unlinked_config();
    config.activation.strict_population = true;
    let runtime = bootstrap(config).unwrap();
    runtime.register_module(gauge_module());

    let mut bag = ValueBag::new().with("size", 1).with("colour", "blue");
    let error = runtime.create_instance(&name("Gauge"), &mut bag).unwrap_err();

    assert!(matches!(error, Error::InvalidArgument { .. }));
    assert!(error.to_string().contains("colour"));
}

#[test]
fn test_population_callback_modes() {
    let lenient = TracingPopulationCallback::default();
    let strict = TracingPopulationCallback::new(true);
    let failure = Error::conversion("Label", "expected text");

    assert!(!lenient.is_strict());
    assert!(lenient.on_missing(&name("Gauge"), "x", &Value::Int(1)).is_ok());
    assert!(lenient.on_conversion_error(&name("Gauge"), "Label", &failure).is_ok());
    assert!(strict.on_missing(&name("Gauge"), "x", &Value::Int(1)).is_err());
    assert!(matches!(
        strict.on_conversion_error(&name("Gauge"), "Label", &failure),
        Err(Error::Conversion { .. })
    ));
}

#[test]
fn test_default_services_hold_no_exception_handler() {
    let runtime = bootstrap(unlinked_config()).unwrap();
    let services = runtime.services();

    assert!(services.service::<dyn ExceptionHandler>().is_none());
    assert!(services.get_service(&name("Unbound")).is_none());
}

#[test]
fn test_handle_hook_failures_installs_the_tracing_handler() {
    let runtime = bootstrap(forgiving_config()).unwrap();

    let handler = runtime.services().service::<dyn ExceptionHandler>();
    assert!(handler.is_some());
}

#[test]
fn test_catalog_binds_every_implemented_capability() {
    let runtime = bootstrap(AppConfig::default()).unwrap();
    let handler = runtime.object(TracingExceptionHandler).unwrap();

    let catalog = ServiceCatalog::builder().add(handler.clone()).build();

    let capability = <dyn ExceptionHandler as Capability>::capability_name();
    assert_eq!(catalog.capabilities().collect::<Vec<_>>(), vec![&capability]);
    assert!(catalog.get_service(&capability).unwrap().ptr_eq(&handler));
}

#[test]
fn test_catalog_explicit_binding_replaces_earlier() {
    let runtime = bootstrap(unlinked_config()).unwrap();
    runtime.register_module(gauge_module());
    let first = runtime.object(Token("first")).unwrap();
    let second = runtime.object(Token("second")).unwrap();

    let catalog = ServiceCatalog::builder()
        .bind(name("IThing"), first)
        .bind(name("IThing"), second.clone())
        .build();

    assert_eq!(catalog.len(), 1);
    assert!(catalog.get_service(&name("IThing")).unwrap().ptr_eq(&second));
}

#[test]
fn test_chain_returns_first_match() {
    let runtime = bootstrap(unlinked_config()).unwrap();
    runtime.register_module(gauge_module());
    let first = runtime.object(Token("first")).unwrap();
    let second = runtime.object(Token("second")).unwrap();
    let fallback = runtime.object(Token("fallback")).unwrap();

    let chain = ServiceChain::new()
        .then(Arc::new(ServiceCatalog::default()))
        .then(Arc::new(
            ServiceCatalog::builder()
                .bind(name("IThing"), first.clone())
                .build(),
        ))
        .then(Arc::new(
            ServiceCatalog::builder()
                .bind(name("IThing"), second)
                .bind(name("IOther"), fallback.clone())
                .build(),
        ));

    assert_eq!(chain.len(), 3);
    assert!(chain.get_service(&name("IThing")).unwrap().ptr_eq(&first));
    assert!(chain.get_service(&name("IOther")).unwrap().ptr_eq(&fallback));
    assert!(chain.get_service(&name("IMissing")).is_none());
}

#[test]
fn test_implement_uses_configured_fallback() {
    let runtime = bootstrap(AppConfig::default()).unwrap();
    let handler = runtime.object(TracingExceptionHandler).unwrap();

    let capability = <dyn ExceptionHandler as Capability>::capability_name();

    let view = runtime.implement(&handler, &capability).unwrap();

    assert!(view.is_some_and(|object| object.ptr_eq(&handler)));
    assert_eq!(
        runtime.config().activation.default_fallback,
        ProxyFallback::None
    );
}

#[test]
fn test_eager_scan_indexes_late_modules() {
    let mut config = unlinked_config();
    config.registry.eager_scan = true;
    let runtime = bootstrap(config).unwrap();

    runtime.register_module(gauge_module());

    assert_eq!(runtime.registry().indexed_modules(), 1);
}
