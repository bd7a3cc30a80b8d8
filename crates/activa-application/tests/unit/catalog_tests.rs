//! Unit tests for the module set and type catalog

use activa_domain::entities::TypeDescriptor;
use activa_domain::{ModuleDescriptor, TypeName};

use crate::test_utils::{
    Cube, Harness, Paint, Red, color_name, fixture_module, lineage_module, name, shape_name,
    solid_name,
};

#[test]
fn test_type_lookup_prefers_exact_then_unique_case_insensitive() {
    let harness = Harness::standard();

    assert!(harness.catalog.resolve_type(&name("Widget")).is_some());
    assert_eq!(
        harness.catalog.resolve_type(&name("widget")).unwrap().name(),
        &name("Widget")
    );
    assert!(harness.catalog.resolve_type(&TypeName::new("urn:other", "Widget")).is_none());
}

#[test]
fn test_ambiguous_case_insensitive_lookup_resolves_to_none() {
    let harness = Harness::new([ModuleDescriptor::new("twins")
        .with_type(TypeDescriptor::class::<Red>(name("Twin")).build())
        .with_type(TypeDescriptor::class::<Paint>(name("TWIN")).build())]);

    assert!(harness.catalog.resolve_type(&name("twin")).is_none());
    assert!(harness.catalog.resolve_type(&name("TWIN")).is_some());
}

#[test]
fn test_duplicate_module_names_register_once() {
    let harness = Harness::standard();

    assert!(!harness.modules.register(fixture_module()));
    assert_eq!(harness.modules.len(), 1);
}

#[test]
fn test_late_modules_become_resolvable() {
    let harness = Harness::standard();
    assert!(harness.catalog.resolve_type(&name("Late")).is_none());

    harness.modules.register(
        ModuleDescriptor::new("late").with_type(TypeDescriptor::class::<Paint>(name("Late")).build()),
    );

    assert!(harness.catalog.resolve_type(&name("Late")).is_some());
}

#[test]
fn test_capability_members_include_bases() {
    let harness = Harness::new([fixture_module().with_capability(
        activa_domain::CapabilityDescriptor::new(name("IBrightColor"))
            .base(color_name())
            .member("glow", vec![], activa_domain::ValueType::Bool),
    )]);

    let members = harness
        .catalog
        .capability_members(&name("IBrightColor"))
        .unwrap();
    let names: Vec<&str> = members.iter().map(|m| m.name()).collect();

    assert_eq!(names, vec!["glow", "name", "intensity"]);
    assert!(harness.catalog.capability_reaches(&name("IBrightColor"), &color_name()));
    assert!(!harness.catalog.capability_reaches(&color_name(), &name("IBrightColor")));
}

#[test]
fn test_builtin_roles_are_known() {
    let harness = Harness::new(std::iter::empty());

    for role in ["Builder", "StreamingSource", "ActivationProvider"] {
        assert!(harness.catalog.role(role).is_some(), "{role}");
    }
    assert!(harness.catalog.role("activationprovider").unwrap().capability().is_some());
}

#[test]
fn test_implementing_a_capability_satisfies_its_bases() {
    let harness = Harness::new([fixture_module(), lineage_module()]);
    let cube = harness.object(Cube);

    assert!(cube.satisfies(&solid_name()));
    assert!(!cube.satisfies(&shape_name()));
    assert!(harness.catalog.satisfies(&cube, &solid_name()));
    assert!(harness.catalog.satisfies(&cube, &shape_name()));
    assert!(!harness.catalog.satisfies(&cube, &color_name()));
    assert!(!harness.catalog.satisfies(&harness.object(Paint), &shape_name()));
}
