//! Unit tests for proxy synthesis

use std::sync::Arc;

use activa_application::ForwardingProxy;
use activa_domain::error::Error;
use activa_domain::value_objects::{ProxyFallback, Value};

use crate::test_utils::{
    Color, Cube, Harness, Paint, Red, color_name, fixture_module, lineage_module, name,
    shape_name,
};

#[test]
fn test_default_fallback_never_throws_on_unmatched_member() {
    let harness = Harness::standard();
    let paint = harness.object(Paint);

    let proxy = harness
        .engine
        .implement(&paint, &color_name(), ProxyFallback::CreateDefault)
        .unwrap()
        .unwrap();

    assert_eq!(proxy.invoke("name", &[]).unwrap(), Value::from("paint"));
    for _ in 0..3 {
        assert_eq!(proxy.invoke("intensity", &[]).unwrap(), Value::Int(0));
    }
}

#[test]
fn test_throw_fallback_always_throws_on_unmatched_member() {
    let harness = Harness::standard();
    let paint = harness.object(Paint);

    let proxy = harness
        .engine
        .implement(&paint, &color_name(), ProxyFallback::ThrowException)
        .unwrap()
        .unwrap();

    assert_eq!(proxy.invoke("name", &[]).unwrap(), Value::from("paint"));
    for _ in 0..3 {
        assert!(matches!(
            proxy.invoke("intensity", &[]),
            Err(Error::NotImplemented { member, .. }) if member == "intensity"
        ));
    }
}

#[test]
fn test_none_fallback_yields_no_proxy() {
    let harness = Harness::standard();
    let paint = harness.object(Paint);

    assert!(
        harness
            .engine
            .implement(&paint, &color_name(), ProxyFallback::None)
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_implementor_is_returned_unchanged() {
    let harness = Harness::standard();
    let red = harness.object(Red);

    let same = harness
        .engine
        .implement(&red, &color_name(), ProxyFallback::None)
        .unwrap()
        .unwrap();

    assert!(same.ptr_eq(&red));
}

#[test]
fn test_implementor_of_derived_capability_is_returned_unchanged() {
    let harness = Harness::new([fixture_module(), lineage_module()]);
    let cube = harness.object(Cube);

    for fallback in [ProxyFallback::CreateDefault, ProxyFallback::None] {
        let same = harness
            .engine
            .implement(&cube, &shape_name(), fallback)
            .unwrap()
            .unwrap();
        assert!(same.ptr_eq(&cube));
        assert_eq!(same.type_name(), &name("Cube"));
    }
    assert_eq!(harness.proxies.cached(), 0);
}

#[test]
fn test_repeated_implement_shares_dispatch_table() {
    let harness = Harness::standard();

    let first = harness
        .engine
        .implement(&harness.object(Paint), &color_name(), ProxyFallback::CreateDefault)
        .unwrap()
        .unwrap();
    let second = harness
        .engine
        .implement(&harness.object(Paint), &color_name(), ProxyFallback::CreateDefault)
        .unwrap()
        .unwrap();

    let first = first.downcast_ref::<ForwardingProxy>().unwrap();
    let second = second.downcast_ref::<ForwardingProxy>().unwrap();
    assert!(Arc::ptr_eq(first.table(), second.table()));
    assert!(!first.wrapped().ptr_eq(second.wrapped()));
    assert_eq!(harness.proxies.cached(), 1);
}

#[test]
fn test_concurrent_implement_shares_one_dispatch_table() {
    let harness = Harness::standard();
    let barrier = std::sync::Barrier::new(8);

    let tables = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let harness = &harness;
                let barrier = &barrier;
                scope.spawn(move || {
                    let paint = harness.object(Paint);
                    barrier.wait();
                    let proxy = harness
                        .engine
                        .implement(&paint, &color_name(), ProxyFallback::CreateDefault)
                        .unwrap()
                        .unwrap();
                    Arc::clone(proxy.downcast_ref::<ForwardingProxy>().unwrap().table())
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect::<Vec<_>>()
    });

    assert!(tables.iter().all(|table| Arc::ptr_eq(table, &tables[0])));
    assert_eq!(harness.proxies.cached(), 1);
}

#[test]
fn test_failed_synthesis_is_memoized() {
    let harness = Harness::standard();
    let paint = harness.object(Paint);

    for _ in 0..2 {
        assert!(
            harness
                .engine
                .implement(&paint, &color_name(), ProxyFallback::None)
                .unwrap()
                .is_none()
        );
    }
    assert_eq!(harness.proxies.cached(), 1);
}

#[test]
fn test_proxy_bridges_to_typed_capability() {
    let harness = Harness::standard();
    let paint = harness.object(Paint);

    let color: Arc<dyn Color> = harness
        .engine
        .implement_as::<dyn Color>(&paint, ProxyFallback::CreateDefault)
        .unwrap()
        .unwrap();

    assert_eq!(color.name(), "paint");
    assert_eq!(color.intensity(), 0);
}

#[test]
fn test_proxy_type_is_named_after_source_and_target() {
    let harness = Harness::standard();

    let proxy = harness
        .engine
        .implement(&harness.object(Paint), &color_name(), ProxyFallback::CreateDefault)
        .unwrap()
        .unwrap();

    assert_eq!(proxy.type_name().local_name(), "PaintAsIColor");
    assert!(proxy.satisfies(&color_name()));
}

#[test]
fn test_value_type_and_unknown_targets_are_rejected() {
    let harness = Harness::standard();
    let paint = harness.object(Paint);

    for target in [name("IPoint"), name("Shade"), name("Unknown")] {
        assert!(
            matches!(
                harness
                    .engine
                    .implement(&paint, &target, ProxyFallback::CreateDefault),
                Err(Error::InvalidArgument { .. })
            ),
            "{target}"
        );
    }
}

#[test]
fn test_unknown_target_is_rejected_under_throw_policy() {
    let harness = Harness::standard();
    let paint = harness.object(Paint);

    let error = harness
        .proxies
        .implement(&paint, &name("Unknown"), ProxyFallback::ThrowException)
        .unwrap_err();

    assert!(matches!(error, Error::InvalidArgument { .. }));
}
