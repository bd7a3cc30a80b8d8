//! Unit tests for adapter roles

use activa_domain::entities::{MemberSignature, RoleDescriptor, TypeDescriptor, TypeKind};
use activa_domain::{TypeName, Value, ValueType};

struct Builder;

fn builder_descriptor() -> TypeDescriptor {
    TypeDescriptor::class::<Builder>(TypeName::new("urn:test", "WidgetBuilder"))
        .method("build", vec![], ValueType::Any, |_: &Builder, _| Ok(Value::Null))
        .build()
}

#[test]
fn test_role_without_rules_accepts_any_candidate() {
    let role = RoleDescriptor::new("Builder");
    assert!(role.accepts(&builder_descriptor()));
}

#[test]
fn test_validity_predicate_filters_candidates() {
    let role = RoleDescriptor::new("Builder").with_validity(|d| d.kind() == TypeKind::Abstract);
    assert!(!role.accepts(&builder_descriptor()));
}

#[test]
fn test_expected_methods_must_be_present() {
    let build = MemberSignature::new("build", vec![], ValueType::Any);
    let finish = MemberSignature::new("finish", vec![], ValueType::Void);
    assert!(
        RoleDescriptor::new("Builder")
            .expect_method(build)
            .accepts(&builder_descriptor())
    );
    assert!(
        !RoleDescriptor::new("Builder")
            .expect_method(finish)
            .accepts(&builder_descriptor())
    );
}
