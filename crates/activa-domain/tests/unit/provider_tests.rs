//! Unit tests for provider declarations

use std::sync::Arc;

use activa_domain::constants::{CRITERIA_CONTENT_TYPE, CRITERIA_EXTENSION};
use activa_domain::entities::{Object, ProviderDeclaration, ProviderKind, TypeDescriptor};
use activa_domain::TypeName;

struct Codec;

fn codec_name() -> TypeName {
    TypeName::new("urn:test", "JsonCodec")
}

fn codec_object() -> Object {
    let descriptor = Arc::new(TypeDescriptor::class::<Codec>(codec_name()).build());
    Object::wrap(descriptor, Codec).unwrap()
}

fn capability() -> TypeName {
    TypeName::new("urn:test", "ICodec")
}

#[test]
fn test_field_provider_claims_identity_only() {
    let value = codec_object();
    let provider = ProviderDeclaration::field(
        TypeName::new("urn:test", "json"),
        capability(),
        value.clone(),
    );
    assert_eq!(provider.kind(), ProviderKind::Field);
    assert!(provider.is_value(&value));
    assert!(!provider.is_value(&codec_object()));
    assert_eq!(provider.provider_type(), Some(&codec_name()));
}

#[test]
fn test_type_provider_matches_instances_of_its_type() {
    let provider =
        ProviderDeclaration::of_type(TypeName::new("urn:test", "json"), capability(), codec_name());
    assert_eq!(provider.kind(), ProviderKind::Type);
    assert!(provider.is_value(&codec_object()));
}

#[test]
fn test_type_provider_match_ignores_case_of_local_name() {
    let provider = ProviderDeclaration::of_type(
        TypeName::new("urn:test", "json"),
        capability(),
        TypeName::new("urn:test", "jsoncodec"),
    );
    assert!(provider.is_value(&codec_object()));

    let elsewhere = ProviderDeclaration::of_type(
        TypeName::new("urn:test", "json"),
        capability(),
        TypeName::new("urn:other", "JsonCodec"),
    );
    assert!(!elsewhere.is_value(&codec_object()));
}

#[test]
fn test_method_provider_never_claims_identity() {
    let provider = ProviderDeclaration::method(
        TypeName::new("urn:test", "json"),
        capability(),
        || Ok(codec_object()),
    );
    assert_eq!(provider.kind(), ProviderKind::Method);
    assert!(!provider.is_value(&codec_object()));
    assert!(provider.provider_type().is_none());
}

#[test]
fn test_member_defaults_to_local_name() {
    let provider =
        ProviderDeclaration::of_type(TypeName::new("urn:test", "json"), capability(), codec_name());
    assert_eq!(provider.member(), "json");
    let provider = provider.declared_by("JSON_CODEC");
    assert_eq!(provider.member(), "JSON_CODEC");
}

#[test]
fn test_criteria_builders() {
    let provider =
        ProviderDeclaration::of_type(TypeName::new("urn:test", "json"), capability(), codec_name())
            .extension(".json;.jsonc")
            .content_type("application/json")
            .criterion("charset", "utf-8");
    let criteria = provider.criteria();
    assert_eq!(criteria.get(CRITERIA_EXTENSION).unwrap(), ".json;.jsonc");
    assert_eq!(
        criteria.get(CRITERIA_CONTENT_TYPE).unwrap(),
        "application/json"
    );
    assert_eq!(criteria.get("charset").unwrap(), "utf-8");
}
