//! Unit tests for qualified type identifiers

use std::collections::HashSet;

use activa_domain::TypeName;

#[test]
fn test_parse_bare_local_name() {
    let name = TypeName::parse("Widget").unwrap();
    assert_eq!(name.namespace(), "");
    assert_eq!(name.local_name(), "Widget");
    assert_eq!(name.to_string(), "Widget");
}

#[test]
fn test_parse_rejects_empty_input() {
    assert!(TypeName::parse("").is_err());
    assert!(TypeName::parse("   ").is_err());
    assert!(TypeName::parse("ns:").is_err());
    assert!(TypeName::parse("{ns").is_err());
}

#[test]
fn test_equality_is_exact_but_matching_ignores_local_case() {
    let upper = TypeName::new("ns", "Widget");
    let lower = TypeName::new("ns", "widget");
    assert_ne!(upper, lower);
    assert!(upper.matches(&lower));
    assert!(!upper.matches(&TypeName::new("NS", "Widget")));
    assert!(upper.matches_local("WIDGET"));
}

#[test]
fn test_hash_set_distinguishes_case() {
    let set: HashSet<TypeName> = [TypeName::new("ns", "Widget"), TypeName::new("ns", "widget")]
        .into_iter()
        .collect();
    assert_eq!(set.len(), 2);
}

#[test]
fn test_lookup_key_folds_local_case() {
    assert_eq!(
        TypeName::new("ns", "Widget").lookup_key(),
        TypeName::new("ns", "WIDGET").lookup_key()
    );
}

#[test]
fn test_with_suffix_stays_in_namespace() {
    let adapter = TypeName::new("urn:demo", "Widget").with_suffix("Builder");
    assert_eq!(adapter, TypeName::new("urn:demo", "WidgetBuilder"));
}

#[test]
fn test_serde_uses_string_form() {
    let name = TypeName::new("urn:demo", "Widget");
    let json = serde_json::to_string(&name).unwrap();
    assert_eq!(json, "\"urn:demo:Widget\"");
    let back: TypeName = serde_json::from_str(&json).unwrap();
    assert_eq!(back, name);
}

#[test]
fn test_from_str() {
    let name: TypeName = "ns:widget".parse().unwrap();
    assert_eq!(name, TypeName::new("ns", "widget"));
}
