//! Unit tests for dynamic values and declared value types

use activa_domain::{TypeName, Value, ValueType};

#[test]
fn test_numeric_accessors_widen_int_to_float() {
    assert_eq!(Value::Int(3).as_f64(), Some(3.0));
    assert_eq!(Value::Float(3.5).as_i64(), None);
    assert_eq!(Value::Text("3".into()).as_i64(), None);
}

#[test]
fn test_null_is_default() {
    assert!(Value::default().is_null());
}

#[test]
fn test_value_types_reject_null() {
    assert!(!ValueType::Int.accepts(&Value::Null));
    assert!(!ValueType::Bool.accepts(&Value::Null));
    assert!(!ValueType::Enum(TypeName::new("ns", "Mode")).accepts(&Value::Null));
    assert!(ValueType::Text.accepts(&Value::Null));
    assert!(ValueType::object(TypeName::new("ns", "IColor")).accepts(&Value::Null));
}

#[test]
fn test_scalars_accept_only_their_kind() {
    assert!(ValueType::Int.accepts(&Value::Int(1)));
    assert!(!ValueType::Int.accepts(&Value::Text("1".into())));
    assert!(!ValueType::Float.accepts(&Value::Int(1)));
    assert!(ValueType::Any.accepts(&Value::Text("x".into())));
}

#[test]
fn test_primitive_and_value_type_classification() {
    assert!(ValueType::Text.is_primitive());
    assert!(!ValueType::Text.is_value_type());
    let mode = ValueType::Enum(TypeName::new("ns", "Mode"));
    assert!(mode.is_value_type());
    assert!(!mode.is_primitive());
}

#[test]
fn test_display() {
    assert_eq!(ValueType::Int.to_string(), "int");
    assert_eq!(
        ValueType::object(TypeName::new("ns", "IColor")).to_string(),
        "ns:IColor"
    );
}

#[test]
fn test_from_json_number() {
    assert_eq!(Value::from(serde_json::json!(7)), Value::Int(7));
    assert_eq!(Value::from(serde_json::json!(0.5)), Value::Float(0.5));
}
