//! Value coercion toward declared types

use activa_domain::entities::{Object, TypeKind};
use activa_domain::error::{Error, Result};
use activa_domain::value_objects::{ProxyFallback, TypeName, Value, ValueType};

use crate::catalog::TypeCatalog;
use crate::proxy::ProxyFactory;
use crate::proxy::synthesis::default_value;

/// Converts supplied values to parameter and property types
pub(crate) struct Coercer<'a> {
    catalog: &'a TypeCatalog,
    proxies: &'a ProxyFactory,
}

impl<'a> Coercer<'a> {
    pub(crate) fn new(catalog: &'a TypeCatalog, proxies: &'a ProxyFactory) -> Self {
        Self { catalog, proxies }
    }

    /// Convert `value` for a member of type `ty`
    ///
    /// `Ok(None)` means no conversion applies; `Err` means one applied and
    /// failed.
    pub(crate) fn coerce(&self, member: &str, ty: &ValueType, value: &Value) -> Result<Option<Value>> {
        if ty.accepts(value) {
            return Ok(Some(value.clone()));
        }
        if let (ValueType::Object(name), Value::Object(instance)) = (ty, value)
            && self.catalog.satisfies(instance, name)
        {
            return Ok(Some(value.clone()));
        }
        let converted = match (ty, value) {
            (_, Value::Null) if ty.is_value_type() => Some(default_value(self.catalog, ty)),
            (ValueType::Int, Value::Text(text)) => Some(Value::Int(
                text.trim()
                    .parse()
                    .map_err(|e| Error::conversion(member, format!("'{text}' is not an int: {e}")))?,
            )),
            (ValueType::Int, Value::Float(x)) if x.fract() == 0.0 => {
                Some(Value::Int(float_to_int(member, *x)?))
            }
            (ValueType::Float, Value::Int(_)) => value.as_f64().map(Value::Float),
            (ValueType::Float, Value::Text(text)) => Some(Value::Float(
                text.trim()
                    .parse()
                    .map_err(|e| Error::conversion(member, format!("'{text}' is not a float: {e}")))?,
            )),
            (ValueType::Bool, Value::Text(text)) => Some(Value::Bool(parse_bool(text).ok_or_else(
                || Error::conversion(member, format!("'{text}' is not a bool")),
            )?)),
            (ValueType::Text, Value::Bool(b)) => Some(Value::Text(b.to_string())),
            (ValueType::Text, Value::Int(i)) => Some(Value::Text(i.to_string())),
            (ValueType::Text, Value::Float(x)) => Some(Value::Text(x.to_string())),
            (ValueType::Enum(name) | ValueType::Object(name), Value::Text(text)) => {
                self.parse_text(member, name, text)?
            }
            (ValueType::Object(name), Value::Object(instance)) => {
                if self.catalog.capability(name).is_some() {
                    self.proxies
                        .implement(instance, name, ProxyFallback::None)?
                        .map(Value::Object)
                } else {
                    None
                }
            }
            _ => None,
        };
        Ok(converted)
    }

    fn parse_text(
        &self,
        member: &str,
        name: &TypeName,
        text: &str,
    ) -> Result<Option<Value>> {
        let Some(descriptor) = self.catalog.resolve_type(name) else {
            return Ok(None);
        };
        match descriptor.parse_text(text) {
            Some(Ok(component)) => Ok(Some(Value::Object(Object::from_boxed(descriptor, component)))),
            Some(Err(e)) => Err(Error::conversion(member, e.to_string())),
            None => Ok(None),
        }
    }

    /// Whether an unsupplied value of type `ty` should come from the service directory
    pub(crate) fn looks_like_service(&self, ty: &ValueType) -> bool {
        match ty {
            ValueType::Object(name) => self
                .catalog
                .resolve_type(name)
                .is_none_or(|d| !matches!(d.kind(), TypeKind::Enum | TypeKind::StaticOnly)),
            _ => false,
        }
    }

    pub(crate) fn default_for(&self, ty: &ValueType) -> Value {
        default_value(self.catalog, ty)
    }
}

/// Whole float to `i64`, rejecting values outside its range instead of saturating
#[allow(clippy::cast_possible_truncation)]
fn float_to_int(member: &str, x: f64) -> Result<i64> {
    // 2^63 is exact as f64; i64::MAX is not
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if (-LIMIT..LIMIT).contains(&x) {
        Ok(x as i64)
    } else {
        Err(Error::conversion(member, format!("{x} is out of range for an int")))
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
