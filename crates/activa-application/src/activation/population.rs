//! Property population from unbound values

use activa_domain::entities::{Component, TypeDescriptor};
use activa_domain::error::{Error, Result};
use activa_domain::ports::PopulationCallback;
use activa_domain::value_objects::{Value, ValueBag};

use super::coercion::Coercer;

/// Assign every remaining entry of `values` to a settable member
///
/// Unknown members and failed assignments go to `callback` and are
/// otherwise ignored; only an error returned by the callback aborts. Each
/// entry leaves the bag once its assignment has been attempted.
pub(crate) fn populate(
    coercer: &Coercer<'_>,
    component: &mut dyn Component,
    descriptor: &TypeDescriptor,
    values: &mut ValueBag,
    callback: Option<&dyn PopulationCallback>,
) -> Result<()> {
    while let Some((key, value)) = values.pop_front() {
        assign(coercer, component, descriptor, &key, value, callback)?;
    }
    Ok(())
}

fn assign(
    coercer: &Coercer<'_>,
    component: &mut dyn Component,
    descriptor: &TypeDescriptor,
    key: &str,
    value: Value,
    callback: Option<&dyn PopulationCallback>,
) -> Result<()> {
    let Some(property) = descriptor.property(key) else {
        return match callback {
            Some(callback) => callback.on_missing(descriptor.name(), key, &value),
            None => Ok(()),
        };
    };

    let value = match coercer.coerce(property.name(), property.ty(), &value) {
        Ok(Some(converted)) => converted,
        Ok(None) => value,
        Err(error) => return report(descriptor, key, &error, callback),
    };
    match property.set(component, value) {
        Ok(()) => Ok(()),
        Err(error) => report(descriptor, key, &error, callback),
    }
}

fn report(
    descriptor: &TypeDescriptor,
    key: &str,
    error: &Error,
    callback: Option<&dyn PopulationCallback>,
) -> Result<()> {
    match callback {
        Some(callback) => callback.on_conversion_error(descriptor.name(), key, error),
        None => Ok(()),
    }
}
