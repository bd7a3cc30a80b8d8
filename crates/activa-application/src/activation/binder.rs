//! Constructor selection and argument binding

use activa_domain::entities::{
    Arguments, ConstructorDescriptor, Object, ParameterDescriptor, TypeDescriptor,
};
use activa_domain::error::{Error, Result};
use activa_domain::ports::ServiceDirectory;
use activa_domain::value_objects::{ProxyFallback, TypeName, Value, ValueBag, ValueType};

use super::coercion::Coercer;
use crate::catalog::TypeCatalog;
use crate::proxy::ProxyFactory;

/// The explicitly marked constructor, else the first declared one
pub(crate) fn select_constructor(descriptor: &TypeDescriptor) -> Result<&ConstructorDescriptor> {
    let constructors = descriptor.constructors();
    constructors
        .iter()
        .find(|c| c.is_preferred())
        .or_else(|| constructors.first())
        .ok_or_else(|| Error::no_constructor(descriptor.name()))
}

/// Binds a value bag against one constructor's parameters
pub(crate) struct Binder<'a> {
    catalog: &'a TypeCatalog,
    proxies: &'a ProxyFactory,
    coercer: Coercer<'a>,
    descriptor: &'a TypeDescriptor,
    services: Option<&'a dyn ServiceDirectory>,
}

impl<'a> Binder<'a> {
    pub(crate) fn new(
        catalog: &'a TypeCatalog,
        proxies: &'a ProxyFactory,
        descriptor: &'a TypeDescriptor,
        services: Option<&'a dyn ServiceDirectory>,
    ) -> Self {
        Self {
            catalog,
            proxies,
            coercer: Coercer::new(catalog, proxies),
            descriptor,
            services,
        }
    }

    /// Bind every parameter, removing bound entries from `values`
    pub(crate) fn bind(
        &self,
        constructor: &ConstructorDescriptor,
        values: &mut ValueBag,
    ) -> Result<Arguments> {
        let params = constructor.params();
        let mut names = Vec::with_capacity(params.len());
        let mut bound = Vec::with_capacity(params.len());

        for (position, param) in params.iter().enumerate() {
            let supplied = values
                .take_positional(position)
                .or_else(|| values.take_named(param.name()));
            let value = match supplied {
                Some(value) => self.convert_supplied(param, &value)?,
                None => self.resolve_unsupplied(param)?,
            };
            names.push(param.name().to_string());
            bound.push(value);
        }
        Ok(Arguments::named(names, bound))
    }

    fn convert_supplied(&self, param: &ParameterDescriptor, value: &Value) -> Result<Value> {
        self.coercer
            .coerce(param.name(), param.ty(), value)?
            .ok_or_else(|| {
                Error::conversion(
                    param.name(),
                    format!(
                        "cannot convert {} to {} for {}",
                        value.kind_name(),
                        param.ty(),
                        self.descriptor.name()
                    ),
                )
            })
    }

    fn resolve_unsupplied(&self, param: &ParameterDescriptor) -> Result<Value> {
        let ty = param.ty();
        if let ValueType::Object(capability) = ty
            && self.coercer.looks_like_service(ty)
        {
            if let Some(service) = self.lookup_service(capability)? {
                return Ok(Value::Object(service));
            }
            if param.is_subscription_required() || !param.is_optional() {
                return Err(self.missing(param));
            }
            return Ok(Value::Null);
        }

        if param.is_subscription_required() {
            return Err(self.missing(param));
        }
        Ok(self.coercer.default_for(ty))
    }

    /// Service for `capability`, adapted to it when not already assignable
    fn lookup_service(&self, capability: &TypeName) -> Result<Option<Object>> {
        let Some(service) = self
            .services
            .and_then(|services| services.get_service(capability))
        else {
            return Ok(None);
        };
        if self.catalog.satisfies(&service, capability) {
            return Ok(Some(service));
        }
        if self.catalog.capability(capability).is_none() {
            return Ok(None);
        }
        self.proxies
            .implement(&service, capability, ProxyFallback::None)
    }

    fn missing(&self, param: &ParameterDescriptor) -> Error {
        Error::missing_collaborator(self.descriptor.name(), param.name(), param.ty())
    }
}
