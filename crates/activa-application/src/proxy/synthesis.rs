//! Proxy synthesis
//!
//! Builds, at first use, a type implementing a target capability over a
//! source type by member-wise forwarding. Each member gets a forwarding,
//! default-value or throwing entry in a [`DispatchTable`]; the table and the
//! proxy [`TypeDescriptor`] are memoized per (fallback, source, target) and
//! shared by every proxy instance of that triple.

use std::sync::Arc;

use activa_domain::constants::PROXY_NAMESPACE;
use activa_domain::entities::{
    Capability, CastFn, Object, TypeDescriptor, TypeKind,
};
use activa_domain::error::{Error, Result};
use activa_domain::value_objects::{ProxyFallback, TypeName, Value, ValueType};

use super::{DispatchEntry, DispatchTable, ForwardingProxy};
use crate::cache::SnapshotCache;
use crate::catalog::TypeCatalog;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ProxyKey {
    fallback: ProxyFallback,
    source: TypeName,
    target: TypeName,
}

/// Synthesized proxy type: descriptor plus shared dispatch table
#[derive(Debug)]
pub struct ProxyType {
    descriptor: Arc<TypeDescriptor>,
    table: Arc<DispatchTable>,
}

impl ProxyType {
    pub fn descriptor(&self) -> &Arc<TypeDescriptor> {
        &self.descriptor
    }

    pub fn table(&self) -> &Arc<DispatchTable> {
        &self.table
    }

    /// Proxy instance wrapping `source`
    pub fn instantiate(&self, source: Object) -> Object {
        let proxy = ForwardingProxy::new(source, Arc::clone(&self.table));
        Object::new(Arc::clone(&self.descriptor), Arc::new(proxy))
    }
}

/// Process-wide proxy synthesis engine
pub struct ProxyFactory {
    catalog: Arc<TypeCatalog>,
    cache: SnapshotCache<ProxyKey, Option<Arc<ProxyType>>>,
}

impl ProxyFactory {
    pub fn new(catalog: Arc<TypeCatalog>) -> Self {
        Self {
            catalog,
            cache: SnapshotCache::new(),
        }
    }

    /// Proxy type adapting `source` to `target`
    ///
    /// `Ok(None)` when `fallback` is [`ProxyFallback::None`] and some target
    /// member has no compatible source member. The outcome, including that
    /// failure, is memoized.
    pub fn create(
        &self,
        fallback: ProxyFallback,
        source: &TypeDescriptor,
        target: &TypeName,
    ) -> Result<Option<Arc<ProxyType>>> {
        let key = ProxyKey {
            fallback,
            source: source.name().clone(),
            target: target.clone(),
        };
        self.cache
            .get_or_try_insert_with(key, || self.synthesize(fallback, source, target))
    }

    /// [`ProxyFactory::create`] with the source resolved through the catalog
    pub fn create_by_name(
        &self,
        fallback: ProxyFallback,
        source: &TypeName,
        target: &TypeName,
    ) -> Result<Option<Arc<ProxyType>>> {
        let descriptor = self.catalog.resolve_type(source).ok_or_else(|| {
            Error::invalid_argument(format!("unknown proxy source type {source}"))
        })?;
        self.create(fallback, &descriptor, target)
    }

    /// An object assignable to `target`
    ///
    /// Returns `instance` itself when it already satisfies `target`,
    /// otherwise a proxy over it. `Ok(None)` when the `None` policy cannot
    /// produce a proxy.
    pub fn implement(
        &self,
        instance: &Object,
        target: &TypeName,
        fallback: ProxyFallback,
    ) -> Result<Option<Object>> {
        if self.catalog.satisfies(instance, target) {
            return Ok(Some(instance.clone()));
        }
        match self.create(fallback, instance.descriptor(), target)? {
            Some(proxy) => Ok(Some(proxy.instantiate(instance.clone()))),
            None if fallback == ProxyFallback::ThrowException => {
                Err(Error::not_implemented(target, "*"))
            }
            None => Ok(None),
        }
    }

    /// Typed view of `instance` as capability `C`, through a proxy if needed
    ///
    /// A proxy is only castable when the capability declares a bridge.
    pub fn implement_as<C: Capability + ?Sized>(
        &self,
        instance: &Object,
        fallback: ProxyFallback,
    ) -> Result<Option<Arc<C>>> {
        let target = C::capability_name();
        Ok(self
            .implement(instance, &target, fallback)?
            .and_then(|object| object.cast::<C>()))
    }

    /// Number of memoized (fallback, source, target) triples
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    fn synthesize(
        &self,
        fallback: ProxyFallback,
        source: &TypeDescriptor,
        target: &TypeName,
    ) -> Result<Option<Arc<ProxyType>>> {
        if let Some(descriptor) = self.catalog.resolve_type(target)
            && descriptor.kind() == TypeKind::Enum
        {
            return Err(Error::invalid_argument(format!(
                "proxy target {target} is a value type"
            )));
        }
        let capability = self.catalog.capability(target).ok_or_else(|| {
            Error::invalid_argument(format!("unknown proxy target capability {target}"))
        })?;
        if capability.is_value_type() {
            return Err(Error::invalid_argument(format!(
                "proxy target {target} is a value type"
            )));
        }
        let members = self
            .catalog
            .capability_members(capability.name())
            .unwrap_or_default();

        let mut entries = Vec::with_capacity(members.len());
        for member in members {
            let entry = match source.find_method(&member) {
                Some(method) => DispatchEntry::Forward(Arc::clone(method.invoke())),
                None => match fallback {
                    ProxyFallback::CreateDefault => {
                        DispatchEntry::Default(self.default_value(member.returns()))
                    }
                    ProxyFallback::ThrowException => DispatchEntry::Throw,
                    ProxyFallback::None => return Ok(None),
                },
            };
            entries.push((member, entry));
        }

        let table = Arc::new(DispatchTable::new(
            fallback,
            source.name().clone(),
            capability.name().clone(),
            entries,
        ));
        let descriptor = self.proxy_descriptor(source, capability.name(), &table);
        Ok(Some(Arc::new(ProxyType {
            descriptor: Arc::new(descriptor),
            table,
        })))
    }

    fn proxy_descriptor(
        &self,
        source: &TypeDescriptor,
        target: &TypeName,
        table: &DispatchTable,
    ) -> TypeDescriptor {
        let name = TypeName::new(
            PROXY_NAMESPACE,
            format!("{}As{}", source.name().local_name(), target.local_name()),
        );
        let mut builder = TypeDescriptor::class::<ForwardingProxy>(name);

        for (position, (signature, _)) in table.entries().iter().enumerate() {
            builder = builder.method(
                signature.name(),
                signature.params().to_vec(),
                signature.returns().clone(),
                move |proxy: &ForwardingProxy, args| proxy.dispatch(position, args),
            );
        }

        for capability in self.catalog.capability_lineage(target) {
            let cast = self
                .catalog
                .capability(&capability)
                .and_then(|descriptor| descriptor.bridge_fn().cloned())
                .map(|bridge| -> CastFn { Arc::new(move |object: &Object| Some(bridge(object.clone()))) });
            builder = builder.implements_name(capability, cast);
        }
        builder.build()
    }

    fn default_value(&self, ty: &ValueType) -> Value {
        default_value(&self.catalog, ty)
    }
}

/// Default value of a declared type: zero, `false`, the enum default or `Null`
pub(crate) fn default_value(catalog: &TypeCatalog, ty: &ValueType) -> Value {
    match ty {
        ValueType::Bool => Value::Bool(false),
        ValueType::Int => Value::Int(0),
        ValueType::Float => Value::Float(0.0),
        ValueType::Enum(name) => catalog
            .resolve_type(name)
            .and_then(|descriptor| {
                let instance = descriptor.default_instance()?;
                Some(Value::Object(Object::from_boxed(descriptor, instance)))
            })
            .unwrap_or_default(),
        ValueType::Void | ValueType::Any | ValueType::Text | ValueType::Object(_) => Value::Null,
    }
}

impl std::fmt::Debug for ProxyFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProxyFactory")
            .field("cached", &self.cache.len())
            .finish()
    }
}
