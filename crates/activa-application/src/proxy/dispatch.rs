//! Dispatch tables
//!
//! One entry per target member, chosen once at synthesis time. A proxy
//! instance holds the shared table plus the wrapped object and never
//! changes either.

use std::fmt;
use std::sync::Arc;

use activa_domain::entities::{InvokeFn, MemberSignature, Object};
use activa_domain::error::{Error, Result};
use activa_domain::value_objects::{ProxyFallback, TypeName, Value};

/// Implementation chosen for one target member
#[derive(Clone)]
pub enum DispatchEntry {
    /// Call the source member with the same signature
    Forward(InvokeFn),
    /// Return a fixed default value
    Default(Value),
    /// Fail with "not implemented"
    Throw,
}

impl DispatchEntry {
    pub fn is_forward(&self) -> bool {
        matches!(self, Self::Forward(_))
    }
}

impl fmt::Debug for DispatchEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward(_) => f.write_str("Forward"),
            Self::Default(value) => f.debug_tuple("Default").field(value).finish(),
            Self::Throw => f.write_str("Throw"),
        }
    }
}

/// Per-member implementations of a (fallback, source, target) triple
#[derive(Debug)]
pub struct DispatchTable {
    fallback: ProxyFallback,
    source: TypeName,
    target: TypeName,
    entries: Vec<(MemberSignature, DispatchEntry)>,
}

impl DispatchTable {
    pub(crate) fn new(
        fallback: ProxyFallback,
        source: TypeName,
        target: TypeName,
        entries: Vec<(MemberSignature, DispatchEntry)>,
    ) -> Self {
        Self {
            fallback,
            source,
            target,
            entries,
        }
    }

    pub fn fallback(&self) -> ProxyFallback {
        self.fallback
    }

    pub fn source(&self) -> &TypeName {
        &self.source
    }

    pub fn target(&self) -> &TypeName {
        &self.target
    }

    pub fn entries(&self) -> &[(MemberSignature, DispatchEntry)] {
        &self.entries
    }

    /// Entry for a member, by name and arity
    pub fn entry(&self, member: &str, arity: usize) -> Option<&DispatchEntry> {
        self.position(member, arity)
            .map(|position| &self.entries[position].1)
    }

    pub(crate) fn position(&self, member: &str, arity: usize) -> Option<usize> {
        self.entries
            .iter()
            .position(|(s, _)| s.name() == member && s.params().len() == arity)
    }

    /// Run entry `position` against `wrapped`
    pub(crate) fn dispatch(&self, position: usize, wrapped: &Object, args: &[Value]) -> Result<Value> {
        let (signature, entry) = self.entries.get(position).ok_or_else(|| {
            Error::internal(format!(
                "dispatch slot {position} out of range for proxy {} -> {}",
                self.source, self.target
            ))
        })?;
        match entry {
            DispatchEntry::Forward(invoke) => invoke(wrapped.component(), args),
            DispatchEntry::Default(value) => Ok(value.clone()),
            DispatchEntry::Throw => Err(Error::not_implemented(&self.target, signature.name())),
        }
    }
}

/// Component behind every synthesized proxy instance
pub struct ForwardingProxy {
    wrapped: Object,
    table: Arc<DispatchTable>,
}

impl ForwardingProxy {
    pub(crate) fn new(wrapped: Object, table: Arc<DispatchTable>) -> Self {
        Self { wrapped, table }
    }

    /// The adapted source object
    pub fn wrapped(&self) -> &Object {
        &self.wrapped
    }

    /// Shared dispatch table of this proxy's type
    pub fn table(&self) -> &Arc<DispatchTable> {
        &self.table
    }

    /// Call a target member by name
    pub fn call(&self, member: &str, args: &[Value]) -> Result<Value> {
        let position = self
            .table
            .position(member, args.len())
            .ok_or_else(|| Error::not_found(format!("member '{member}' on {}", self.table.target)))?;
        self.table.dispatch(position, &self.wrapped, args)
    }

    pub(crate) fn dispatch(&self, position: usize, args: &[Value]) -> Result<Value> {
        self.table.dispatch(position, &self.wrapped, args)
    }
}

impl fmt::Debug for ForwardingProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForwardingProxy")
            .field("wrapped", &self.wrapped)
            .field("target", &self.table.target)
            .finish()
    }
}
