//! Qualified type identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::NAMESPACE_SEPARATOR;
use crate::error::{Error, Result};

/// Namespace-scoped type identifier
///
/// Equality and hashing are exact. Lookups use [`TypeName::matches`], which
/// compares the namespace exactly and the local name case-insensitively.
///
/// Accepted textual forms:
/// - `ns:local` (split at the last `:`, so URNs keep their colons)
/// - `{ns}local`
/// - `local` (empty namespace)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName {
    namespace: String,
    local: String,
}

impl TypeName {
    /// Create a type name from its two parts
    pub fn new(namespace: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }

    /// Create a type name without a namespace
    pub fn unqualified(local: impl Into<String>) -> Self {
        Self::new(String::new(), local)
    }

    /// Parse a type name from one of the accepted textual forms
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::invalid_argument("type name cannot be empty"));
        }

        let (namespace, local) = if let Some(rest) = text.strip_prefix('{') {
            let (namespace, local) = rest.split_once('}').ok_or_else(|| {
                Error::invalid_argument(format!("unterminated namespace in type name '{text}'"))
            })?;
            (namespace, local)
        } else {
            text.rsplit_once(NAMESPACE_SEPARATOR).unwrap_or(("", text))
        };

        if local.is_empty() {
            return Err(Error::invalid_argument(format!(
                "type name '{text}' has no local name"
            )));
        }
        Ok(Self::new(namespace, local))
    }

    /// Namespace part (may be empty)
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Local name part
    pub fn local_name(&self) -> &str {
        &self.local
    }

    /// Lookup comparison: exact namespace, case-insensitive local name
    pub fn matches(&self, other: &TypeName) -> bool {
        self.namespace == other.namespace && self.local.eq_ignore_ascii_case(&other.local)
    }

    /// Case-insensitive comparison against a bare local name
    pub fn matches_local(&self, local: &str) -> bool {
        self.local.eq_ignore_ascii_case(local)
    }

    /// Sibling name in the same namespace with `suffix` appended to the local name
    pub fn with_suffix(&self, suffix: &str) -> Self {
        Self::new(self.namespace.clone(), format!("{}{}", self.local, suffix))
    }

    /// Key used by case-insensitive indexes
    pub fn lookup_key(&self) -> (String, String) {
        (self.namespace.clone(), self.local.to_ascii_lowercase())
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            f.write_str(&self.local)
        } else if self.local.contains(NAMESPACE_SEPARATOR) {
            write!(f, "{{{}}}{}", self.namespace, self.local)
        } else {
            write!(f, "{}{}{}", self.namespace, NAMESPACE_SEPARATOR, self.local)
        }
    }
}

impl FromStr for TypeName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TypeName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TypeName> for String {
    fn from(value: TypeName) -> Self {
        value.to_string()
    }
}
