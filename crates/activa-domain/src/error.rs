//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by wrapping variants
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for Activa
#[derive(Error, Debug)]
pub enum Error {
    /// Null or empty required input
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// A type, capability, role or provider could not be found
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// No usable constructor or factory exists, or it produced no instance
    #[error("No activation constructor found for type {type_name}")]
    NoConstructor {
        /// Qualified name of the type being activated
        type_name: String,
    },

    /// A required collaborator could not be bound from the value bag or the service directory
    #[error("Required collaborator missing: parameter '{parameter}' of {type_name} requires {capability}")]
    MissingCollaborator {
        /// Type being activated
        type_name: String,
        /// Parameter name
        parameter: String,
        /// Capability the parameter requires
        capability: String,
    },

    /// More than one provider matched a single-result lookup
    #[error("Multiple providers match '{name}': {candidates:?}")]
    AmbiguousProvider {
        /// The requested name
        name: String,
        /// Qualified names of the matching providers
        candidates: Vec<String>,
    },

    /// Role name not declared by any module
    #[error("Unknown adapter role: {role}")]
    UnknownRole {
        /// The requested role name
        role: String,
    },

    /// An activation provider (post-activation hook) failed
    #[error("Activation provider '{provider}' failed: {source}")]
    ActivationProvider {
        /// Name of the failing provider
        provider: String,
        /// The underlying failure
        #[source]
        source: BoxedError,
    },

    /// A value could not be converted or assigned
    #[error("Conversion failed for '{member}': {message}")]
    Conversion {
        /// Member (parameter or property) receiving the value
        member: String,
        /// Description of the failure
        message: String,
    },

    /// A proxied member has no implementation
    #[error("Member '{member}' of {capability} is not implemented")]
    NotImplemented {
        /// Capability that declares the member
        capability: String,
        /// Member name
        member: String,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedError>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedError>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Argument and lookup errors
impl Error {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an unknown role error
    pub fn unknown_role<S: Into<String>>(role: S) -> Self {
        Self::UnknownRole { role: role.into() }
    }

    /// Create an ambiguity error for a single-result provider lookup
    pub fn ambiguous_provider<S: Into<String>>(name: S, candidates: Vec<String>) -> Self {
        Self::AmbiguousProvider {
            name: name.into(),
            candidates,
        }
    }
}

// Activation errors
impl Error {
    /// Create a "no constructor" error
    pub fn no_constructor<S: ToString>(type_name: S) -> Self {
        Self::NoConstructor {
            type_name: type_name.to_string(),
        }
    }

    /// Create a "required collaborator missing" error
    pub fn missing_collaborator<T: ToString, P: Into<String>, C: ToString>(
        type_name: T,
        parameter: P,
        capability: C,
    ) -> Self {
        Self::MissingCollaborator {
            type_name: type_name.to_string(),
            parameter: parameter.into(),
            capability: capability.to_string(),
        }
    }

    /// Wrap a hook failure
    pub fn activation_provider<S: Into<String>>(provider: S, source: Error) -> Self {
        Self::ActivationProvider {
            provider: provider.into(),
            source: Box::new(source),
        }
    }

    /// Create a conversion error
    pub fn conversion<M: Into<String>, S: Into<String>>(member: M, message: S) -> Self {
        Self::Conversion {
            member: member.into(),
            message: message.into(),
        }
    }

    /// Create a "not implemented" error for a proxied member
    pub fn not_implemented<C: ToString, M: Into<String>>(capability: C, member: M) -> Self {
        Self::NotImplemented {
            capability: capability.to_string(),
            member: member.into(),
        }
    }
}

// Configuration, infrastructure and internal errors
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }

    /// Create an infrastructure error with source
    pub fn infrastructure_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether this error is one of the "resolution-not-found" family
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::NoConstructor { .. } | Self::UnknownRole { .. }
        )
    }
}
