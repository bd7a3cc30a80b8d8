//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Activation constants are defined in `activa_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "activa.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "activa";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "ACTIVA";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "ACTIVA_LOG";

/// File name prefix of rotated log files
pub const LOG_FILE_PREFIX: &str = "activa";

/// Maximum number of rotated log files to keep
pub const LOG_MAX_FILES: usize = 7;

// ============================================================================
// MODULE CONSTANTS
// ============================================================================

/// Namespace of types declared by this crate
pub const INFRASTRUCTURE_NAMESPACE: &str = "urn:activa:infrastructure";

/// Name of the module declaring this crate's types
pub const INFRASTRUCTURE_MODULE: &str = "activa-infrastructure";
