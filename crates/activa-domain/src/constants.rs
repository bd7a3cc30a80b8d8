//! Domain layer constants
//!
//! Well-known namespaces, role names and criteria keys shared by every layer.

// ============================================================================
// NAMESPACES
// ============================================================================

/// Namespace of the built-in capabilities and roles
pub const CORE_NAMESPACE: &str = "urn:activa:core";

/// Namespace assigned to synthesized proxy types
pub const PROXY_NAMESPACE: &str = "urn:activa:proxy";

// ============================================================================
// BUILT-IN CAPABILITIES
// ============================================================================

/// Local name of the post-activation hook capability
pub const ACTIVATION_PROVIDER_CAPABILITY: &str = "ActivationProvider";

/// Local name of the hook exception handler capability
pub const EXCEPTION_HANDLER_CAPABILITY: &str = "ExceptionHandler";

// ============================================================================
// BUILT-IN ROLES
// ============================================================================

/// Role for builder adapters
pub const BUILDER_ROLE: &str = "Builder";

/// Role for streaming source adapters
pub const STREAMING_SOURCE_ROLE: &str = "StreamingSource";

/// Role for activation provider adapters
pub const ACTIVATION_PROVIDER_ROLE: &str = "ActivationProvider";

// ============================================================================
// PROVIDER CRITERIA
// ============================================================================

/// Criteria key for file extensions (`;` or `,` separated on declarations)
pub const CRITERIA_EXTENSION: &str = "extension";

/// Criteria key for content types
pub const CRITERIA_CONTENT_TYPE: &str = "contentType";

/// Criteria key for produced output types
pub const CRITERIA_OUTPUT_TYPE: &str = "outputType";

/// Score added for each matching declared criterion
pub const CRITERIA_MATCH_WEIGHT: u32 = 2;

/// Score added when the caller's module declared the provider
pub const MODULE_MATCH_WEIGHT: u32 = 1;

/// Score added when the caller's member declared the provider
pub const MEMBER_MATCH_WEIGHT: u32 = 1;

// ============================================================================
// NAME SYNTAX
// ============================================================================

/// Separator between namespace and local name in the short form (`ns:local`)
pub const NAMESPACE_SEPARATOR: char = ':';
