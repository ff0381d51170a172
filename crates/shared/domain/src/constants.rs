//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User fields
// =============================================================================

/// Maximum length of a user display name (characters)
pub const NAME_MAX_LENGTH: u64 = 255;

/// Maximum length of a user email address (characters)
pub const EMAIL_MAX_LENGTH: u64 = 255;

/// Maximum length of a stored password hash (characters)
pub const PASSWORD_MAX_LENGTH: u64 = 100;

// =============================================================================
// Search
// =============================================================================

/// Default starting page number (1-indexed)
pub const DEFAULT_PAGE: u64 = 1;

/// Default number of items per page
pub const DEFAULT_PER_PAGE: u64 = 15;

/// Maximum allowed items per page
pub const MAX_PER_PAGE: u64 = 100;

// =============================================================================
// Repository messages
// =============================================================================

/// Message carried by `NotFound` when an id lookup misses
pub const ENTITY_NOT_FOUND: &str = "Entity not found";
