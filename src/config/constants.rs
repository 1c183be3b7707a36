//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Accounts
// =============================================================================

/// Every signup email must end with this institutional domain
pub const INSTITUTIONAL_EMAIL_SUFFIX: &str = "@kletech.ac.in";

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: u64 = 8;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

// =============================================================================
// Storage
// =============================================================================

/// Default location of the JSON document used by the file backend
pub const DEFAULT_DATA_FILE: &str = "data/db.json";

/// Storage backend used when `STORAGE_BACKEND` is unset
pub const DEFAULT_STORAGE_BACKEND: &str = "file";

// =============================================================================
// Response messages
// =============================================================================

pub const MSG_SIGNUP_OK: &str = "Signup successful";
pub const MSG_LOGIN_OK: &str = "Login successful";
pub const MSG_BLOG_ADDED: &str = "Blog added";
pub const MSG_BLOG_DELETED: &str = "Blog deleted";
pub const MSG_ALL_FIELDS_REQUIRED: &str = "All fields required";
