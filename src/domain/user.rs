//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::INSTITUTIONAL_EMAIL_SUFFIX;

/// User domain entity
///
/// Users are created by signup and afterwards only read for login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    /// Argon2 PHC string, persisted under the `password` key
    #[serde(rename = "password")]
    pub password_hash: String,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new user stamped with the current time
    pub fn new(email: String, password_hash: String) -> Self {
        Self {
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

/// Check whether an email belongs to the institutional domain.
///
/// Only the suffix is checked; `"@kletech.ac.in"` on its own passes.
pub fn is_institutional_email(email: &str) -> bool {
    email.ends_with(INSTITUTIONAL_EMAIL_SUFFIX)
}

/// Message reported when an email fails [`is_institutional_email`]
pub fn institutional_email_message() -> String {
    format!("Email must end with {}", INSTITUTIONAL_EMAIL_SUFFIX)
}
