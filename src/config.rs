//! Configuration management module

use crate::error::{AuditError, Result};
use serde::{Deserialize, Serialize};

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub username: String,
    pub password: String,
}

impl AuthConfig {
    /// Credentials are trimmed of surrounding whitespace before use.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into().trim().to_string(),
            password: password.into().trim().to_string(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.username.is_empty() {
            return Err(AuditError::Config("Username cannot be empty".to_string()));
        }
        if self.password.is_empty() {
            return Err(AuditError::Config("Password cannot be empty".to_string()));
        }
        Ok(())
    }
}
