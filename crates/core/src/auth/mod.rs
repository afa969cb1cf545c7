//! Authentication and password hashing.
//!
//! This module provides:
//! - Password hashing with Argon2id
//! - Password verification
//! - Admin role definitions

mod password;

pub use password::{PasswordError, hash_password, verify_password};

use serde::{Deserialize, Serialize};

/// Minimum accepted password length for admin accounts.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Admin roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    /// Regular back-office admin.
    Admin,
    /// First admin created via setup; same privileges, reserved for future
    /// role management.
    SuperAdmin,
}

impl AdminRole {
    /// Parses a role string as stored in the database or a token.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "admin" => Some(Self::Admin),
            "super_admin" => Some(Self::SuperAdmin),
            _ => None,
        }
    }

    /// Returns the storage representation of the role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }
}

impl std::fmt::Display for AdminRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_round_trip() {
        assert_eq!(AdminRole::parse("admin"), Some(AdminRole::Admin));
        assert_eq!(AdminRole::parse("super_admin"), Some(AdminRole::SuperAdmin));
        assert_eq!(AdminRole::parse("viewer"), None);
        assert_eq!(AdminRole::SuperAdmin.as_str(), "super_admin");
    }
}
