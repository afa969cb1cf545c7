//! JWT token generation and validation.
//!
//! Admin sessions are a single stateless bearer token: the claims carry the
//! admin's id, email and role, and the token stays valid until its embedded
//! expiry. There is no revocation list.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// JWT claims for admin access tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (admin ID).
    pub sub: Uuid,
    /// Admin email.
    pub email: String,
    /// Admin role (`admin` or `super_admin`).
    pub role: String,
    /// Issued at timestamp.
    pub iat: i64,
    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Creates new claims for an admin.
    #[must_use]
    pub fn new(admin_id: Uuid, email: &str, role: &str, expires_at: chrono::DateTime<Utc>) -> Self {
        Self {
            sub: admin_id,
            email: email.to_string(),
            role: role.to_string(),
            iat: Utc::now().timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    /// Returns the admin ID from the claims.
    #[must_use]
    pub const fn admin_id(&self) -> Uuid {
        self.sub
    }

    /// True when the role carries admin privileges.
    #[must_use]
    pub fn is_admin_role(&self) -> bool {
        self.role == "admin" || self.role == "super_admin"
    }
}

/// JWT configuration.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing tokens.
    pub secret: String,
    /// Token expiration in days.
    pub token_expiry_days: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: "your-secret-key-change-this".to_string(),
            token_expiry_days: 7,
        }
    }
}

/// Errors that can occur during JWT operations.
#[derive(Debug, Error)]
pub enum JwtError {
    /// Token encoding failed.
    #[error("failed to encode token: {0}")]
    EncodingError(String),

    /// Token decoding failed.
    #[error("failed to decode token: {0}")]
    DecodingError(String),

    /// Token has expired.
    #[error("token has expired")]
    Expired,
}

/// JWT service for token operations.
#[derive(Clone)]
pub struct JwtService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("token_expiry_days", &self.config.token_expiry_days)
            .field("keys", &"[hidden]")
            .finish()
    }
}

impl JwtService {
    /// Creates a new JWT service with the given configuration.
    #[must_use]
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());
        Self {
            config,
            encoding_key,
            decoding_key,
        }
    }

    /// Generates an access token for an admin.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::EncodingError` if token generation fails.
    pub fn generate_token(
        &self,
        admin_id: Uuid,
        email: &str,
        role: &str,
    ) -> Result<String, JwtError> {
        let expires_at = Utc::now() + Duration::days(self.config.token_expiry_days);
        let claims = Claims::new(admin_id, email, role, expires_at);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| JwtError::EncodingError(e.to_string()))
    }

    /// Validates and decodes a token.
    ///
    /// # Errors
    ///
    /// Returns `JwtError::Expired` if the token has expired.
    /// Returns `JwtError::DecodingError` if the token is malformed.
    pub fn validate_token(&self, token: &str) -> Result<Claims, JwtError> {
        let validation = Validation::default();

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => JwtError::Expired,
                _ => JwtError::DecodingError(e.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new(JwtConfig {
            secret: "test-secret-key-for-testing".to_string(),
            token_expiry_days: 7,
        })
    }

    #[test]
    fn test_generate_token() {
        let service = create_test_service();
        let token = service
            .generate_token(Uuid::new_v4(), "admin@stoneline.test", "admin")
            .unwrap();
        assert!(!token.is_empty());
    }

    #[test]
    fn test_token_round_trips_claims() {
        let service = create_test_service();
        let admin_id = Uuid::new_v4();

        let token = service
            .generate_token(admin_id, "admin@stoneline.test", "super_admin")
            .unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.admin_id(), admin_id);
        assert_eq!(claims.email, "admin@stoneline.test");
        assert_eq!(claims.role, "super_admin");
    }

    #[test]
    fn test_expiry_is_seven_days_out() {
        let service = create_test_service();
        let token = service
            .generate_token(Uuid::new_v4(), "a@b.com", "admin")
            .unwrap();
        let claims = service.validate_token(&token).unwrap();

        let lifetime = claims.exp - claims.iat;
        assert_eq!(lifetime, 7 * 24 * 60 * 60);
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();
        let result = service.validate_token("invalid.token.here");
        assert!(matches!(result, Err(JwtError::DecodingError(_))));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let service = create_test_service();
        let token = service
            .generate_token(Uuid::new_v4(), "a@b.com", "admin")
            .unwrap();

        let other = JwtService::new(JwtConfig {
            secret: "a-different-secret".to_string(),
            token_expiry_days: 7,
        });
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_admin_role_check() {
        let now = Utc::now() + Duration::days(1);
        let admin = Claims::new(Uuid::new_v4(), "a@b.com", "admin", now);
        let super_admin = Claims::new(Uuid::new_v4(), "a@b.com", "super_admin", now);
        let viewer = Claims::new(Uuid::new_v4(), "a@b.com", "viewer", now);

        assert!(admin.is_admin_role());
        assert!(super_admin.is_admin_role());
        assert!(!viewer.is_admin_role());
    }
}
