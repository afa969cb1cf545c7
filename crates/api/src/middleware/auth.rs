//! Authentication middleware for the admin panel.

use axum::{
    Json,
    extract::{FromRequestParts, Request, State},
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::AppState;
use stoneline_shared::Claims;

/// Extracts the bearer token from the Authorization header.
fn extract_bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))
}

/// Authentication middleware guarding `/admin` routes.
///
/// This middleware:
/// 1. Extracts the Bearer token from the Authorization header
/// 2. Validates the token using the JWT service
/// 3. Rejects tokens whose role carries no admin privileges
/// 4. Stores the claims in request extensions for handlers to access
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(token) = auth_header.and_then(extract_bearer_token) else {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Access token required" })),
        )
            .into_response();
    };

    let claims = match state.jwt_service.validate_token(token) {
        Ok(claims) => claims,
        Err(_) => {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "message": "Invalid or expired token" })),
            )
                .into_response();
        }
    };

    if !claims.is_admin_role() {
        return (
            StatusCode::FORBIDDEN,
            Json(json!({ "message": "Admin access required" })),
        )
            .into_response();
    }

    request.extensions_mut().insert(claims);
    next.run(request).await
}

/// Extractor for the authenticated admin's claims.
///
/// Use this in handlers behind `auth_middleware` to get the admin identity:
///
/// ```ignore
/// async fn handler(admin: AuthAdmin) -> impl IntoResponse {
///     let admin_id = admin.admin_id();
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthAdmin(pub Claims);

impl AuthAdmin {
    /// Returns the admin ID from the claims.
    #[must_use]
    pub const fn admin_id(&self) -> uuid::Uuid {
        self.0.admin_id()
    }

    /// Returns the admin's role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.0.role
    }

    /// Returns the inner claims.
    #[must_use]
    pub const fn claims(&self) -> &Claims {
        &self.0
    }
}

impl<S> FromRequestParts<S> for AuthAdmin
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<serde_json::Value>);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthAdmin)
            .ok_or_else(|| {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({ "message": "Access token required" })),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_bearer_token() {
        assert_eq!(extract_bearer_token("Bearer abc123"), Some("abc123"));
        assert_eq!(extract_bearer_token("bearer abc123"), Some("abc123"));
        assert_eq!(extract_bearer_token("Basic abc123"), None);
        assert_eq!(extract_bearer_token("abc123"), None);
    }
}
