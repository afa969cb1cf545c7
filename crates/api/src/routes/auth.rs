//! Authentication routes: one-time setup and admin login.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{ApiError, AppState};
use stoneline_core::auth::{AdminRole, MIN_PASSWORD_LEN, hash_password, verify_password};
use stoneline_db::AdminRepository;

/// Creates the auth router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/auth/setup", post(setup))
        .route("/auth/login", post(login))
}

#[derive(Debug, Deserialize)]
struct SetupRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    password: Option<String>,
}

/// POST /auth/setup - Creates the first admin account.
///
/// Only works while the admins table is empty; afterwards the endpoint is
/// permanently closed.
async fn setup(
    State(state): State<AppState>,
    Json(payload): Json<SetupRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let admin_repo = AdminRepository::new((*state.db).clone());

    if admin_repo.count().await? > 0 {
        return Err(ApiError::BadRequest("Admin already exists".to_string()));
    }

    let (Some(email), Some(password), Some(name)) =
        (payload.email, payload.password, payload.name)
    else {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    };

    if email.is_empty() || password.is_empty() || name.is_empty() {
        return Err(ApiError::BadRequest("All fields are required".to_string()));
    }

    if password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::BadRequest(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    let password_hash =
        hash_password(&password).map_err(|e| ApiError::Internal(e.to_string()))?;

    let admin = admin_repo
        .create(&email, &password_hash, &name, AdminRole::SuperAdmin.as_str())
        .await?;

    info!(admin_id = %admin.id, "Initial admin account created");

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Admin created successfully" })),
    ))
}

/// POST /auth/login - Authenticates an admin and returns a bearer token.
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(email), Some(password)) = (payload.email, payload.password) else {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    };

    if email.is_empty() || password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    if password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::BadRequest(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    let admin_repo = AdminRepository::new((*state.db).clone());

    let Some(admin) = admin_repo.find_by_email(&email).await? else {
        info!(email = %email, "Login attempt for unknown admin");
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    };

    if !admin.is_active {
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let matches = verify_password(&password, &admin.password_hash)
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    if !matches {
        info!(admin_id = %admin.id, "Failed login attempt");
        return Err(ApiError::Unauthorized("Invalid credentials".to_string()));
    }

    let token = state
        .jwt_service
        .generate_token(admin.id, &admin.email, &admin.role)?;

    Ok(Json(json!({
        "token": token,
        "admin": {
            "id": admin.id,
            "email": admin.email,
            "name": admin.name,
            "role": admin.role,
        },
    })))
}
