//! HTTP API layer with Axum routes and middleware.
//!
//! This crate provides:
//! - REST API routes for the public site and the admin panel
//! - Authentication middleware
//! - Multipart form extraction for image uploads
//! - Response types

pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;

pub use error::ApiError;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method, header};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use stoneline_core::storage::ImageStore;
use stoneline_shared::config::CorsConfig;
use stoneline_shared::{EmailService, JwtService};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

/// Multipart bodies carry several images, so the limit sits well above
/// the per-file cap.
const MAX_BODY_SIZE: usize = 50 * 1024 * 1024;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// JWT service for token operations.
    pub jwt_service: Arc<JwtService>,
    /// Email service for contact notifications.
    pub email_service: Arc<EmailService>,
    /// Image storage for uploads.
    pub images: Arc<ImageStore>,
    /// Deployment environment name, reported by the health probe.
    pub environment: String,
}

/// Creates the main application router.
pub fn create_router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .nest("/api", routes::api_routes_with_state(state.clone()))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors))
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .with_state(state)
}

/// Builds the CORS layer from the configured origin allow-list.
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = cors
        .allowed_origins()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cors_layer_builds_from_config() {
        let cors = CorsConfig {
            frontend_url: Some("https://stoneline.example".to_string()),
        };
        // Smoke test: invalid origins are skipped, valid ones parse.
        let _layer = cors_layer(&cors);
    }
}
