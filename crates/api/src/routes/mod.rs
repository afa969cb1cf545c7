//! API route definitions.
//!
//! Public routes serve the marketing site; everything under `/admin` is
//! gated by the authentication middleware.

use axum::{Router, middleware};

use crate::{AppState, middleware::auth::auth_middleware};

pub mod admin;
pub mod auth;
pub mod contact;
pub mod faqs;
pub mod gallery;
pub mod health;
pub mod products;
pub mod team;
pub mod testimonials;

/// Creates the API router with public and protected routes.
#[allow(clippy::needless_pass_by_value)]
pub fn api_routes_with_state(state: AppState) -> Router<AppState> {
    let admin_routes = admin::routes().layer(middleware::from_fn_with_state(
        state.clone(),
        auth_middleware,
    ));

    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(products::routes())
        .merge(gallery::routes())
        .merge(testimonials::routes())
        .merge(team::routes())
        .merge(faqs::routes())
        .merge(contact::routes())
        .nest("/admin", admin_routes)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use http_body_util::BodyExt;
    use sea_orm::DatabaseConnection;
    use stoneline_core::storage::{ImageStore, StorageConfig, StorageProvider};
    use stoneline_shared::config::CorsConfig;
    use stoneline_shared::{EmailConfig, EmailService, JwtConfig, JwtService};
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::{AppState, create_router};

    /// State with a disconnected database: enough for every request the
    /// middleware rejects before a handler runs.
    fn test_state() -> AppState {
        let root = std::env::temp_dir().join(format!("stoneline-api-test-{}", Uuid::new_v4()));
        let storage = StorageConfig::new(StorageProvider::local_fs(root), "/uploads");

        AppState {
            db: Arc::new(DatabaseConnection::default()),
            jwt_service: Arc::new(JwtService::new(JwtConfig {
                secret: "router-test-secret".to_string(),
                token_expiry_days: 7,
            })),
            email_service: Arc::new(EmailService::new(EmailConfig::default())),
            images: Arc::new(ImageStore::from_config(storage).expect("local store")),
            environment: "test".to_string(),
        }
    }

    fn test_router() -> axum::Router {
        create_router(test_state(), &CorsConfig::default())
    }

    async fn body_message(response: axum::response::Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["message"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn test_health_is_public() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["message"], "Stoneline API is running");
        assert_eq!(body["environment"], "test");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_admin_without_token_is_rejected() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/admin/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_message(response).await, "Access token required");
    }

    #[tokio::test]
    async fn test_admin_with_garbage_token_is_rejected() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/admin/stats")
                    .header(header::AUTHORIZATION, "Bearer not.a.token")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_message(response).await, "Invalid or expired token");
    }

    #[tokio::test]
    async fn test_admin_with_wrong_secret_token_is_rejected() {
        let other = JwtService::new(JwtConfig {
            secret: "a-different-secret".to_string(),
            token_expiry_days: 7,
        });
        let token = other
            .generate_token(Uuid::new_v4(), "admin@stoneline.test", "admin")
            .unwrap();

        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/admin/stats")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_message(response).await, "Invalid or expired token");
    }

    #[tokio::test]
    async fn test_admin_role_is_enforced() {
        let state = test_state();
        let token = state
            .jwt_service
            .generate_token(Uuid::new_v4(), "viewer@stoneline.test", "viewer")
            .unwrap();

        let response = create_router(state, &CorsConfig::default())
            .oneshot(
                Request::builder()
                    .uri("/api/admin/stats")
                    .header(header::AUTHORIZATION, format!("Bearer {token}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(body_message(response).await, "Admin access required");
    }

    #[tokio::test]
    async fn test_unknown_method_is_405() {
        // The route table answers for unsupported verbs; no handler runs.
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/api/contact")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .uri("/api/nope")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_contact_requires_fields() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"A"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_message(response).await,
            "Name, email, and message are required"
        );
    }

    #[tokio::test]
    async fn test_contact_rejects_bad_email() {
        let response = test_router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/contact")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"name":"A","email":"not-an-email","message":"hi"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_message(response).await, "Invalid email address");
    }
}
