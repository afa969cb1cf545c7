//! Contact-form intake route.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::{ApiError, AppState};
use stoneline_db::{ContactRepository, repositories::NewContactInput};
use stoneline_shared::email::ContactNotification;

/// Creates the contact router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/contact", post(submit_contact))
}

#[derive(Debug, Deserialize)]
struct ContactRequest {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// POST /contact - Records a submission and fires a best-effort
/// notification email.
///
/// The submission is durable before any email is attempted; a failed or
/// unconfigured SMTP relay never fails the request.
async fn submit_contact(
    State(state): State<AppState>,
    Json(payload): Json<ContactRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let (Some(name), Some(email), Some(message)) =
        (payload.name, payload.email, payload.message)
    else {
        return Err(ApiError::BadRequest(
            "Name, email, and message are required".to_string(),
        ));
    };

    let name = name.trim().to_string();
    let email = email.trim().to_string();
    let message = message.trim().to_string();

    if name.is_empty() || email.is_empty() || message.is_empty() {
        return Err(ApiError::BadRequest(
            "Name, email, and message are required".to_string(),
        ));
    }

    if !email.contains('@') {
        return Err(ApiError::BadRequest("Invalid email address".to_string()));
    }

    let repo = ContactRepository::new((*state.db).clone());
    let contact = repo
        .create(NewContactInput {
            name: name.clone(),
            email: email.clone(),
            phone: payload.phone.filter(|p| !p.is_empty()),
            message: message.clone(),
        })
        .await?;

    info!(contact_id = %contact.id, "Contact submission recorded");

    if state.email_service.is_configured() {
        let notification = ContactNotification {
            name,
            email,
            phone: contact.phone.clone(),
            message,
        };
        if let Err(e) = state
            .email_service
            .send_contact_notification(&notification)
            .await
        {
            error!(contact_id = %contact.id, error = %e, "Contact notification email failed");
        }
    }

    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Message sent successfully" })),
    ))
}
