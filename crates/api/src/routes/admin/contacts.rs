//! Admin contact triage routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::{delete, get, patch},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::middleware::auth::AuthAdmin;
use crate::{ApiError, AppState};
use stoneline_core::content::ContactStatus;
use stoneline_db::ContactRepository;

/// Creates the admin contacts router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/contacts", get(list_contacts))
        .route("/contacts/{id}", patch(update_status))
        .route("/contacts/{id}", delete(delete_contact))
}

#[derive(Debug, Default, Deserialize)]
struct ContactsQuery {
    status: Option<String>,
}

#[derive(Debug, Deserialize)]
struct StatusUpdate {
    status: String,
}

/// GET /admin/contacts - Lists submissions, optionally filtered by status.
async fn list_contacts(
    State(state): State<AppState>,
    Query(query): Query<ContactsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(
            ContactStatus::parse(raw)
                .ok_or_else(|| ApiError::BadRequest("Invalid status".to_string()))?,
        ),
        None => None,
    };

    let repo = ContactRepository::new((*state.db).clone());
    let contacts = repo.list(status.map(|s| s.as_str())).await?;
    Ok(Json(contacts))
}

/// PATCH /admin/contacts/{id} - Moves a submission to a new status.
async fn update_status(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<Uuid>,
    Json(body): Json<StatusUpdate>,
) -> Result<impl IntoResponse, ApiError> {
    let status = ContactStatus::parse(&body.status)
        .ok_or_else(|| ApiError::BadRequest("Invalid status".to_string()))?;

    let repo = ContactRepository::new((*state.db).clone());
    let contact = repo
        .update_status(id, status.as_str())
        .await?
        .ok_or_else(|| ApiError::NotFound("Contact not found".to_string()))?;

    info!(contact_id = %id, admin_id = %admin.admin_id(), status = %status, "Contact status updated");
    Ok(Json(contact))
}

/// DELETE /admin/contacts/{id} - Deletes a submission.
async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ContactRepository::new((*state.db).clone());

    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Contact not found".to_string()));
    }

    Ok(Json(json!({ "message": "Contact deleted successfully" })))
}
