//! Admin team management routes.

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::extract::AdminForm;
use crate::{ApiError, AppState};
use stoneline_db::{
    TeamRepository,
    repositories::{CreateTeamMemberInput, UpdateTeamMemberInput},
};

/// Creates the admin team router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/team", get(list_team))
        .route("/team", post(create_member))
        .route("/team/{id}", put(update_member))
        .route("/team/{id}", delete(delete_member))
}

const fn default_true() -> bool {
    true
}

/// JSON payload carried in the `data` form field on create.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamMemberData {
    name: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    linkedin: Option<String>,
    #[serde(default, rename = "order")]
    display_order: i32,
    #[serde(default = "default_true")]
    is_active: bool,
}

/// JSON payload carried in the `data` form field on update.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TeamMemberUpdateData {
    name: Option<String>,
    role: Option<String>,
    description: Option<String>,
    /// Replaced by a fresh upload or this URL; omitting it leaves the
    /// stored image unchanged (no way to clear it to null).
    image: Option<String>,
    email: Option<String>,
    phone: Option<String>,
    linkedin: Option<String>,
    #[serde(rename = "order")]
    display_order: Option<i32>,
    is_active: Option<bool>,
}

/// GET /admin/team - Lists all team members for the panel.
async fn list_team(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let repo = TeamRepository::new((*state.db).clone());
    let members = repo.list_all().await?;
    Ok(Json(members))
}

/// POST /admin/team - Creates a team member from a multipart form.
async fn create_member(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let max = state.images.config().max_file_size;
    let mut form = AdminForm::from_multipart(multipart, max).await?;
    let data: TeamMemberData = form.parse_data()?;

    let image = match form.take_file("image") {
        Some(file) => Some(state.images.upload(&file, "team").await?),
        None => data.image.filter(|i| !i.is_empty()),
    };

    let repo = TeamRepository::new((*state.db).clone());
    let member = repo
        .create(CreateTeamMemberInput {
            name: data.name,
            role: data.role,
            description: data.description,
            image,
            email: data.email.filter(|e| !e.is_empty()),
            phone: data.phone.filter(|p| !p.is_empty()),
            linkedin: data.linkedin.filter(|l| !l.is_empty()),
            display_order: data.display_order,
            is_active: data.is_active,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(member)))
}

/// PUT /admin/team/{id} - Updates a team member.
async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let max = state.images.config().max_file_size;
    let mut form = AdminForm::from_multipart(multipart, max).await?;
    let data: TeamMemberUpdateData = form.parse_data()?;

    let image = match form.take_file("image") {
        Some(file) => Some(state.images.upload(&file, "team").await?),
        None => data.image,
    };

    let repo = TeamRepository::new((*state.db).clone());
    let member = repo
        .update(
            id,
            UpdateTeamMemberInput {
                name: data.name,
                role: data.role,
                description: data.description,
                image: image.map(Some),
                email: data.email.map(Some),
                phone: data.phone.map(Some),
                linkedin: data.linkedin.map(Some),
                display_order: data.display_order,
                is_active: data.is_active,
            },
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Team member not found".to_string()))?;

    Ok(Json(member))
}

/// DELETE /admin/team/{id} - Deletes a team member.
async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = TeamRepository::new((*state.db).clone());

    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Team member not found".to_string()));
    }

    Ok(Json(json!({ "message": "Team member deleted successfully" })))
}
