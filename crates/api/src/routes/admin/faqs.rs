//! Admin FAQ management routes.
//!
//! FAQ entries carry no images, so these endpoints take plain JSON bodies.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::{ApiError, AppState};
use stoneline_db::{
    FaqRepository,
    repositories::{CreateFaqInput, UpdateFaqInput},
};

/// Creates the admin FAQ router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/faqs", get(list_faqs))
        .route("/faqs", post(create_faq))
        .route("/faqs/{id}", put(update_faq))
        .route("/faqs/{id}", delete(delete_faq))
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FaqData {
    question: String,
    answer: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default, rename = "order")]
    display_order: i32,
    #[serde(default = "default_true")]
    is_active: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FaqUpdateData {
    question: Option<String>,
    answer: Option<String>,
    category: Option<String>,
    #[serde(rename = "order")]
    display_order: Option<i32>,
    is_active: Option<bool>,
}

/// GET /admin/faqs - Lists all FAQ entries for the panel.
async fn list_faqs(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let repo = FaqRepository::new((*state.db).clone());
    let faqs = repo.list_all().await?;
    Ok(Json(faqs))
}

/// POST /admin/faqs - Creates an FAQ entry.
async fn create_faq(
    State(state): State<AppState>,
    Json(data): Json<FaqData>,
) -> Result<impl IntoResponse, ApiError> {
    if data.question.trim().is_empty() || data.answer.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "Question and answer are required".to_string(),
        ));
    }

    let repo = FaqRepository::new((*state.db).clone());
    let faq = repo
        .create(CreateFaqInput {
            question: data.question,
            answer: data.answer,
            category: data.category.filter(|c| !c.is_empty()),
            display_order: data.display_order,
            is_active: data.is_active,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(faq)))
}

/// PUT /admin/faqs/{id} - Updates an FAQ entry.
async fn update_faq(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(data): Json<FaqUpdateData>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = FaqRepository::new((*state.db).clone());
    let faq = repo
        .update(
            id,
            UpdateFaqInput {
                question: data.question,
                answer: data.answer,
                category: data.category.map(Some),
                display_order: data.display_order,
                is_active: data.is_active,
            },
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("FAQ not found".to_string()))?;

    Ok(Json(faq))
}

/// DELETE /admin/faqs/{id} - Deletes an FAQ entry.
async fn delete_faq(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = FaqRepository::new((*state.db).clone());

    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("FAQ not found".to_string()));
    }

    Ok(Json(json!({ "message": "FAQ deleted successfully" })))
}
