//! Admin gallery management routes.

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::extract::AdminForm;
use crate::{ApiError, AppState};
use stoneline_core::content::GalleryCategory;
use stoneline_db::{
    GalleryRepository,
    repositories::{CreateGalleryItemInput, GalleryFilter, UpdateGalleryItemInput},
};

/// Creates the admin gallery router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/gallery", get(list_items))
        .route("/gallery", post(create_item))
        .route("/gallery/{id}", put(update_item))
        .route("/gallery/{id}", delete(delete_item))
}

/// JSON payload carried in the `data` form field on create.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GalleryItemData {
    title: String,
    #[serde(default)]
    description: String,
    category: GalleryCategory,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default)]
    image: Option<String>,
}

/// JSON payload carried in the `data` form field on update.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GalleryItemUpdateData {
    title: Option<String>,
    description: Option<String>,
    category: Option<GalleryCategory>,
    location: Option<String>,
    featured: Option<bool>,
    image: Option<String>,
}

/// GET /admin/gallery - Lists all gallery items for the panel.
async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let repo = GalleryRepository::new((*state.db).clone());
    let items = repo.list(&GalleryFilter::default()).await?;
    Ok(Json(items))
}

/// POST /admin/gallery - Creates a gallery item from a multipart form.
async fn create_item(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let max = state.images.config().max_file_size;
    let mut form = AdminForm::from_multipart(multipart, max).await?;
    let data: GalleryItemData = form.parse_data()?;

    let image = match form.take_file("image") {
        Some(file) => state.images.upload(&file, "gallery").await?,
        None => data.image.unwrap_or_default(),
    };

    let repo = GalleryRepository::new((*state.db).clone());
    let item = repo
        .create(CreateGalleryItemInput {
            title: data.title,
            description: data.description,
            image,
            category: data.category.to_string(),
            location: data.location.filter(|l| !l.is_empty()),
            featured: data.featured,
        })
        .await?;

    info!(item_id = %item.id, "Gallery item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// PUT /admin/gallery/{id} - Updates a gallery item.
async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let max = state.images.config().max_file_size;
    let mut form = AdminForm::from_multipart(multipart, max).await?;
    let data: GalleryItemUpdateData = form.parse_data()?;

    let image = match form.take_file("image") {
        Some(file) => Some(state.images.upload(&file, "gallery").await?),
        None => data.image,
    };

    let repo = GalleryRepository::new((*state.db).clone());
    let item = repo
        .update(
            id,
            UpdateGalleryItemInput {
                title: data.title,
                description: data.description,
                image,
                category: data.category.map(|c| c.to_string()),
                location: data.location.map(Some),
                featured: data.featured,
            },
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Gallery item not found".to_string()))?;

    Ok(Json(item))
}

/// DELETE /admin/gallery/{id} - Deletes a gallery item.
async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = GalleryRepository::new((*state.db).clone());

    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Gallery item not found".to_string()));
    }

    Ok(Json(json!({ "message": "Gallery item deleted successfully" })))
}
