//! Public project gallery routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{ApiError, AppState};
use stoneline_db::{GalleryRepository, repositories::GalleryFilter};

/// Creates the public gallery router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/gallery", get(list_items))
        .route("/gallery/{id}", get(get_item))
}

#[derive(Debug, Default, Deserialize)]
struct GalleryQuery {
    category: Option<String>,
    featured: Option<bool>,
    limit: Option<u64>,
}

/// GET /gallery - Lists gallery items with optional filters.
async fn list_items(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = GalleryRepository::new((*state.db).clone());

    let filter = GalleryFilter {
        category: query.category,
        featured: query.featured.filter(|f| *f),
        limit: query.limit,
    };

    let items = repo.list(&filter).await?;
    Ok(Json(items))
}

/// GET /gallery/{id} - Fetches a single gallery item.
async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = GalleryRepository::new((*state.db).clone());

    let item = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Gallery item not found".to_string()))?;

    Ok(Json(item))
}
