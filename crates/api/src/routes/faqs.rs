//! Public FAQ routes.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;

use crate::{ApiError, AppState};
use stoneline_db::FaqRepository;

/// Creates the public FAQ router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/faqs", get(list_faqs))
}

/// Query parameters for the FAQ listing.
#[derive(Debug, Default, Deserialize)]
struct FaqsQuery {
    category: Option<String>,
}

/// GET /faqs - Lists active FAQ entries in display order, optionally
/// filtered by category.
async fn list_faqs(
    State(state): State<AppState>,
    Query(query): Query<FaqsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let repo = FaqRepository::new((*state.db).clone());
    let faqs = repo.list_active(category).await?;
    Ok(Json(faqs))
}
