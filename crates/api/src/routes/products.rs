//! Public product catalog routes.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    response::IntoResponse,
    routing::get,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{ApiError, AppState};
use stoneline_db::{ProductRepository, repositories::ProductFilter};

/// Creates the public products router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products/{id}", get(get_product))
        .route("/products/{id}/related", get(related_products))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductsQuery {
    category: Option<String>,
    sub_category: Option<String>,
    search: Option<String>,
    popular: Option<bool>,
    limit: Option<u64>,
}

/// GET /products - Lists products with optional filters.
async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProductRepository::new((*state.db).clone());

    let filter = ProductFilter {
        category: query.category,
        sub_category: query.sub_category,
        search: query.search.filter(|s| !s.trim().is_empty()),
        // Only an explicit popular=true narrows the listing.
        popular: query.popular.filter(|p| *p),
        limit: query.limit,
    };

    let products = repo.list(&filter).await?;
    Ok(Json(products))
}

/// GET /products/{id} - Fetches a single product.
async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProductRepository::new((*state.db).clone());

    let product = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

/// GET /products/{id}/related - Lists up to four products in the same
/// category.
async fn related_products(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProductRepository::new((*state.db).clone());

    let product = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    let related = repo.related(&product.category, product.id).await?;
    Ok(Json(related))
}
