//! Admin product management routes.

use axum::{
    Json, Router,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde::Deserialize;
use serde_json::json;
use tracing::{info, warn};
use uuid::Uuid;

use crate::extract::AdminForm;
use crate::{ApiError, AppState};
use stoneline_core::content::{GalleryPlan, ProductCategory};
use stoneline_db::{
    ProductRepository,
    repositories::{CreateProductInput, ProductFilter, UpdateProductInput},
};

/// Creates the admin products router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/products", post(create_product))
        .route("/products/{id}", put(update_product))
        .route("/products/{id}", delete(delete_product))
}

fn empty_object() -> serde_json::Value {
    json!({})
}

fn empty_array() -> serde_json::Value {
    json!([])
}

const fn default_true() -> bool {
    true
}

/// JSON payload carried in the `data` form field on create.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductData {
    name: String,
    category: ProductCategory,
    #[serde(default)]
    sub_category: String,
    #[serde(default)]
    origin: String,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    gallery: Vec<String>,
    #[serde(default)]
    description: String,
    #[serde(default = "empty_object")]
    specifications: serde_json::Value,
    #[serde(default = "empty_array")]
    applications: serde_json::Value,
    #[serde(default)]
    is_imported: bool,
    #[serde(default)]
    is_popular: bool,
    #[serde(default = "default_true")]
    in_stock: bool,
    /// Gallery URLs the admin kept, in their chosen order.
    #[serde(default)]
    existing_gallery: Vec<String>,
}

/// JSON payload carried in the `data` form field on update.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductUpdateData {
    name: Option<String>,
    category: Option<ProductCategory>,
    sub_category: Option<String>,
    origin: Option<String>,
    image: Option<String>,
    description: Option<String>,
    specifications: Option<serde_json::Value>,
    applications: Option<serde_json::Value>,
    is_imported: Option<bool>,
    is_popular: Option<bool>,
    in_stock: Option<bool>,
    /// Gallery URLs the admin kept, in their chosen order.
    #[serde(default)]
    existing_gallery: Vec<String>,
}

/// Uploads the numbered gallery files and merges them after the retained
/// URLs. A failed upload drops that image with a warning; everything else
/// keeps its order.
async fn reconcile_gallery(
    state: &AppState,
    form: &mut AdminForm,
    existing: Vec<String>,
) -> Vec<String> {
    let mut plan = GalleryPlan::retaining(existing);

    for (index, file) in form.take_gallery_files().into_iter().enumerate() {
        match state.images.upload(&file, "products/gallery").await {
            Ok(url) => plan.push_uploaded(url),
            Err(e) => {
                warn!(index, error = %e, "Failed to upload gallery image");
            }
        }
    }

    plan.merge()
}

/// GET /admin/products - Lists all products for the panel.
async fn list_products(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let repo = ProductRepository::new((*state.db).clone());
    let products = repo.list(&ProductFilter::default()).await?;
    Ok(Json(products))
}

/// POST /admin/products - Creates a product from a multipart form.
async fn create_product(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let max = state.images.config().max_file_size;
    let mut form = AdminForm::from_multipart(multipart, max).await?;
    let data: ProductData = form.parse_data()?;

    let image = match form.take_file("image") {
        Some(file) => state.images.upload(&file, "products").await?,
        None => data.image.unwrap_or_default(),
    };

    let merged = reconcile_gallery(&state, &mut form, data.existing_gallery).await;
    let gallery = if merged.is_empty() {
        data.gallery
    } else {
        merged
    };

    let repo = ProductRepository::new((*state.db).clone());
    let product = repo
        .create(CreateProductInput {
            name: data.name,
            category: data.category.to_string(),
            sub_category: data.sub_category,
            origin: data.origin,
            image,
            gallery: json!(gallery),
            description: data.description,
            specifications: data.specifications,
            applications: data.applications,
            is_imported: data.is_imported,
            is_popular: data.is_popular,
            in_stock: data.in_stock,
        })
        .await?;

    info!(product_id = %product.id, "Product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /admin/products/{id} - Updates a product from a multipart form.
///
/// The persisted gallery is rebuilt on every update: the retained URLs from
/// the form, in caller order, followed by any new uploads.
async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let max = state.images.config().max_file_size;
    let mut form = AdminForm::from_multipart(multipart, max).await?;
    let data: ProductUpdateData = form.parse_data()?;

    let image = match form.take_file("image") {
        Some(file) => Some(state.images.upload(&file, "products").await?),
        None => data.image,
    };

    let gallery = reconcile_gallery(&state, &mut form, data.existing_gallery).await;

    let repo = ProductRepository::new((*state.db).clone());
    let product = repo
        .update(
            id,
            UpdateProductInput {
                name: data.name,
                category: data.category.map(|c| c.to_string()),
                sub_category: data.sub_category,
                origin: data.origin,
                image,
                gallery: Some(json!(gallery)),
                description: data.description,
                specifications: data.specifications,
                applications: data.applications,
                is_imported: data.is_imported,
                is_popular: data.is_popular,
                in_stock: data.in_stock,
            },
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Product not found".to_string()))?;

    Ok(Json(product))
}

/// DELETE /admin/products/{id} - Deletes a product.
async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = ProductRepository::new((*state.db).clone());

    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Product not found".to_string()));
    }

    Ok(Json(json!({ "message": "Product deleted successfully" })))
}
