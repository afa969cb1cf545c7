//! Admin dashboard statistics.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};
use serde_json::json;

use crate::middleware::auth::AuthAdmin;
use crate::{ApiError, AppState};
use stoneline_db::{ContactRepository, GalleryRepository, ProductRepository};

/// Creates the stats router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/stats", get(get_stats))
}

/// GET /admin/stats - Content and contact counts for the dashboard.
async fn get_stats(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> Result<impl IntoResponse, ApiError> {
    let products = ProductRepository::new((*state.db).clone());
    let gallery = GalleryRepository::new((*state.db).clone());
    let contacts = ContactRepository::new((*state.db).clone());

    let products_count = products.count().await?;
    let gallery_count = gallery.count().await?;
    let contact_stats = contacts.stats().await?;

    Ok(Json(json!({
        "productsCount": products_count,
        "galleryCount": gallery_count,
        "newContactsCount": contact_stats.unread,
        "totalContactsCount": contact_stats.total,
    })))
}
