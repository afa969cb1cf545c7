//! Public testimonial routes.

use axum::{Json, Router, extract::{Query, State}, response::IntoResponse, routing::get};
use serde::Deserialize;

use crate::{ApiError, AppState};
use stoneline_db::TestimonialRepository;

/// Creates the public testimonials router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/testimonials", get(list_testimonials))
}

#[derive(Debug, Default, Deserialize)]
struct TestimonialsQuery {
    featured: Option<bool>,
}

/// GET /testimonials - Lists active testimonials, newest first.
async fn list_testimonials(
    State(state): State<AppState>,
    Query(query): Query<TestimonialsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = TestimonialRepository::new((*state.db).clone());
    let testimonials = repo
        .list_active(query.featured.filter(|f| *f))
        .await?;
    Ok(Json(testimonials))
}
