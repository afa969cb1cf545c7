//! Admin testimonial management routes.

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
    TestimonialRepository,
    repositories::{CreateTestimonialInput, UpdateTestimonialInput},
};

/// Creates the admin testimonials router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/testimonials", get(list_testimonials))
        .route("/testimonials", post(create_testimonial))
        .route("/testimonials/{id}", put(update_testimonial))
        .route("/testimonials/{id}", delete(delete_testimonial))
}

const fn default_rating() -> i32 {
    5
}

const fn default_true() -> bool {
    true
}

/// JSON payload carried in the `data` form field on create.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestimonialData {
    name: String,
    #[serde(default)]
    role: String,
    #[serde(default)]
    company: String,
    content: String,
    #[serde(default = "default_rating")]
    rating: i32,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    featured: bool,
    #[serde(default = "default_true")]
    is_active: bool,
}

/// JSON payload carried in the `data` form field on update.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TestimonialUpdateData {
    name: Option<String>,
    role: Option<String>,
    company: Option<String>,
    content: Option<String>,
    rating: Option<i32>,
    /// Replaced by a fresh upload or this URL; omitting it leaves the
    /// stored image unchanged (no way to clear it to null).
    image: Option<String>,
    featured: Option<bool>,
    is_active: Option<bool>,
}

fn validate_rating(rating: i32) -> Result<(), ApiError> {
    if (1..=5).contains(&rating) {
        Ok(())
    } else {
        Err(ApiError::BadRequest(
            "Rating must be between 1 and 5".to_string(),
        ))
    }
}

/// GET /admin/testimonials - Lists all testimonials for the panel.
async fn list_testimonials(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let repo = TestimonialRepository::new((*state.db).clone());
    let testimonials = repo.list_all().await?;
    Ok(Json(testimonials))
}

/// POST /admin/testimonials - Creates a testimonial from a multipart form.
async fn create_testimonial(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let max = state.images.config().max_file_size;
    let mut form = AdminForm::from_multipart(multipart, max).await?;
    let data: TestimonialData = form.parse_data()?;

    validate_rating(data.rating)?;

    let image = match form.take_file("image") {
        Some(file) => Some(state.images.upload(&file, "testimonials").await?),
        None => data.image.filter(|i| !i.is_empty()),
    };

    let repo = TestimonialRepository::new((*state.db).clone());
    let testimonial = repo
        .create(CreateTestimonialInput {
            name: data.name,
            role: data.role,
            company: data.company,
            content: data.content,
            rating: data.rating,
            image,
            featured: data.featured,
            is_active: data.is_active,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// PUT /admin/testimonials/{id} - Updates a testimonial.
async fn update_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let max = state.images.config().max_file_size;
    let mut form = AdminForm::from_multipart(multipart, max).await?;
    let data: TestimonialUpdateData = form.parse_data()?;

    if let Some(rating) = data.rating {
        validate_rating(rating)?;
    }

    let image = match form.take_file("image") {
        Some(file) => Some(state.images.upload(&file, "testimonials").await?),
        None => data.image,
    };

    let repo = TestimonialRepository::new((*state.db).clone());
    let testimonial = repo
        .update(
            id,
            UpdateTestimonialInput {
                name: data.name,
                role: data.role,
                company: data.company,
                content: data.content,
                rating: data.rating,
                image: image.map(Some),
                featured: data.featured,
                is_active: data.is_active,
            },
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Testimonial not found".to_string()))?;

    Ok(Json(testimonial))
}

/// DELETE /admin/testimonials/{id} - Deletes a testimonial.
async fn delete_testimonial(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let repo = TestimonialRepository::new((*state.db).clone());

    if !repo.delete(id).await? {
        return Err(ApiError::NotFound("Testimonial not found".to_string()));
    }

    Ok(Json(json!({ "message": "Testimonial deleted successfully" })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(validate_rating(1).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(0).is_err());
        assert!(validate_rating(6).is_err());
    }
}
