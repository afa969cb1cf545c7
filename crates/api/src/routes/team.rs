//! Public team routes.

use axum::{Json, Router, extract::State, response::IntoResponse, routing::get};

use crate::{ApiError, AppState};
use stoneline_db::TeamRepository;

/// Creates the public team router.
pub fn routes() -> Router<AppState> {
    Router::new().route("/team", get(list_team))
}

/// GET /team - Lists active team members in display order.
async fn list_team(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let repo = TeamRepository::new((*state.db).clone());
    let members = repo.list_active().await?;
    Ok(Json(members))
}
