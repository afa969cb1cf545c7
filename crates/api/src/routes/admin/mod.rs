//! Admin panel routes.
//!
//! Every route in this module is mounted behind the authentication
//! middleware; handlers can assume a validated admin token.

use axum::Router;

use crate::AppState;

pub mod contacts;
pub mod faqs;
pub mod gallery;
pub mod products;
pub mod stats;
pub mod team;
pub mod testimonials;

/// Creates the admin router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(stats::routes())
        .merge(products::routes())
        .merge(gallery::routes())
        .merge(testimonials::routes())
        .merge(team::routes())
        .merge(faqs::routes())
        .merge(contacts::routes())
}
