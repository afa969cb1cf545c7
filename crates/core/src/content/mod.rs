//! Catalog domain types.
//!
//! This module provides:
//! - Category and status enums validated at the API boundary
//! - The gallery reconciliation plan for multi-image products

mod category;
mod gallery;
mod status;

pub use category::{GalleryCategory, ProductCategory};
pub use gallery::GalleryPlan;
pub use status::ContactStatus;
