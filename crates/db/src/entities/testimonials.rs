//! `SeaORM` Entity for the testimonials table.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A customer testimonial.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "testimonials")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Testimonial ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Customer name.
    pub name: String,
    /// Customer role/title.
    pub role: String,
    /// Customer company.
    pub company: String,
    /// Testimonial body.
    pub content: String,
    /// Star rating, 1-5.
    pub rating: i32,
    /// Optional avatar URL.
    pub image: Option<String>,
    /// Shown on the home page.
    pub featured: bool,
    /// Hidden from public reads when false.
    pub is_active: bool,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// No relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
