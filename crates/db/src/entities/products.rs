//! `SeaORM` Entity for the products table.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A natural-stone product in the catalog.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "products")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Product ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Product name.
    pub name: String,
    /// Stone category: Marble, Granite, Quartz, Onyx, Other.
    pub category: String,
    /// Sub-category (e.g. "Italian Marble").
    pub sub_category: String,
    /// Country of origin.
    pub origin: String,
    /// Main image URL.
    pub image: String,
    /// Ordered gallery of image URLs, persisted verbatim.
    pub gallery: Json,
    /// Marketing description.
    pub description: String,
    /// Nested specifications: color, finish[], thickness[], sizes[].
    pub specifications: Json,
    /// Application list: [{name, description}].
    pub applications: Json,
    /// Imported vs. domestically quarried.
    pub is_imported: bool,
    /// Shown in the popular section.
    pub is_popular: bool,
    /// Currently in stock.
    pub in_stock: bool,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// No relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
