//! `SeaORM` Entity for the gallery_items table.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// An installation photo in the project gallery.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "gallery_items")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Gallery item ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Title shown in the gallery.
    pub title: String,
    /// Description of the installation.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Project category (Flooring, Countertops, ...).
    pub category: String,
    /// Project location, if known.
    pub location: Option<String>,
    /// Shown in the featured strip.
    pub featured: bool,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// No relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
