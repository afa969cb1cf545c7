//! `SeaORM` Entity for the faqs table.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A frequently asked question.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "faqs")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// FAQ ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
    /// Optional grouping category.
    pub category: Option<String>,
    /// Display sort key, ascending. Serialized as `order`.
    #[serde(rename = "order")]
    pub display_order: i32,
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
