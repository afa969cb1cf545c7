//! `SeaORM` Entity for the team_members table.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A team member shown on the about page.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "team_members")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Team member ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Full name.
    pub name: String,
    /// Role/title.
    pub role: String,
    /// Short bio.
    pub description: String,
    /// Optional portrait URL.
    pub image: Option<String>,
    /// Contact email.
    pub email: Option<String>,
    /// Contact phone.
    pub phone: Option<String>,
    /// LinkedIn profile URL.
    pub linkedin: Option<String>,
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
