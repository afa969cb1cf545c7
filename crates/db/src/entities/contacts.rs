//! `SeaORM` Entity for the contacts table.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A contact-form submission.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "contacts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Contact ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Submitter name.
    pub name: String,
    /// Submitter email, stored lowercased.
    pub email: String,
    /// Submitter phone, if provided.
    pub phone: Option<String>,
    /// Message body.
    pub message: String,
    /// Status: new, read, replied, archived.
    pub status: String,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// No relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
