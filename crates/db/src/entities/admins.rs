//! `SeaORM` Entity for the admins table.

use sea_orm::entity::prelude::*;
use serde::Serialize;

/// A back-office administrator account.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize)]
#[sea_orm(table_name = "admins")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Admin ID.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Email address, stored lowercased, unique.
    #[sea_orm(unique)]
    pub email: String,
    /// Argon2id PHC password hash. Never serialized.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Display name.
    pub name: String,
    /// Role: `admin` or `super_admin`.
    pub role: String,
    /// Inactive admins cannot log in.
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
