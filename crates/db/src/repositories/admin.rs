//! Admin repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use uuid::Uuid;

use crate::entities::admins;

/// Admin repository for account lookups and bootstrap creation.
#[derive(Debug, Clone)]
pub struct AdminRepository {
    db: DatabaseConnection,
}

impl AdminRepository {
    /// Creates a new admin repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds an admin by email. The lookup is case-insensitive because
    /// emails are stored lowercased.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<admins::Model>, DbErr> {
        admins::Entity::find()
            .filter(admins::Column::Email.eq(email.trim().to_lowercase()))
            .one(&self.db)
            .await
    }

    /// Finds an admin by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<admins::Model>, DbErr> {
        admins::Entity::find_by_id(id).one(&self.db).await
    }

    /// Counts all admin accounts. Used by the one-time setup gate.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr> {
        admins::Entity::find().count(&self.db).await
    }

    /// Creates a new admin account. The email is normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        name: &str,
        role: &str,
    ) -> Result<admins::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let admin = admins::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(email.trim().to_lowercase()),
            password_hash: Set(password_hash.to_string()),
            name: Set(name.to_string()),
            role: Set(role.to_string()),
            is_active: Set(true),
            created_at: Set(now),
            updated_at: Set(now),
        };

        admin.insert(&self.db).await
    }
}
