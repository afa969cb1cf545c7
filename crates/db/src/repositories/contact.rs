//! Contact repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use crate::entities::contacts;

/// Input for recording a contact-form submission.
#[derive(Debug, Clone)]
pub struct NewContactInput {
    /// Submitter name.
    pub name: String,
    /// Submitter email.
    pub email: String,
    /// Submitter phone, if provided.
    pub phone: Option<String>,
    /// Message body.
    pub message: String,
}

/// Contact counts for the dashboard.
#[derive(Debug, Clone, Copy)]
pub struct ContactStats {
    /// Total number of submissions.
    pub total: u64,
    /// Submissions still in `new` status.
    pub unread: u64,
}

/// Contact repository for intake and triage operations.
#[derive(Debug, Clone)]
pub struct ContactRepository {
    db: DatabaseConnection,
}

impl ContactRepository {
    /// Creates a new contact repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a submission with status `new`. The email is normalized
    /// to lowercase.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: NewContactInput) -> Result<contacts::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let contact = contacts::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            email: Set(input.email.trim().to_lowercase()),
            phone: Set(input.phone),
            message: Set(input.message),
            status: Set("new".to_string()),
            created_at: Set(now),
            updated_at: Set(now),
        };

        contact.insert(&self.db).await
    }

    /// Lists submissions, newest first, optionally filtered by status.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, status: Option<&str>) -> Result<Vec<contacts::Model>, DbErr> {
        let mut query =
            contacts::Entity::find().order_by_desc(contacts::Column::CreatedAt);

        if let Some(status) = status {
            query = query.filter(contacts::Column::Status.eq(status));
        }

        query.all(&self.db).await
    }

    /// Finds a submission by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<contacts::Model>, DbErr> {
        contacts::Entity::find_by_id(id).one(&self.db).await
    }

    /// Moves a submission to a new status. Returns `None` if no row
    /// exists with the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or update fails.
    pub async fn update_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<Option<contacts::Model>, DbErr> {
        let Some(contact) = contacts::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: contacts::ActiveModel = contact.into();
        active.status = Set(status.to_string());
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(Some(updated))
    }

    /// Deletes a submission. Returns `true` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = contacts::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Counts submissions for the dashboard.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn stats(&self) -> Result<ContactStats, DbErr> {
        let total = contacts::Entity::find().count(&self.db).await?;
        let unread = contacts::Entity::find()
            .filter(contacts::Column::Status.eq("new"))
            .count(&self.db)
            .await?;

        Ok(ContactStats { total, unread })
    }
}
