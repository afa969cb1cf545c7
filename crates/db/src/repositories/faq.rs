//! FAQ repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use crate::entities::faqs;

/// Input for creating an FAQ entry.
#[derive(Debug, Clone)]
pub struct CreateFaqInput {
    /// The question.
    pub question: String,
    /// The answer.
    pub answer: String,
    /// Optional grouping category.
    pub category: Option<String>,
    /// Display sort key.
    pub display_order: i32,
    /// Hidden from public reads when false.
    pub is_active: bool,
}

/// Input for updating an FAQ entry. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateFaqInput {
    /// The question.
    pub question: Option<String>,
    /// The answer.
    pub answer: Option<String>,
    /// Optional grouping category.
    pub category: Option<Option<String>>,
    /// Display sort key.
    pub display_order: Option<i32>,
    /// Hidden from public reads when false.
    pub is_active: Option<bool>,
}

/// FAQ repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct FaqRepository {
    db: DatabaseConnection,
}

impl FaqRepository {
    /// Creates a new FAQ repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active FAQ entries in display order, optionally narrowed to
    /// one category.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_active(&self, category: Option<&str>) -> Result<Vec<faqs::Model>, DbErr> {
        let mut query = faqs::Entity::find().filter(faqs::Column::IsActive.eq(true));

        if let Some(category) = category {
            query = query.filter(faqs::Column::Category.eq(category));
        }

        query
            .order_by_asc(faqs::Column::DisplayOrder)
            .all(&self.db)
            .await
    }

    /// Lists all FAQ entries for the admin panel, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> Result<Vec<faqs::Model>, DbErr> {
        faqs::Entity::find()
            .order_by_asc(faqs::Column::DisplayOrder)
            .all(&self.db)
            .await
    }

    /// Finds an FAQ entry by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<faqs::Model>, DbErr> {
        faqs::Entity::find_by_id(id).one(&self.db).await
    }

    /// Creates a new FAQ entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CreateFaqInput) -> Result<faqs::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let faq = faqs::ActiveModel {
            id: Set(Uuid::new_v4()),
            question: Set(input.question),
            answer: Set(input.answer),
            category: Set(input.category),
            display_order: Set(input.display_order),
            is_active: Set(input.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        faq.insert(&self.db).await
    }

    /// Updates an FAQ entry. Returns `None` if no row exists with the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or update fails.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateFaqInput,
    ) -> Result<Option<faqs::Model>, DbErr> {
        let Some(faq) = faqs::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: faqs::ActiveModel = faq.into();

        if let Some(question) = input.question {
            active.question = Set(question);
        }
        if let Some(answer) = input.answer {
            active.answer = Set(answer);
        }
        if let Some(category) = input.category {
            active.category = Set(category);
        }
        if let Some(display_order) = input.display_order {
            active.display_order = Set(display_order);
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(Some(updated))
    }

    /// Deletes an FAQ entry. Returns `true` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = faqs::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
