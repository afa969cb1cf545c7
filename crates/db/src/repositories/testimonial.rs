//! Testimonial repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use crate::entities::testimonials;

/// Input for creating a testimonial.
#[derive(Debug, Clone)]
pub struct CreateTestimonialInput {
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
}

/// Input for updating a testimonial. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTestimonialInput {
    /// Customer name.
    pub name: Option<String>,
    /// Customer role/title.
    pub role: Option<String>,
    /// Customer company.
    pub company: Option<String>,
    /// Testimonial body.
    pub content: Option<String>,
    /// Star rating, 1-5.
    pub rating: Option<i32>,
    /// Optional avatar URL.
    pub image: Option<Option<String>>,
    /// Shown on the home page.
    pub featured: Option<bool>,
    /// Hidden from public reads when false.
    pub is_active: Option<bool>,
}

/// Testimonial repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct TestimonialRepository {
    db: DatabaseConnection,
}

impl TestimonialRepository {
    /// Creates a new testimonial repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active testimonials, newest first. The public surface only
    /// ever sees active rows.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_active(
        &self,
        featured: Option<bool>,
    ) -> Result<Vec<testimonials::Model>, DbErr> {
        let mut query = testimonials::Entity::find()
            .filter(testimonials::Column::IsActive.eq(true))
            .order_by_desc(testimonials::Column::CreatedAt);

        if let Some(featured) = featured {
            query = query.filter(testimonials::Column::Featured.eq(featured));
        }

        query.all(&self.db).await
    }

    /// Lists all testimonials for the admin panel, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> Result<Vec<testimonials::Model>, DbErr> {
        testimonials::Entity::find()
            .order_by_desc(testimonials::Column::CreatedAt)
            .all(&self.db)
            .await
    }

    /// Finds a testimonial by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<testimonials::Model>, DbErr> {
        testimonials::Entity::find_by_id(id).one(&self.db).await
    }

    /// Creates a new testimonial.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        input: CreateTestimonialInput,
    ) -> Result<testimonials::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let testimonial = testimonials::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            role: Set(input.role),
            company: Set(input.company),
            content: Set(input.content),
            rating: Set(input.rating),
            image: Set(input.image),
            featured: Set(input.featured),
            is_active: Set(input.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        testimonial.insert(&self.db).await
    }

    /// Updates a testimonial. Returns `None` if no row exists with the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or update fails.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateTestimonialInput,
    ) -> Result<Option<testimonials::Model>, DbErr> {
        let Some(testimonial) = testimonials::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: testimonials::ActiveModel = testimonial.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(role) = input.role {
            active.role = Set(role);
        }
        if let Some(company) = input.company {
            active.company = Set(company);
        }
        if let Some(content) = input.content {
            active.content = Set(content);
        }
        if let Some(rating) = input.rating {
            active.rating = Set(rating);
        }
        if let Some(image) = input.image {
            active.image = Set(image);
        }
        if let Some(featured) = input.featured {
            active.featured = Set(featured);
        }
        if let Some(is_active) = input.is_active {
            active.is_active = Set(is_active);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(Some(updated))
    }

    /// Deletes a testimonial. Returns `true` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = testimonials::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
