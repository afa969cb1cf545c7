//! Gallery repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};
use uuid::Uuid;

use crate::entities::gallery_items;

/// Input for creating a gallery item.
#[derive(Debug, Clone)]
pub struct CreateGalleryItemInput {
    /// Title shown in the gallery.
    pub title: String,
    /// Description of the installation.
    pub description: String,
    /// Image URL.
    pub image: String,
    /// Project category.
    pub category: String,
    /// Project location.
    pub location: Option<String>,
    /// Shown in the featured strip.
    pub featured: bool,
}

/// Input for updating a gallery item. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateGalleryItemInput {
    /// Title shown in the gallery.
    pub title: Option<String>,
    /// Description of the installation.
    pub description: Option<String>,
    /// Image URL.
    pub image: Option<String>,
    /// Project category.
    pub category: Option<String>,
    /// Project location.
    pub location: Option<Option<String>>,
    /// Shown in the featured strip.
    pub featured: Option<bool>,
}

/// Filter options for listing gallery items.
#[derive(Debug, Clone, Default)]
pub struct GalleryFilter {
    /// Filter by category (exact match).
    pub category: Option<String>,
    /// Only featured items.
    pub featured: Option<bool>,
    /// Cap the number of rows returned.
    pub limit: Option<u64>,
}

/// Gallery repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct GalleryRepository {
    db: DatabaseConnection,
}

impl GalleryRepository {
    /// Creates a new gallery repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists gallery items matching the filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, filter: &GalleryFilter) -> Result<Vec<gallery_items::Model>, DbErr> {
        let mut query = gallery_items::Entity::find();

        if let Some(category) = &filter.category {
            query = query.filter(gallery_items::Column::Category.eq(category));
        }
        if let Some(featured) = filter.featured {
            query = query.filter(gallery_items::Column::Featured.eq(featured));
        }

        query = query.order_by_desc(gallery_items::Column::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        query.all(&self.db).await
    }

    /// Finds a gallery item by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<gallery_items::Model>, DbErr> {
        gallery_items::Entity::find_by_id(id).one(&self.db).await
    }

    /// Creates a new gallery item.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        input: CreateGalleryItemInput,
    ) -> Result<gallery_items::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let item = gallery_items::ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title),
            description: Set(input.description),
            image: Set(input.image),
            category: Set(input.category),
            location: Set(input.location),
            featured: Set(input.featured),
            created_at: Set(now),
            updated_at: Set(now),
        };

        item.insert(&self.db).await
    }

    /// Updates a gallery item. Returns `None` if no item exists with the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or update fails.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateGalleryItemInput,
    ) -> Result<Option<gallery_items::Model>, DbErr> {
        let Some(item) = gallery_items::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: gallery_items::ActiveModel = item.into();

        if let Some(title) = input.title {
            active.title = Set(title);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(image) = input.image {
            active.image = Set(image);
        }
        if let Some(category) = input.category {
            active.category = Set(category);
        }
        if let Some(location) = input.location {
            active.location = Set(location);
        }
        if let Some(featured) = input.featured {
            active.featured = Set(featured);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(Some(updated))
    }

    /// Deletes a gallery item. Returns `true` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = gallery_items::Entity::delete_by_id(id)
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }

    /// Counts all gallery items.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr> {
        gallery_items::Entity::find().count(&self.db).await
    }
}
