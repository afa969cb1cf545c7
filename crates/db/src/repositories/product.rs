//! Product repository for database operations.

use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set,
};
use serde_json::Value as Json;
use uuid::Uuid;

use crate::entities::products;

/// How many related products a detail page shows.
const RELATED_LIMIT: u64 = 4;

/// Input for creating a product.
#[derive(Debug, Clone)]
pub struct CreateProductInput {
    /// Product name.
    pub name: String,
    /// Stone category.
    pub category: String,
    /// Sub-category.
    pub sub_category: String,
    /// Country of origin.
    pub origin: String,
    /// Main image URL.
    pub image: String,
    /// Ordered gallery of image URLs.
    pub gallery: Json,
    /// Marketing description.
    pub description: String,
    /// Nested specifications object.
    pub specifications: Json,
    /// Application list.
    pub applications: Json,
    /// Imported vs. domestically quarried.
    pub is_imported: bool,
    /// Shown in the popular section.
    pub is_popular: bool,
    /// Currently in stock.
    pub in_stock: bool,
}

/// Input for updating a product. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProductInput {
    /// Product name.
    pub name: Option<String>,
    /// Stone category.
    pub category: Option<String>,
    /// Sub-category.
    pub sub_category: Option<String>,
    /// Country of origin.
    pub origin: Option<String>,
    /// Main image URL.
    pub image: Option<String>,
    /// Ordered gallery of image URLs, replaced wholesale.
    pub gallery: Option<Json>,
    /// Marketing description.
    pub description: Option<String>,
    /// Nested specifications object.
    pub specifications: Option<Json>,
    /// Application list.
    pub applications: Option<Json>,
    /// Imported vs. domestically quarried.
    pub is_imported: Option<bool>,
    /// Shown in the popular section.
    pub is_popular: Option<bool>,
    /// Currently in stock.
    pub in_stock: Option<bool>,
}

/// Filter options for listing products.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Filter by category (exact match).
    pub category: Option<String>,
    /// Filter by sub-category (exact match).
    pub sub_category: Option<String>,
    /// Case-insensitive substring search across name, description,
    /// category, sub-category, and origin.
    pub search: Option<String>,
    /// Only popular products.
    pub popular: Option<bool>,
    /// Cap the number of rows returned.
    pub limit: Option<u64>,
}

/// Product repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: DatabaseConnection,
}

impl ProductRepository {
    /// Creates a new product repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists products matching the filter, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, filter: &ProductFilter) -> Result<Vec<products::Model>, DbErr> {
        let mut query = products::Entity::find();

        if let Some(category) = &filter.category {
            query = query.filter(products::Column::Category.eq(category));
        }
        if let Some(sub_category) = &filter.sub_category {
            query = query.filter(products::Column::SubCategory.eq(sub_category));
        }
        if let Some(popular) = filter.popular {
            query = query.filter(products::Column::IsPopular.eq(popular));
        }
        if let Some(search) = &filter.search {
            let pattern = format!("%{}%", search.trim());
            query = query.filter(
                Condition::any()
                    .add(Expr::col(products::Column::Name).ilike(&pattern))
                    .add(Expr::col(products::Column::Description).ilike(&pattern))
                    .add(Expr::col(products::Column::Category).ilike(&pattern))
                    .add(Expr::col(products::Column::SubCategory).ilike(&pattern))
                    .add(Expr::col(products::Column::Origin).ilike(&pattern)),
            );
        }

        query = query.order_by_desc(products::Column::CreatedAt);

        if let Some(limit) = filter.limit {
            query = query.limit(limit);
        }

        query.all(&self.db).await
    }

    /// Finds a product by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<products::Model>, DbErr> {
        products::Entity::find_by_id(id).one(&self.db).await
    }

    /// Lists up to four products in the same category, excluding the
    /// product itself.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn related(
        &self,
        category: &str,
        exclude_id: Uuid,
    ) -> Result<Vec<products::Model>, DbErr> {
        products::Entity::find()
            .filter(products::Column::Category.eq(category))
            .filter(products::Column::Id.ne(exclude_id))
            .order_by_desc(products::Column::CreatedAt)
            .limit(RELATED_LIMIT)
            .all(&self.db)
            .await
    }

    /// Creates a new product.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(&self, input: CreateProductInput) -> Result<products::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let product = products::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            category: Set(input.category),
            sub_category: Set(input.sub_category),
            origin: Set(input.origin),
            image: Set(input.image),
            gallery: Set(input.gallery),
            description: Set(input.description),
            specifications: Set(input.specifications),
            applications: Set(input.applications),
            is_imported: Set(input.is_imported),
            is_popular: Set(input.is_popular),
            in_stock: Set(input.in_stock),
            created_at: Set(now),
            updated_at: Set(now),
        };

        product.insert(&self.db).await
    }

    /// Updates a product. Returns `None` if no product exists with the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or update fails.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateProductInput,
    ) -> Result<Option<products::Model>, DbErr> {
        let Some(product) = products::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: products::ActiveModel = product.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(category) = input.category {
            active.category = Set(category);
        }
        if let Some(sub_category) = input.sub_category {
            active.sub_category = Set(sub_category);
        }
        if let Some(origin) = input.origin {
            active.origin = Set(origin);
        }
        if let Some(image) = input.image {
            active.image = Set(image);
        }
        if let Some(gallery) = input.gallery {
            active.gallery = Set(gallery);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(specifications) = input.specifications {
            active.specifications = Set(specifications);
        }
        if let Some(applications) = input.applications {
            active.applications = Set(applications);
        }
        if let Some(is_imported) = input.is_imported {
            active.is_imported = Set(is_imported);
        }
        if let Some(is_popular) = input.is_popular {
            active.is_popular = Set(is_popular);
        }
        if let Some(in_stock) = input.in_stock {
            active.in_stock = Set(in_stock);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&self.db).await?;
        Ok(Some(updated))
    }

    /// Deletes a product. Returns `true` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = products::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    /// Counts all products.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn count(&self) -> Result<u64, DbErr> {
        products::Entity::find().count(&self.db).await
    }
}
