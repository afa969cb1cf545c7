//! Team member repository for database operations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};
use uuid::Uuid;

use crate::entities::team_members;

/// Input for creating a team member.
#[derive(Debug, Clone)]
pub struct CreateTeamMemberInput {
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
    /// Display sort key.
    pub display_order: i32,
    /// Hidden from public reads when false.
    pub is_active: bool,
}

/// Input for updating a team member. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateTeamMemberInput {
    /// Full name.
    pub name: Option<String>,
    /// Role/title.
    pub role: Option<String>,
    /// Short bio.
    pub description: Option<String>,
    /// Optional portrait URL.
    pub image: Option<Option<String>>,
    /// Contact email.
    pub email: Option<Option<String>>,
    /// Contact phone.
    pub phone: Option<Option<String>>,
    /// LinkedIn profile URL.
    pub linkedin: Option<Option<String>>,
    /// Display sort key.
    pub display_order: Option<i32>,
    /// Hidden from public reads when false.
    pub is_active: Option<bool>,
}

/// Team member repository for CRUD operations.
#[derive(Debug, Clone)]
pub struct TeamRepository {
    db: DatabaseConnection,
}

impl TeamRepository {
    /// Creates a new team repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists active team members in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_active(&self) -> Result<Vec<team_members::Model>, DbErr> {
        team_members::Entity::find()
            .filter(team_members::Column::IsActive.eq(true))
            .order_by_asc(team_members::Column::DisplayOrder)
            .all(&self.db)
            .await
    }

    /// Lists all team members for the admin panel, in display order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_all(&self) -> Result<Vec<team_members::Model>, DbErr> {
        team_members::Entity::find()
            .order_by_asc(team_members::Column::DisplayOrder)
            .all(&self.db)
            .await
    }

    /// Finds a team member by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<team_members::Model>, DbErr> {
        team_members::Entity::find_by_id(id).one(&self.db).await
    }

    /// Creates a new team member.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn create(
        &self,
        input: CreateTeamMemberInput,
    ) -> Result<team_members::Model, DbErr> {
        let now = chrono::Utc::now().into();
        let member = team_members::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            role: Set(input.role),
            description: Set(input.description),
            image: Set(input.image),
            email: Set(input.email),
            phone: Set(input.phone),
            linkedin: Set(input.linkedin),
            display_order: Set(input.display_order),
            is_active: Set(input.is_active),
            created_at: Set(now),
            updated_at: Set(now),
        };

        member.insert(&self.db).await
    }

    /// Updates a team member. Returns `None` if no row exists with the ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query or update fails.
    pub async fn update(
        &self,
        id: Uuid,
        input: UpdateTeamMemberInput,
    ) -> Result<Option<team_members::Model>, DbErr> {
        let Some(member) = team_members::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(None);
        };

        let mut active: team_members::ActiveModel = member.into();

        if let Some(name) = input.name {
            active.name = Set(name);
        }
        if let Some(role) = input.role {
            active.role = Set(role);
        }
        if let Some(description) = input.description {
            active.description = Set(description);
        }
        if let Some(image) = input.image {
            active.image = Set(image);
        }
        if let Some(email) = input.email {
            active.email = Set(email);
        }
        if let Some(phone) = input.phone {
            active.phone = Set(phone);
        }
        if let Some(linkedin) = input.linkedin {
            active.linkedin = Set(linkedin);
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

    /// Deletes a team member. Returns `true` if a row was removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the database delete fails.
    pub async fn delete(&self, id: Uuid) -> Result<bool, DbErr> {
        let result = team_members::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}
