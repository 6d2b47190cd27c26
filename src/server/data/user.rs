//! User data repository for database operations.
//!
//! Provides the `UserRepository` for account creation, credential lookup, profile
//! updates and the admin listing. Password hashes only leave this module through
//! `find_credentials_by_email`.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::user::{CreateUserParams, Role, UpdateProfileParams, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// # Arguments
    /// - `params` - Validated account with the password already hashed
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::DbErr)` - Insert failed, including unique constraint violations
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            full_name: ActiveValue::Set(params.full_name),
            username: ActiveValue::Set(params.username),
            email: ActiveValue::Set(params.email),
            phone: ActiveValue::Set(params.phone),
            password_hash: ActiveValue::Set(params.password_hash),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            address: ActiveValue::Set(None),
            profile_picture: ActiveValue::Set("default.jpg".to_string()),
            company_name: ActiveValue::Set(None),
            company_logo: ActiveValue::Set(None),
            company_address: ActiveValue::Set(None),
            website: ActiveValue::Set(None),
            points: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(AppError)` - Database error or unreadable row
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user and their stored password hash by email.
    ///
    /// # Arguments
    /// - `email` - Lower-cased email address
    ///
    /// # Returns
    /// - `Ok(Some((User, hash)))` - Account found
    /// - `Ok(None)` - No account uses that email
    /// - `Err(AppError)` - Database error or unreadable row
    pub async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, AppError> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let hash = entity.password_hash.clone();
        Ok(Some((User::from_entity(entity)?, hash)))
    }

    /// Returns the name of the first unique field already used by another account.
    ///
    /// Checked before inserting so that the client gets a message naming the field
    /// instead of a bare constraint violation.
    ///
    /// # Returns
    /// - `Ok(Some("email" | "username" | "phone"))` - The field that collides
    /// - `Ok(None)` - All three values are free
    pub async fn find_duplicate_field(
        &self,
        email: &str,
        username: &str,
        phone: &str,
    ) -> Result<Option<&'static str>, AppError> {
        let existing = entity::prelude::User::find()
            .filter(
                Condition::any()
                    .add(entity::user::Column::Email.eq(email))
                    .add(entity::user::Column::Username.eq(username))
                    .add(entity::user::Column::Phone.eq(phone)),
            )
            .all(self.db)
            .await?;

        let field = if existing.iter().any(|u| u.email == email) {
            Some("email")
        } else if existing.iter().any(|u| u.username == username) {
            Some("username")
        } else if existing.iter().any(|u| u.phone == phone) {
            Some("phone")
        } else {
            None
        };

        Ok(field)
    }

    /// Checks whether a phone number belongs to an account other than `user_id`.
    pub async fn phone_taken_by_other(&self, phone: &str, user_id: i32) -> Result<bool, AppError> {
        let count = entity::prelude::User::find()
            .filter(entity::user::Column::Phone.eq(phone))
            .filter(entity::user::Column::Id.ne(user_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used at startup to decide whether to issue an admin bootstrap code.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets all users with pagination, oldest accounts first.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users per page, must be above zero
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users on the requested page and the total user count
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(page)
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Applies a profile update, leaving `None` fields untouched.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<Option<User>, AppError> {
        let Some(existing) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = existing.into();

        if let Some(full_name) = params.full_name {
            active.full_name = ActiveValue::Set(full_name);
        }
        if let Some(phone) = params.phone {
            active.phone = ActiveValue::Set(phone);
        }
        if let Some(address) = params.address {
            active.address = ActiveValue::Set(Some(address));
        }
        if let Some(profile_picture) = params.profile_picture {
            active.profile_picture = ActiveValue::Set(profile_picture);
        }
        if let Some(company_name) = params.company_name {
            active.company_name = ActiveValue::Set(Some(company_name));
        }
        if let Some(company_logo) = params.company_logo {
            active.company_logo = ActiveValue::Set(Some(company_logo));
        }
        if let Some(company_address) = params.company_address {
            active.company_address = ActiveValue::Set(Some(company_address));
        }
        if let Some(website) = params.website {
            active.website = ActiveValue::Set(Some(website));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)?))
    }

    /// Deletes a user; dependent rows are removed by the cascading foreign keys.
    ///
    /// # Returns
    /// - `Ok(true)` - The user existed and was deleted
    /// - `Ok(false)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
