//! User service for registration, login and profile management.
//!
//! Registration validates and normalises the submitted fields, rejects duplicates
//! with a message naming the colliding field and stores an Argon2 hash. Admin
//! accounts can only be created with the one-time bootstrap code.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{order::OrderRepository, user::UserRepository},
    error::{auth::AuthError, AppError},
    model::{
        order::Order,
        user::{
            CreateUserParams, PaginatedUsers, RegisterUserParams, Role, UpdateProfileParams, User,
        },
    },
    service::{
        admin::code::AdminCodeService,
        auth::{
            password::{hash_password, verify_password},
            token::TokenService,
        },
    },
    util::{
        parse::parse_request,
        validate::{require_non_blank, total_pages},
    },
};

pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a customer or company account.
    ///
    /// # Returns
    /// - `Ok(User)` - The created account
    /// - `Err(AppError::BadRequest)` - A field is blank or the role is not customer/company
    /// - `Err(AppError::Conflict)` - Email, username or phone already registered
    pub async fn register(&self, params: RegisterUserParams) -> Result<User, AppError> {
        let role = match params.role.as_deref() {
            None => Role::Customer,
            Some(value) => parse_request::<Role>("role", value)?,
        };
        if role == Role::Admin {
            return Err(AppError::BadRequest(
                "Admin accounts can not be self-registered".to_string(),
            ));
        }

        self.create_account(params, role).await
    }

    /// Registers an admin account using the bootstrap code.
    ///
    /// The submitted fields are validated and checked for duplicates first. The code
    /// is only consumed once the account is ready to be stored, so a rejected request
    /// can be retried with the same code.
    ///
    /// # Returns
    /// - `Ok(User)` - The created admin
    /// - `Err(AppError::BadRequest)` - A field is blank
    /// - `Err(AppError::Conflict)` - Email, username or phone already registered
    /// - `Err(AuthError::InvalidAdminCode)` - Code is wrong, expired or already used
    pub async fn register_admin(
        &self,
        params: RegisterUserParams,
        admin_code: &str,
        admin_codes: &AdminCodeService,
    ) -> Result<User, AppError> {
        let account = self.prepare_account(params, Role::Admin).await?;

        if !admin_codes.validate_and_consume(admin_code.trim()).await {
            return Err(AuthError::InvalidAdminCode.into());
        }

        let user = UserRepository::new(self.db).create(account).await?;
        tracing::info!("Admin account {} created with bootstrap code", user.id);

        Ok(user)
    }

    async fn create_account(&self, params: RegisterUserParams, role: Role) -> Result<User, AppError> {
        let account = self.prepare_account(params, role).await?;
        UserRepository::new(self.db).create(account).await
    }

    /// Normalises the registration, rejects duplicates and hashes the password.
    async fn prepare_account(
        &self,
        params: RegisterUserParams,
        role: Role,
    ) -> Result<CreateUserParams, AppError> {
        let full_name = require_non_blank("full_name", &params.full_name)?;
        let username = require_non_blank("username", &params.username)?;
        let email = require_non_blank("email", &params.email)?.to_lowercase();
        let phone = require_non_blank("phone", &params.phone)?;
        if params.password.trim().is_empty() {
            return Err(AppError::BadRequest("password is required".to_string()));
        }

        if let Some(field) = UserRepository::new(self.db)
            .find_duplicate_field(&email, &username, &phone)
            .await?
        {
            return Err(AppError::Conflict(format!("{} is already registered", field)));
        }

        Ok(CreateUserParams {
            full_name,
            username,
            email,
            phone,
            password_hash: hash_password(&params.password)?,
            role,
        })
    }

    /// Checks credentials and issues a token.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Credentials are valid
    /// - `Err(AppError::BadRequest)` - Email or password missing
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    pub async fn login(
        &self,
        email: &str,
        password: &str,
        tokens: &TokenService,
    ) -> Result<(String, User), AppError> {
        let email = require_non_blank("email", email)?.to_lowercase();
        if password.is_empty() {
            return Err(AppError::BadRequest("password is required".to_string()));
        }

        let Some((user, hash)) = UserRepository::new(self.db)
            .find_credentials_by_email(&email)
            .await?
        else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &hash) {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = tokens.issue(&user)?;
        Ok((token, user))
    }

    pub async fn get_all_users(&self, page: u64, per_page: u64) -> Result<PaginatedUsers, AppError> {
        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(page, per_page)
            .await?;

        Ok(PaginatedUsers {
            users,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// Updates the caller's profile with the fields their role may edit.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated profile
    /// - `Err(AppError::Conflict)` - The new phone number belongs to another account
    /// - `Err(AppError::NotFound)` - The account was deleted meanwhile
    pub async fn update_profile(
        &self,
        user: &User,
        params: UpdateProfileParams,
    ) -> Result<User, AppError> {
        let mut params = params.restrict_to(user.role);
        if let Some(phone) = params.phone.as_deref() {
            let phone = require_non_blank("phone", phone)?;
            if UserRepository::new(self.db)
                .phone_taken_by_other(&phone, user.id)
                .await?
            {
                return Err(AppError::Conflict("phone is already registered".to_string()));
            }
            params.phone = Some(phone);
        }

        UserRepository::new(self.db)
            .update_profile(user.id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// # Returns
    /// - `Ok(true)` - The user was deleted along with their orders and requests
    /// - `Ok(false)` - No user with that ID
    pub async fn delete_user(&self, id: i32) -> Result<bool, AppError> {
        UserRepository::new(self.db).delete(id).await
    }

    pub async fn get_orders(&self, user_id: i32) -> Result<Vec<Order>, AppError> {
        OrderRepository::new(self.db).get_by_user(user_id).await
    }
}
