//! User domain models and parameters.
//!
//! Users are customers, companies (business buyers with company details) or admins.
//! Registration, profile updates and listing each have their own parameter type.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{
    model::user::{PaginatedUsersDto, RegisterAdminDto, RegisterUserDto, UpdateProfileDto, UserDto},
    server::{error::AppError, util::parse::parse_stored},
};

/// Account role controlling which profile fields apply and which routes are open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Company,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Company => "company",
            Self::Admin => "admin",
        }
    }
}

impl FromStr for Role {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "customer" => Ok(Self::Customer),
            "company" => Ok(Self::Company),
            "admin" => Ok(Self::Admin),
            _ => Err(()),
        }
    }
}

/// Stored user without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    pub address: Option<String>,
    pub profile_picture: String,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub company_address: Option<String>,
    pub website: Option<String>,
    /// Loyalty points
    pub points: i32,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            full_name: self.full_name,
            username: self.username,
            email: self.email,
            phone: self.phone,
            role: self.role.as_str().to_string(),
            address: self.address,
            profile_picture: self.profile_picture,
            company_name: self.company_name,
            company_logo: self.company_logo,
            company_address: self.company_address,
            website: self.website,
            points: self.points,
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - Stored role is not recognised
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        Ok(Self {
            id: entity.id,
            full_name: entity.full_name,
            username: entity.username,
            email: entity.email,
            phone: entity.phone,
            role: parse_stored("user.role", entity.role)?,
            address: entity.address,
            profile_picture: entity.profile_picture,
            company_name: entity.company_name,
            company_logo: entity.company_logo,
            company_address: entity.company_address,
            website: entity.website,
            points: entity.points,
            created_at: entity.created_at,
        })
    }
}

/// Registration request before validation and hashing.
#[derive(Debug, Clone)]
pub struct RegisterUserParams {
    pub full_name: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    /// Requested role as submitted, `None` meaning customer
    pub role: Option<String>,
}

impl RegisterUserParams {
    pub fn from_dto(dto: RegisterUserDto) -> Self {
        Self {
            full_name: dto.full_name,
            username: dto.username,
            email: dto.email,
            phone: dto.phone,
            password: dto.password,
            role: dto.role,
        }
    }

    /// Splits an admin registration into the account fields and the bootstrap code.
    pub fn from_admin_dto(dto: RegisterAdminDto) -> (Self, String) {
        (
            Self {
                full_name: dto.full_name,
                username: dto.username,
                email: dto.email,
                phone: dto.phone,
                password: dto.password,
                role: Some(Role::Admin.as_str().to_string()),
            },
            dto.admin_code,
        )
    }
}

/// Validated account ready to be inserted.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub full_name: String,
    pub username: String,
    /// Lower-cased email
    pub email: String,
    pub phone: String,
    pub password_hash: String,
    pub role: Role,
}

/// Profile changes; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProfileParams {
    pub full_name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub profile_picture: Option<String>,
    pub company_name: Option<String>,
    pub company_logo: Option<String>,
    pub company_address: Option<String>,
    pub website: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: UpdateProfileDto) -> Self {
        Self {
            full_name: dto.full_name,
            phone: dto.phone,
            address: dto.address,
            profile_picture: dto.profile_picture,
            company_name: dto.company_name,
            company_logo: dto.company_logo,
            company_address: dto.company_address,
            website: dto.website,
        }
    }

    /// Drops the fields the given role may not edit.
    ///
    /// Customers edit personal details, companies edit company details, admins edit both.
    pub fn restrict_to(self, role: Role) -> Self {
        match role {
            Role::Customer => Self {
                company_name: None,
                company_logo: None,
                company_address: None,
                website: None,
                ..self
            },
            Role::Company => Self {
                full_name: None,
                phone: None,
                address: None,
                profile_picture: None,
                ..self
            },
            Role::Admin => self,
        }
    }
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(User::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_update() -> UpdateProfileParams {
        UpdateProfileParams {
            full_name: Some("Name".into()),
            phone: Some("+966500000000".into()),
            address: Some("Riyadh".into()),
            profile_picture: Some("me.png".into()),
            company_name: Some("Acme".into()),
            company_logo: Some("logo.png".into()),
            company_address: Some("Jeddah".into()),
            website: Some("https://acme.example".into()),
        }
    }

    #[test]
    fn customer_cannot_edit_company_fields() {
        let params = full_update().restrict_to(Role::Customer);

        assert!(params.full_name.is_some());
        assert!(params.company_name.is_none());
        assert!(params.website.is_none());
    }

    #[test]
    fn company_cannot_edit_personal_fields() {
        let params = full_update().restrict_to(Role::Company);

        assert!(params.full_name.is_none());
        assert!(params.phone.is_none());
        assert!(params.company_logo.is_some());
    }

    #[test]
    fn admin_keeps_every_field() {
        assert_eq!(full_update().restrict_to(Role::Admin), full_update());
    }
}
