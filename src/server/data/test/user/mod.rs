use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{CreateUserParams, Role, UpdateProfileParams},
};
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod find_duplicate_field;
mod get_all_paginated;
mod update_profile;
