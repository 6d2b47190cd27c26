use crate::server::{
    data::feedback::FeedbackRepository,
    error::AppError,
    model::feedback::{CreateFeedbackParams, FeedbackFilter},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod list;
