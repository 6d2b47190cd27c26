use chrono::{DateTime, Utc};

use crate::model::feedback::{CreateFeedbackDto, FeedbackDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub id: i32,
    pub user_id: i32,
    pub product_id: Option<i32>,
    pub rating: i32,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl Feedback {
    pub fn from_entity(entity: entity::feedback::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            product_id: entity.product_id,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> FeedbackDto {
        FeedbackDto {
            id: self.id,
            user_id: self.user_id,
            product_id: self.product_id,
            rating: self.rating,
            comment: self.comment,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateFeedbackParams {
    pub user_id: i32,
    pub product_id: Option<i32>,
    pub rating: i32,
    pub comment: String,
}

impl CreateFeedbackParams {
    pub fn from_dto(user_id: i32, dto: CreateFeedbackDto) -> Self {
        Self {
            user_id,
            product_id: dto.product_id,
            rating: dto.rating,
            comment: dto.comment,
        }
    }
}

/// Filters for the public feedback listing. Bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedbackFilter {
    pub min_rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub product_id: Option<i32>,
}
