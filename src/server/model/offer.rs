use chrono::{DateTime, Utc};

use crate::model::offer::{CreateOfferDto, OfferDto};

/// Time-limited percentage discount on a product.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub id: i32,
    pub product_id: i32,
    pub discount: f64,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl Offer {
    pub fn from_entity(entity: entity::offer::Model) -> Self {
        Self {
            id: entity.id,
            product_id: entity.product_id,
            discount: entity.discount,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
        }
    }

    pub fn into_dto(self) -> OfferDto {
        OfferDto {
            id: self.id,
            product_id: self.product_id,
            discount: self.discount,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateOfferParams {
    pub product_id: i32,
    pub discount: f64,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl CreateOfferParams {
    pub fn from_dto(dto: CreateOfferDto) -> Self {
        Self {
            product_id: dto.product_id,
            discount: dto.discount,
            description: dto.description,
            start_date: dto.start_date,
            end_date: dto.end_date,
        }
    }
}
