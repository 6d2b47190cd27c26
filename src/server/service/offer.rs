//! Time-limited product discounts.

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{offer::OfferRepository, product::ProductRepository},
    error::AppError,
    model::offer::{CreateOfferParams, Offer},
};

pub struct OfferService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> OfferService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(Offer)` - The created offer
    /// - `Err(AppError::BadRequest)` - Discount outside (0, 100] or end before start
    /// - `Err(AppError::NotFound)` - The product does not exist
    pub async fn create(&self, params: CreateOfferParams) -> Result<Offer, AppError> {
        if !(params.discount > 0.0 && params.discount <= 100.0) {
            return Err(AppError::BadRequest(
                "discount must be above 0 and at most 100".to_string(),
            ));
        }
        if params.end_date < params.start_date {
            return Err(AppError::BadRequest(
                "end_date must not be before start_date".to_string(),
            ));
        }
        if ProductRepository::new(self.db)
            .find_by_id(params.product_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound(format!(
                "Product {} not found",
                params.product_id
            )));
        }

        Ok(OfferRepository::new(self.db).create(params).await?)
    }

    /// Offers that have not ended yet, including ones that start later.
    pub async fn active(&self) -> Result<Vec<Offer>, AppError> {
        Ok(OfferRepository::new(self.db).active(Utc::now()).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory};

    #[tokio::test]
    async fn validates_discount_and_dates() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let product = factory::product::create_product(db).await?;
        let now = Utc::now();
        let valid = CreateOfferParams {
            product_id: product.id,
            discount: 15.0,
            description: "Ramadan sale".to_string(),
            start_date: now,
            end_date: now + Duration::days(7),
        };
        let service = OfferService::new(db);

        let zero = CreateOfferParams {
            discount: 0.0,
            ..valid.clone()
        };
        let over = CreateOfferParams {
            discount: 100.5,
            ..valid.clone()
        };
        let backwards = CreateOfferParams {
            end_date: now - Duration::days(1),
            ..valid.clone()
        };
        for invalid in [zero, over, backwards] {
            assert!(matches!(
                service.create(invalid).await,
                Err(AppError::BadRequest(_))
            ));
        }

        let missing = CreateOfferParams {
            product_id: 404,
            ..valid.clone()
        };
        assert!(matches!(
            service.create(missing).await,
            Err(AppError::NotFound(_))
        ));

        let offer = service.create(valid).await?;
        assert_eq!(service.active().await?[0].id, offer.id);

        Ok(())
    }
}
