//! Product and service feedback.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{feedback::FeedbackRepository, product::ProductRepository},
    error::AppError,
    model::feedback::{CreateFeedbackParams, Feedback, FeedbackFilter},
};

pub struct FeedbackService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FeedbackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// # Returns
    /// - `Ok(Feedback)` - Stored feedback
    /// - `Err(AppError::BadRequest)` - Rating outside 1 to 5
    /// - `Err(AppError::NotFound)` - The referenced product does not exist
    pub async fn submit(&self, params: CreateFeedbackParams) -> Result<Feedback, AppError> {
        if !(1..=5).contains(&params.rating) {
            return Err(AppError::BadRequest(
                "rating must be between 1 and 5".to_string(),
            ));
        }
        if let Some(product_id) = params.product_id {
            if ProductRepository::new(self.db)
                .find_by_id(product_id)
                .await?
                .is_none()
            {
                return Err(AppError::NotFound(format!("Product {} not found", product_id)));
            }
        }

        let params = CreateFeedbackParams {
            comment: params.comment.trim().to_string(),
            ..params
        };

        Ok(FeedbackRepository::new(self.db).create(params).await?)
    }

    pub async fn list(&self, filter: FeedbackFilter) -> Result<Vec<Feedback>, AppError> {
        Ok(FeedbackRepository::new(self.db).list(filter).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn params(user_id: i32, product_id: Option<i32>, rating: i32) -> CreateFeedbackParams {
        CreateFeedbackParams {
            user_id,
            product_id,
            rating,
            comment: " Solid part ".to_string(),
        }
    }

    #[tokio::test]
    async fn rejects_out_of_range_rating() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await?;
        let service = FeedbackService::new(db);

        for rating in [0, 6] {
            assert!(matches!(
                service.submit(params(user.id, None, rating)).await,
                Err(AppError::BadRequest(_))
            ));
        }

        Ok(())
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await?;

        let result = FeedbackService::new(db)
            .submit(params(user.id, Some(404), 5))
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    #[tokio::test]
    async fn stores_trimmed_comment() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_all_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::user::create_user(db).await?;
        let product = factory::product::create_product(db).await?;

        let feedback = FeedbackService::new(db)
            .submit(params(user.id, Some(product.id), 5))
            .await?;

        assert_eq!(feedback.comment, "Solid part");
        assert_eq!(feedback.product_id, Some(product.id));

        Ok(())
    }
}
