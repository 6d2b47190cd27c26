//! Product catalogue service.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{
        CreateProductParams, PaginatedProducts, PriceOrder, Product, ProductFilter,
        UpdateProductParams,
    },
    service::trending::TrendingCache,
    util::validate::{require_non_blank, total_pages},
};

/// Maximum number of products in the featured listing.
const FEATURED_LIMIT: u64 = 5;

pub struct ProductService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> ProductService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a product after validating the required fields.
    ///
    /// # Returns
    /// - `Ok(Product)` - The created product
    /// - `Err(AppError::BadRequest)` - Blank name, category or brand, or negative price or stock
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        let params = CreateProductParams {
            name: require_non_blank("name", &params.name)?,
            category: require_non_blank("category", &params.category)?,
            brand: require_non_blank("brand", &params.brand)?,
            ..params
        };
        validate_amounts(Some(params.price), Some(params.stock))?;

        let product = ProductRepository::new(self.db).create(params).await?;
        tracing::info!("Created product {} ({})", product.id, product.name);

        Ok(product)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        ProductRepository::new(self.db).find_by_id(id).await
    }

    pub async fn get_paginated(
        &self,
        filter: ProductFilter,
        page: u64,
        per_page: u64,
    ) -> Result<PaginatedProducts, AppError> {
        let (products, total) = ProductRepository::new(self.db)
            .get_paginated(&filter, page, per_page)
            .await?;

        Ok(PaginatedProducts {
            products,
            total,
            page,
            per_page,
            total_pages: total_pages(total, per_page),
        })
    }

    /// # Returns
    /// - `Err(AppError::BadRequest)` - Query is blank
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, AppError> {
        let query = require_non_blank("query", query)?;
        ProductRepository::new(self.db).search(&query).await
    }

    pub async fn featured(&self) -> Result<Vec<Product>, AppError> {
        ProductRepository::new(self.db).featured(FEATURED_LIMIT).await
    }

    pub async fn trending(&self, cache: &TrendingCache) -> Result<Vec<Product>, AppError> {
        cache.get(self.db).await
    }

    pub async fn sorted_by_price(&self, order: PriceOrder) -> Result<Vec<Product>, AppError> {
        ProductRepository::new(self.db).sorted_by_price(order).await
    }

    /// # Returns
    /// - `Ok(Some(products))` - Products sharing category and brand
    /// - `Ok(None)` - The reference product does not exist
    pub async fn similar(&self, id: i32) -> Result<Option<Vec<Product>>, AppError> {
        let repo = ProductRepository::new(self.db);
        let Some(product) = repo.find_by_id(id).await? else {
            return Ok(None);
        };

        Ok(Some(repo.similar_to(&product).await?))
    }

    /// Applies a partial update, validating any provided fields.
    ///
    /// The trending snapshot is dropped after a successful update so it never serves
    /// a stale price or stock level.
    pub async fn update(
        &self,
        params: UpdateProductParams,
        trending: &TrendingCache,
    ) -> Result<Option<Product>, AppError> {
        let params = UpdateProductParams {
            name: params
                .name
                .as_deref()
                .map(|v| require_non_blank("name", v))
                .transpose()?,
            category: params
                .category
                .as_deref()
                .map(|v| require_non_blank("category", v))
                .transpose()?,
            brand: params
                .brand
                .as_deref()
                .map(|v| require_non_blank("brand", v))
                .transpose()?,
            ..params
        };
        validate_amounts(params.price, params.stock)?;

        let updated = ProductRepository::new(self.db).update(params).await?;
        if updated.is_some() {
            trending.invalidate().await;
        }

        Ok(updated)
    }

    /// Deletes a product and drops the trending snapshot if it existed.
    pub async fn delete(&self, id: i32, trending: &TrendingCache) -> Result<bool, AppError> {
        let deleted = ProductRepository::new(self.db).delete(id).await?;
        if deleted {
            trending.invalidate().await;
            tracing::info!("Deleted product {}", id);
        }

        Ok(deleted)
    }
}

fn validate_amounts(price: Option<f64>, stock: Option<i32>) -> Result<(), AppError> {
    if price.is_some_and(|p| !p.is_finite() || p < 0.0) {
        return Err(AppError::BadRequest("price must not be negative".to_string()));
    }
    if stock.is_some_and(|s| s < 0) {
        return Err(AppError::BadRequest("stock must not be negative".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn params() -> CreateProductParams {
        CreateProductParams {
            name: "  Bucket Tooth ".to_string(),
            description: String::new(),
            price: 35.0,
            stock: 40,
            category: "ground engaging".to_string(),
            brand: "Hensley".to_string(),
            images: vec![],
            specifications: serde_json::json!({}),
            is_featured: false,
        }
    }

    #[tokio::test]
    async fn trims_required_fields() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Product)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let product = ProductService::new(db).create(params()).await?;

        assert_eq!(product.name, "Bucket Tooth");

        Ok(())
    }

    #[tokio::test]
    async fn rejects_invalid_products() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Product)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = ProductService::new(db);

        let blank_brand = CreateProductParams {
            brand: " ".to_string(),
            ..params()
        };
        let negative_price = CreateProductParams {
            price: -1.0,
            ..params()
        };
        let negative_stock = CreateProductParams {
            stock: -1,
            ..params()
        };

        for invalid in [blank_brand, negative_price, negative_stock] {
            assert!(matches!(
                service.create(invalid).await,
                Err(AppError::BadRequest(_))
            ));
        }

        Ok(())
    }

    #[tokio::test]
    async fn blank_search_is_rejected() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Product)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = ProductService::new(db).search("   ").await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    #[tokio::test]
    async fn similar_reports_missing_product() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Product)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        factory::product::create_product(db).await?;

        let result = ProductService::new(db).similar(404).await?;

        assert!(result.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn deleted_product_leaves_trending() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Product)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let product = factory::product::ProductFactory::new(db)
            .trending_score(5)
            .build()
            .await?;
        let cache = TrendingCache::new();
        let service = ProductService::new(db);
        cache.refresh(db).await?;

        assert!(service.delete(product.id, &cache).await?);
        let trending = service.trending(&cache).await?;

        assert!(trending.iter().all(|p| p.id != product.id));

        Ok(())
    }

    #[tokio::test]
    async fn updated_price_reaches_trending() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Product)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let product = factory::product::ProductFactory::new(db)
            .price(100.0)
            .trending_score(5)
            .build()
            .await?;
        let cache = TrendingCache::new();
        let service = ProductService::new(db);
        cache.refresh(db).await?;

        let params = UpdateProductParams {
            id: product.id,
            price: Some(80.0),
            ..Default::default()
        };
        service.update(params, &cache).await?;
        let trending = service.trending(&cache).await?;

        assert_eq!(trending[0].price, 80.0);

        Ok(())
    }

    #[tokio::test]
    async fn featured_is_capped() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::Product)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        for _ in 0..7 {
            factory::product::ProductFactory::new(db)
                .featured(true)
                .build()
                .await?;
        }

        let featured = ProductService::new(db).featured().await?;

        assert_eq!(featured.len(), FEATURED_LIMIT as usize);

        Ok(())
    }
}
