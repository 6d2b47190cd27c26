//! Product data repository.
//!
//! The repository is generic over `ConnectionTrait` because stock reservation runs
//! inside the order transaction.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait, Func, LikeExpr},
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    error::AppError,
    model::{
        product::{CreateProductParams, PriceOrder, Product, ProductFilter, UpdateProductParams},
        stats::InventoryItem,
    },
};

/// Maximum number of products returned by the similar-products lookup.
const SIMILAR_LIMIT: u64 = 10;

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new product with zero trending score.
    pub async fn create(&self, params: CreateProductParams) -> Result<Product, AppError> {
        let now = Utc::now();
        let entity = entity::product::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            price: ActiveValue::Set(params.price),
            stock: ActiveValue::Set(params.stock),
            category: ActiveValue::Set(params.category),
            brand: ActiveValue::Set(params.brand),
            images: ActiveValue::Set(serde_json::json!(params.images)),
            specifications: ActiveValue::Set(params.specifications),
            is_featured: ActiveValue::Set(params.is_featured),
            trending_score: ActiveValue::Set(0),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Product::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Product>, AppError> {
        entity::prelude::Product::find_by_id(id)
            .one(self.db)
            .await?
            .map(Product::from_entity)
            .transpose()
    }

    /// Lists products matching the filter, newest first.
    ///
    /// # Returns
    /// - `Ok((products, total))` - Products on the requested page and the total match count
    pub async fn get_paginated(
        &self,
        filter: &ProductFilter,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Product>, u64), AppError> {
        let mut query = entity::prelude::Product::find();
        if let Some(brand) = &filter.brand {
            query = query.filter(entity::product::Column::Brand.eq(brand.as_str()));
        }
        if let Some(category) = &filter.category {
            query = query.filter(entity::product::Column::Category.eq(category.as_str()));
        }

        let paginator = query
            .order_by_desc(entity::product::Column::CreatedAt)
            .order_by_desc(entity::product::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let products = Self::convert_all(paginator.fetch_page(page).await?)?;

        Ok((products, total))
    }

    /// Case-insensitive substring search over name, description and brand.
    ///
    /// `%` and `_` in the query are matched literally.
    pub async fn search(&self, query: &str) -> Result<Vec<Product>, AppError> {
        let escaped = query
            .to_lowercase()
            .replace('\\', "\\\\")
            .replace('%', "\\%")
            .replace('_', "\\_");
        let pattern = format!("%{}%", escaped);

        let matches = |column: entity::product::Column| {
            Expr::expr(Func::lower(Expr::col(column)))
                .like(LikeExpr::new(pattern.clone()).escape('\\'))
        };

        let entities = entity::prelude::Product::find()
            .filter(
                Condition::any()
                    .add(matches(entity::product::Column::Name))
                    .add(matches(entity::product::Column::Description))
                    .add(matches(entity::product::Column::Brand)),
            )
            .order_by_asc(entity::product::Column::Name)
            .all(self.db)
            .await?;

        Self::convert_all(entities)
    }

    /// Featured products, newest first.
    pub async fn featured(&self, limit: u64) -> Result<Vec<Product>, AppError> {
        let entities = entity::prelude::Product::find()
            .filter(entity::product::Column::IsFeatured.eq(true))
            .order_by_desc(entity::product::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Self::convert_all(entities)
    }

    /// Products with the highest trending score. Ties go to the lower ID.
    pub async fn top_trending(&self, limit: u64) -> Result<Vec<Product>, AppError> {
        let entities = entity::prelude::Product::find()
            .order_by_desc(entity::product::Column::TrendingScore)
            .order_by_asc(entity::product::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Self::convert_all(entities)
    }

    pub async fn sorted_by_price(&self, order: PriceOrder) -> Result<Vec<Product>, AppError> {
        let query = entity::prelude::Product::find();
        let query = match order {
            PriceOrder::Asc => query.order_by_asc(entity::product::Column::Price),
            PriceOrder::Desc => query.order_by_desc(entity::product::Column::Price),
        };

        let entities = query
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        Self::convert_all(entities)
    }

    /// Other products sharing the category and brand of `product`.
    pub async fn similar_to(&self, product: &Product) -> Result<Vec<Product>, AppError> {
        let entities = entity::prelude::Product::find()
            .filter(entity::product::Column::Category.eq(product.category.as_str()))
            .filter(entity::product::Column::Brand.eq(product.brand.as_str()))
            .filter(entity::product::Column::Id.ne(product.id))
            .order_by_desc(entity::product::Column::TrendingScore)
            .limit(SIMILAR_LIMIT)
            .all(self.db)
            .await?;

        Self::convert_all(entities)
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - The updated product
    /// - `Ok(None)` - No product with that ID
    pub async fn update(&self, params: UpdateProductParams) -> Result<Option<Product>, AppError> {
        let Some(existing) = entity::prelude::Product::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::product::ActiveModel = existing.into();

        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(price) = params.price {
            active.price = ActiveValue::Set(price);
        }
        if let Some(stock) = params.stock {
            active.stock = ActiveValue::Set(stock);
        }
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(brand) = params.brand {
            active.brand = ActiveValue::Set(brand);
        }
        if let Some(images) = params.images {
            active.images = ActiveValue::Set(serde_json::json!(images));
        }
        if let Some(specifications) = params.specifications {
            active.specifications = ActiveValue::Set(specifications);
        }
        if let Some(is_featured) = params.is_featured {
            active.is_featured = ActiveValue::Set(is_featured);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Product::from_entity(updated)?))
    }

    /// Deletes a product.
    ///
    /// # Returns
    /// - `Ok(true)` - The product existed and was deleted
    /// - `Ok(false)` - No product with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Takes `quantity` units out of stock and adds them to the trending score.
    ///
    /// The update only applies while the stored stock still equals `expected_stock`,
    /// so a concurrent purchase between the read and this write makes it a no-op.
    ///
    /// # Returns
    /// - `Ok(true)` - Stock was reserved
    /// - `Ok(false)` - Stock changed since it was read; nothing was written
    pub async fn reserve_stock(
        &self,
        id: i32,
        quantity: i32,
        expected_stock: i32,
    ) -> Result<bool, AppError> {
        let result = entity::prelude::Product::update_many()
            .col_expr(
                entity::product::Column::Stock,
                Expr::value(expected_stock - quantity),
            )
            .col_expr(
                entity::product::Column::TrendingScore,
                Expr::col(entity::product::Column::TrendingScore).add(quantity),
            )
            .col_expr(entity::product::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(entity::product::Column::Id.eq(id))
            .filter(entity::product::Column::Stock.eq(expected_stock))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    /// Stock levels of every product, lowest stock first.
    pub async fn inventory(&self) -> Result<Vec<InventoryItem>, AppError> {
        let entities = entity::prelude::Product::find()
            .order_by_asc(entity::product::Column::Stock)
            .order_by_asc(entity::product::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|p| InventoryItem {
                id: p.id,
                name: p.name,
                stock: p.stock,
            })
            .collect())
    }

    fn convert_all(entities: Vec<entity::product::Model>) -> Result<Vec<Product>, AppError> {
        entities.into_iter().map(Product::from_entity).collect()
    }
}
