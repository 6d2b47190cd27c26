//! Product factory for creating test spare parts.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// Defaults to an in-stock Caterpillar hydraulic part priced at 100.0.
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: String,
    price: f64,
    stock: i32,
    category: String,
    brand: String,
    is_featured: bool,
    trending_score: i32,
}

impl<'a> ProductFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Part {}", id),
            description: "Replacement part for heavy machinery".to_string(),
            price: 100.0,
            stock: 10,
            category: "hydraulics".to_string(),
            brand: "Caterpillar".to_string(),
            is_featured: false,
            trending_score: 0,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = brand.into();
        self
    }

    pub fn featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    pub fn trending_score(mut self, trending_score: i32) -> Self {
        self.trending_score = trending_score;
        self
    }

    /// Builds and inserts the product entity into the database.
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();
        entity::product::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            price: ActiveValue::Set(self.price),
            stock: ActiveValue::Set(self.stock),
            category: ActiveValue::Set(self.category),
            brand: ActiveValue::Set(self.brand),
            images: ActiveValue::Set(serde_json::json!([])),
            specifications: ActiveValue::Set(serde_json::json!({})),
            is_featured: ActiveValue::Set(self.is_featured),
            trending_score: ActiveValue::Set(self.trending_score),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}
