//! In-memory snapshot of the trending products.
//!
//! The snapshot is rebuilt hourly by the scheduler. It is dropped whenever an order
//! or a product edit changes what it holds, so the next read reloads it from the
//! database. It only saves queries; every read path falls back to the database when
//! it is empty.

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tokio::sync::RwLock;

use crate::server::{data::product::ProductRepository, error::AppError, model::product::Product};

/// Number of products in the trending listing.
pub const TRENDING_LIMIT: u64 = 10;

#[derive(Clone, Default)]
pub struct TrendingCache {
    snapshot: Arc<RwLock<Option<Vec<Product>>>>,
}

impl TrendingCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the snapshot, loading it first when empty.
    pub async fn get(&self, db: &DatabaseConnection) -> Result<Vec<Product>, AppError> {
        if let Some(products) = self.snapshot.read().await.as_ref() {
            return Ok(products.clone());
        }

        self.refresh(db).await
    }

    /// Reloads the snapshot from the database.
    pub async fn refresh(&self, db: &DatabaseConnection) -> Result<Vec<Product>, AppError> {
        let products = ProductRepository::new(db).top_trending(TRENDING_LIMIT).await?;
        *self.snapshot.write().await = Some(products.clone());

        Ok(products)
    }

    pub async fn invalidate(&self) {
        *self.snapshot.write().await = None;
    }
}
