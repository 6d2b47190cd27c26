//! Spare part domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::product::{CreateProductDto, PaginatedProductsDto, ProductDto, UpdateProductDto},
    server::error::{internal::InternalError, AppError},
};

/// A purchasable spare part.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub category: String,
    pub brand: String,
    pub images: Vec<String>,
    pub specifications: serde_json::Value,
    pub is_featured: bool,
    pub trending_score: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Whether the part can currently be ordered.
    pub fn available(&self) -> bool {
        self.stock > 0
    }

    pub fn into_dto(self) -> ProductDto {
        ProductDto {
            available: self.available(),
            id: self.id,
            name: self.name,
            description: self.description,
            price: self.price,
            stock: self.stock,
            category: self.category,
            brand: self.brand,
            images: self.images,
            specifications: self.specifications,
            is_featured: self.is_featured,
            trending_score: self.trending_score,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    /// Converts an entity model to a product domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Product)` - The converted product
    /// - `Err(AppError::InternalErr(UnknownStoredValue))` - The images column is not a
    ///   JSON array of strings
    pub fn from_entity(entity: entity::product::Model) -> Result<Self, AppError> {
        let images = serde_json::from_value::<Vec<String>>(entity.images.clone()).map_err(|_| {
            InternalError::UnknownStoredValue {
                column: "product.images",
                value: entity.images.to_string(),
            }
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            price: entity.price,
            stock: entity.stock,
            category: entity.category,
            brand: entity.brand,
            images,
            specifications: entity.specifications,
            is_featured: entity.is_featured,
            trending_score: entity.trending_score,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductParams {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub stock: i32,
    pub category: String,
    pub brand: String,
    pub images: Vec<String>,
    pub specifications: serde_json::Value,
    pub is_featured: bool,
}

impl CreateProductParams {
    pub fn from_dto(dto: CreateProductDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            price: dto.price,
            stock: dto.stock,
            category: dto.category,
            brand: dto.brand,
            images: dto.images,
            specifications: dto
                .specifications
                .unwrap_or_else(|| serde_json::Value::Object(Default::default())),
            is_featured: dto.is_featured,
        }
    }
}

/// Partial product update; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProductParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub images: Option<Vec<String>>,
    pub specifications: Option<serde_json::Value>,
    pub is_featured: Option<bool>,
}

impl UpdateProductParams {
    pub fn from_dto(id: i32, dto: UpdateProductDto) -> Self {
        Self {
            id,
            name: dto.name,
            description: dto.description,
            price: dto.price,
            stock: dto.stock,
            category: dto.category,
            brand: dto.brand,
            images: dto.images,
            specifications: dto.specifications,
            is_featured: dto.is_featured,
        }
    }
}

/// Optional exact-match filters for the catalogue listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub brand: Option<String>,
    pub category: Option<String>,
}

/// Sort direction for the price listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOrder {
    Asc,
    Desc,
}

impl PriceOrder {
    /// `desc` (any case) sorts descending, every other value ascending.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.trim().eq_ignore_ascii_case("desc") => Self::Desc,
            _ => Self::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedProducts {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedProducts {
    pub fn into_dto(self) -> PaginatedProductsDto {
        PaginatedProductsDto {
            products: self.products.into_iter().map(Product::into_dto).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_sort_order_falls_back_to_ascending() {
        assert_eq!(PriceOrder::from_query(None), PriceOrder::Asc);
        assert_eq!(PriceOrder::from_query(Some("sideways")), PriceOrder::Asc);
        assert_eq!(PriceOrder::from_query(Some("asc")), PriceOrder::Asc);
        assert_eq!(PriceOrder::from_query(Some("DESC")), PriceOrder::Desc);
    }

    #[test]
    fn availability_follows_stock() {
        let now = Utc::now();
        let mut product = Product {
            id: 1,
            name: "Filter".into(),
            description: String::new(),
            price: 10.0,
            stock: 0,
            category: "filters".into(),
            brand: "Komatsu".into(),
            images: vec![],
            specifications: serde_json::json!({}),
            is_featured: false,
            trending_score: 0,
            created_at: now,
            updated_at: now,
        };
        assert!(!product.available());

        product.stock = 1;
        assert!(product.clone().into_dto().available);
    }
}
