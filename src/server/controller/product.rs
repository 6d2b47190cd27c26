use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        product::{CreateProductDto, PaginatedProductsDto, ProductDto, UpdateProductDto},
    },
    server::{
        controller::param::{PriceSortParam, ProductListParam, SearchParam},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::product::{
            CreateProductParams, PriceOrder, Product, ProductFilter, UpdateProductParams,
        },
        service::product::ProductService,
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

fn into_dtos(products: Vec<Product>) -> Vec<ProductDto> {
    products.into_iter().map(Product::into_dto).collect()
}

/// Get the product catalogue with optional brand and category filters.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `params` - Exact-match filters and pagination parameters
///
/// # Returns
/// - `200 OK` - Paginated products, each flagged with `available`
/// - `400 Bad Request` - Page out of range
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(
        ("brand" = Option<String>, Query, description = "Only products of this brand"),
        ("category" = Option<String>, Query, description = "Only products in this category"),
        ("page" = Option<u64>, Query, description = "Page number (default: 0)"),
        ("entries" = Option<u64>, Query, description = "Items per page (default: 10, at most 100)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved products", body = PaginatedProductsDto),
        (status = 400, description = "Page out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(params): Query<ProductListParam>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = params.window()?;
    let filter = ProductFilter {
        brand: params.brand,
        category: params.category,
    };

    let products = ProductService::new(&state.db)
        .get_paginated(filter, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(products.into_dto())))
}

/// Search products by name, description or brand.
///
/// Matching is a case-insensitive substring match.
///
/// # Returns
/// - `200 OK` - Matching products
/// - `400 Bad Request` - Query is blank
#[utoipa::path(
    get,
    path = "/api/products/search",
    tag = PRODUCT_TAG,
    params(
        ("query" = String, Query, description = "Text to search for")
    ),
    responses(
        (status = 200, description = "Matching products", body = Vec<ProductDto>),
        (status = 400, description = "Query is blank", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParam>,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db).search(&params.query).await?;

    Ok((StatusCode::OK, Json(into_dtos(products))))
}

#[utoipa::path(
    get,
    path = "/api/products/featured",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "Up to 5 featured products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_featured_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db).featured().await?;

    Ok((StatusCode::OK, Json(into_dtos(products))))
}

/// Top products by trending score, served from the hourly snapshot.
#[utoipa::path(
    get,
    path = "/api/products/trending",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "Up to 10 trending products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_trending_products(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = ProductService::new(&state.db)
        .trending(&state.trending)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(products))))
}

/// All products sorted by price. Any `order` other than `desc` sorts ascending.
#[utoipa::path(
    get,
    path = "/api/products/sort/price",
    tag = PRODUCT_TAG,
    params(
        ("order" = Option<String>, Query, description = "`asc` (default) or `desc`")
    ),
    responses(
        (status = 200, description = "Products sorted by price", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sort_products_by_price(
    State(state): State<AppState>,
    Query(params): Query<PriceSortParam>,
) -> Result<impl IntoResponse, AppError> {
    let order = PriceOrder::from_query(params.order.as_deref());
    let products = ProductService::new(&state.db)
        .sorted_by_price(order)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(products))))
}

/// Products sharing the category and brand of the given product.
///
/// # Returns
/// - `200 OK` - Similar products, excluding the reference product
/// - `404 Not Found` - Reference product does not exist
#[utoipa::path(
    get,
    path = "/api/products/similar/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Reference product ID")
    ),
    responses(
        (status = 200, description = "Similar products", body = Vec<ProductDto>),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_similar_products(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let Some(products) = ProductService::new(&state.db).similar(id).await? else {
        return Err(AppError::NotFound("Product not found".to_string()));
    };

    Ok((StatusCode::OK, Json(into_dtos(products))))
}

#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "The product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let Some(product) = ProductService::new(&state.db).get_by_id(id).await? else {
        return Err(AppError::NotFound("Product not found".to_string()));
    };

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// Add a product to the catalogue.
///
/// # Access Control
/// - `Admin` - Only admins can create products
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Product data
///
/// # Returns
/// - `201 Created` - The created product
/// - `400 Bad Request` - Blank name, category or brand, or negative price or stock
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Caller is not an admin
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Product created", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let product = ProductService::new(&state.db)
        .create(CreateProductParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// Partially update a product. Absent fields keep their value.
///
/// # Access Control
/// - `Admin` - Only admins can update products
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Product updated", body = ProductDto),
        (status = 400, description = "Invalid product data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    let Some(product) = ProductService::new(&state.db)
        .update(UpdateProductParams::from_dto(id, payload), &state.trending)
        .await?
    else {
        return Err(AppError::NotFound("Product not found".to_string()));
    };

    Ok((StatusCode::OK, Json(product.into_dto())))
}

/// # Access Control
/// - `Admin` - Only admins can delete products
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(
        ("id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    if !ProductService::new(&state.db)
        .delete(id, &state.trending)
        .await?
    {
        return Err(AppError::NotFound("Product not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
