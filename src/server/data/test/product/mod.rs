use crate::server::{
    data::product::ProductRepository,
    error::AppError,
    model::product::{CreateProductParams, PriceOrder, ProductFilter, UpdateProductParams},
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_paginated;
mod reserve_stock;
mod search;
mod similar_to;
mod sorted_by_price;
mod top_trending;
mod update;
