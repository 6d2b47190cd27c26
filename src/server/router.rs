//! Route table and OpenAPI document.
//!
//! Credential endpoints (register, login, OTP) sit behind a per-IP rate limit keyed
//! on the peer address, so the server must be served with connect info enabled.

use std::{path::Path, sync::Arc};

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model,
    server::{controller, error::AppError, state::AppState},
};

/// Requests allowed per IP before the credential limiter starts rejecting.
const CREDENTIAL_BURST: u32 = 10;
/// Seconds between replenished credential requests.
const CREDENTIAL_REPLENISH_SECS: u64 = 6;

#[derive(OpenApi)]
#[openapi(
    info(title = "Heavy Parts API", description = "Spare parts commerce backend"),
    paths(
        controller::health::health,
        controller::user::register,
        controller::user::register_admin,
        controller::user::login,
        controller::user::get_all_users,
        controller::user::get_profile,
        controller::user::update_profile,
        controller::user::delete_user,
        controller::user::get_user_orders,
        controller::user::send_otp,
        controller::user::verify_otp,
        controller::product::get_products,
        controller::product::search_products,
        controller::product::get_featured_products,
        controller::product::get_trending_products,
        controller::product::sort_products_by_price,
        controller::product::get_similar_products,
        controller::product::get_product,
        controller::product::create_product,
        controller::product::update_product,
        controller::product::delete_product,
        controller::upload::upload_image,
        controller::order::create_order,
        controller::order::get_orders,
        controller::order::get_order,
        controller::order::get_orders_by_user,
        controller::order::get_last_order_by_user,
        controller::order::update_order_status,
        controller::order::delete_order,
        controller::payment::create_checkout_session,
        controller::delivery::book_delivery,
        controller::subscription::create_subscription,
        controller::subscription::get_subscription,
        controller::subscription::update_loyalty,
        controller::feedback::create_feedback,
        controller::feedback::get_feedback,
        controller::maintenance::create_maintenance_request,
        controller::maintenance::get_maintenance_requests,
        controller::maintenance::get_my_maintenance_requests,
        controller::maintenance::update_maintenance_status,
        controller::chat::ask_assistant,
        controller::chat::get_chat_history,
        controller::offer::create_offer,
        controller::offer::get_offers,
        controller::faq::get_faqs,
        controller::faq::create_faq,
        controller::stats::get_monthly_sales,
        controller::stats::get_inventory,
    ),
    components(schemas(
        model::api::ErrorDto,
        model::api::MessageDto,
        model::api::HealthDto,
        model::user::UserDto,
        model::user::PaginatedUsersDto,
        model::user::RegisterUserDto,
        model::user::RegisterAdminDto,
        model::user::LoginDto,
        model::user::LoginResponseDto,
        model::user::UpdateProfileDto,
        model::user::SendOtpDto,
        model::user::VerifyOtpDto,
        model::product::ProductDto,
        model::product::PaginatedProductsDto,
        model::product::CreateProductDto,
        model::product::UpdateProductDto,
        model::upload::UploadDto,
        model::upload::UploadFormDto,
        model::order::OrderItemInputDto,
        model::order::CreateOrderDto,
        model::order::OrderItemDto,
        model::order::OrderDto,
        model::order::PaginatedOrdersDto,
        model::order::UpdateOrderStatusDto,
        model::payment::CheckoutSessionRequestDto,
        model::payment::CheckoutSessionDto,
        model::delivery::DeliveryRequestDto,
        model::delivery::DeliveryDto,
        model::subscription::CreateSubscriptionDto,
        model::subscription::SubscriptionDto,
        model::subscription::UpdateLoyaltyDto,
        model::feedback::CreateFeedbackDto,
        model::feedback::FeedbackDto,
        model::maintenance::CreateMaintenanceRequestDto,
        model::maintenance::MaintenanceRequestDto,
        model::maintenance::UpdateMaintenanceStatusDto,
        model::chat::ChatInquiryDto,
        model::chat::ChatAnswerDto,
        model::chat::ChatMessageDto,
        model::offer::CreateOfferDto,
        model::offer::OfferDto,
        model::faq::CreateFaqDto,
        model::faq::FaqDto,
        model::stats::MonthlySalesDto,
        model::stats::InventoryItemDto,
    )),
    modifiers(&BearerAuth),
)]
struct ApiDoc;

/// Registers the `bearer` security scheme referenced by protected paths.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Builds the application router.
///
/// # Arguments
/// - `upload_dir` - Directory served under `/uploads`
///
/// # Returns
/// - `Ok(Router)` - Router awaiting its `AppState`
/// - `Err(AppError::InternalError)` - Rate limiter configuration rejected
pub fn router(upload_dir: &Path) -> Result<Router<AppState>, AppError> {
    use controller::{
        chat, delivery, faq, feedback, health, maintenance, offer, order, payment, product,
        stats, subscription, upload, user,
    };

    let governor_config = GovernorConfigBuilder::default()
        .per_second(CREDENTIAL_REPLENISH_SECS)
        .burst_size(CREDENTIAL_BURST)
        .finish()
        .ok_or_else(|| {
            AppError::InternalError("Invalid credential rate limit configuration".to_string())
        })?;

    let credential_routes = Router::new()
        .route("/api/users/register", post(user::register))
        .route("/api/users/register/admin", post(user::register_admin))
        .route("/api/users/login", post(user::login))
        .route("/api/users/send-otp", post(user::send_otp))
        .route("/api/users/verify-otp", post(user::verify_otp))
        .layer(GovernorLayer::new(Arc::new(governor_config)));

    let api_routes = Router::new()
        .route("/api/health", get(health::health))
        .route("/api/users", get(user::get_all_users))
        .route(
            "/api/users/profile",
            get(user::get_profile).put(user::update_profile),
        )
        .route("/api/users/orders", get(user::get_user_orders))
        .route("/api/users/{id}", delete(user::delete_user))
        .route(
            "/api/products",
            get(product::get_products).post(product::create_product),
        )
        .route("/api/products/search", get(product::search_products))
        .route("/api/products/featured", get(product::get_featured_products))
        .route("/api/products/trending", get(product::get_trending_products))
        .route("/api/products/sort/price", get(product::sort_products_by_price))
        .route("/api/products/similar/{id}", get(product::get_similar_products))
        .route(
            "/api/products/{id}",
            get(product::get_product)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        .route("/api/uploads", post(upload::upload_image))
        .route(
            "/api/orders",
            get(order::get_orders).post(order::create_order),
        )
        .route(
            "/api/orders/{id}",
            get(order::get_order)
                .put(order::update_order_status)
                .delete(order::delete_order),
        )
        .route("/api/orders/user/{user_id}", get(order::get_orders_by_user))
        .route(
            "/api/orders/user/{user_id}/last",
            get(order::get_last_order_by_user),
        )
        .route(
            "/api/payments/checkout-session",
            post(payment::create_checkout_session),
        )
        .route("/api/delivery", post(delivery::book_delivery))
        .route("/api/subscriptions", post(subscription::create_subscription))
        .route(
            "/api/subscriptions/{user_id}",
            get(subscription::get_subscription).put(subscription::update_loyalty),
        )
        .route(
            "/api/feedback",
            get(feedback::get_feedback).post(feedback::create_feedback),
        )
        .route(
            "/api/maintenance",
            get(maintenance::get_maintenance_requests)
                .post(maintenance::create_maintenance_request),
        )
        .route(
            "/api/maintenance/mine",
            get(maintenance::get_my_maintenance_requests),
        )
        .route(
            "/api/maintenance/{id}",
            put(maintenance::update_maintenance_status),
        )
        .route("/api/chat/inquiry", post(chat::ask_assistant))
        .route("/api/chat/history", get(chat::get_chat_history))
        .route("/api/offers", get(offer::get_offers).post(offer::create_offer))
        .route("/api/faqs", get(faq::get_faqs).post(faq::create_faq))
        .route("/api/stats/monthly-sales", get(stats::get_monthly_sales))
        .route("/api/stats/inventory", get(stats::get_inventory));

    Ok(Router::new()
        .merge(credential_routes)
        .merge(api_routes)
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", ApiDoc::openapi()))
        .nest_service("/uploads", ServeDir::new(upload_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()))
}

#[cfg(test)]
mod tests {
    use std::net::SocketAddr;

    use axum::{
        body::Body,
        extract::ConnectInfo,
        http::{header::CONTENT_TYPE, Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use test_utils::builder::TestBuilder;
    use tower::ServiceExt;

    use super::*;
    use crate::server::{
        config::Config, service::admin::code::AdminCodeService,
        service::trending::TrendingCache,
    };

    fn test_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: "router-test-secret".to_string(),
            bind_addr: "127.0.0.1:0".parse().unwrap(),
            upload_dir: std::env::temp_dir(),
            client_url: "http://localhost:8081".to_string(),
            stripe_secret_key: None,
            chat_api_url: None,
            chat_api_key: None,
            sms_gateway_url: None,
            smsa_api_url: None,
            aramex_api_url: None,
        }
    }

    async fn test_app(db: sea_orm::DatabaseConnection) -> Router {
        let config = test_config();
        router(&config.upload_dir).unwrap().with_state(AppState::new(
            db,
            reqwest::Client::new(),
            AdminCodeService::new(),
            TrendingCache::new(),
            config,
        ))
    }

    /// Builds a JSON request as it arrives through a listener with connect info.
    fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
        let mut request = Request::builder()
            .method(method)
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        request
            .extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([127, 0, 0, 1], 40000))));
        request
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let app = test_app(test.db.clone().unwrap()).await;

        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn admin_route_requires_token() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let app = test_app(test.db.clone().unwrap()).await;

        let response = app
            .oneshot(Request::get("/api/users").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            body_json(response).await,
            json!({ "error": "Authentication required" })
        );
    }

    /// Tests registering, logging in and reading the profile with the issued token.
    ///
    /// Expected: 201, 200 with a token, then 200 with the same account
    #[tokio::test]
    async fn register_login_and_read_profile() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let app = test_app(test.db.clone().unwrap()).await;

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/users/register",
                json!({
                    "full_name": "Sara Buyer",
                    "username": "sara",
                    "email": "Sara@Example.com",
                    "phone": "+966500000001",
                    "password": "hunter22",
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(body_json(response).await.get("password_hash").is_none());

        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/api/users/login",
                json!({ "email": "sara@example.com", "password": "hunter22" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let login = body_json(response).await;
        let token = login["token"].as_str().unwrap().to_string();

        let response = app
            .oneshot(
                Request::get("/api/users/profile")
                    .header("Authorization", format!("Bearer {}", token))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let profile = body_json(response).await;
        assert_eq!(profile["username"], "sara");
        assert_eq!(profile["role"], "customer");
    }

    #[tokio::test]
    async fn wrong_password_is_unauthorized() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let app = test_app(test.db.clone().unwrap()).await;

        let response = app
            .oneshot(json_request(
                "POST",
                "/api/users/login",
                json!({ "email": "nobody@example.com", "password": "x" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let app = test_app(test.db.clone().unwrap()).await;

        let response = app
            .oneshot(Request::get("/api/products/999").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    /// Tests a page whose row offset overflows.
    ///
    /// Expected: 400 instead of a failed request
    #[tokio::test]
    async fn out_of_range_page_is_bad_request() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let app = test_app(test.db.clone().unwrap()).await;

        let response = app
            .oneshot(
                Request::get("/api/products?page=18446744073709551615&entries=10")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    /// Tests a page size above the listing limit.
    ///
    /// Expected: 200 with `per_page` capped at 100
    #[tokio::test]
    async fn oversized_page_is_capped() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let app = test_app(test.db.clone().unwrap()).await;

        let response = app
            .oneshot(
                Request::get("/api/products?page=3&entries=18446744073709551615")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let page = body_json(response).await;
        assert_eq!(page["per_page"], 100);
        assert_eq!(page["page"], 3);
    }

    #[tokio::test]
    async fn serves_openapi_document() {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let app = test_app(test.db.clone().unwrap()).await;

        let response = app
            .oneshot(
                Request::get("/api/docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let doc = body_json(response).await;
        assert!(doc["paths"].get("/api/orders").is_some());
    }
}
