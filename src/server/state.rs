//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. Every field is cheap to clone: the
//! database pool, the HTTP client and the in-memory services share their data
//! through reference counting.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{
        admin::code::AdminCodeService, auth::token::TokenService, otp::OtpService,
        trending::TrendingCache,
    },
};

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// HTTP client for Stripe, carrier, SMS and assistant requests.
    ///
    /// Configured without redirect following.
    pub http_client: reqwest::Client,

    /// Signs and verifies bearer tokens.
    pub tokens: TokenService,

    /// Holds the one-time code that allows registering the first admin.
    pub admin_code_service: AdminCodeService,

    /// Pending phone verification codes.
    pub otp_service: OtpService,

    /// Snapshot of the most popular products, refreshed by the scheduler.
    pub trending: TrendingCache,

    /// Integration endpoints, keys and paths read at startup.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `http_client` - HTTP client for external API requests
    /// - `admin_code_service` - Service holding the admin bootstrap code
    /// - `trending` - Trending products snapshot shared with the scheduler
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        admin_code_service: AdminCodeService,
        trending: TrendingCache,
        config: Config,
    ) -> Self {
        Self {
            db,
            http_client,
            tokens: TokenService::new(&config.jwt_secret),
            admin_code_service,
            otp_service: OtpService::new(),
            trending,
            config: Arc::new(config),
        }
    }
}
