mod model;
mod server;

use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, scheduler::trending,
    service::{admin::code::AdminCodeService, trending::TrendingCache},
    startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("heavyparts=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let http_client = startup::setup_reqwest_client()?;
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    let admin_code_service = AdminCodeService::new();
    let trending_cache = TrendingCache::new();

    tracing::info!("Starting server");

    // Check for admin users and print a bootstrap code if none exist
    startup::check_for_admin(&db, &admin_code_service).await?;

    let scheduler_db = db.clone();
    let scheduler_cache = trending_cache.clone();
    tokio::spawn(async move {
        if let Err(e) = trending::start_scheduler(scheduler_db, scheduler_cache).await {
            tracing::error!("Trending products scheduler error: {}", e);
        }
    });

    let bind_addr = config.bind_addr;
    let app = server::router::router(&config.upload_dir)?.with_state(AppState::new(
        db,
        http_client,
        admin_code_service,
        trending_cache,
        config,
    ));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
