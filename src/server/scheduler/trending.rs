use sea_orm::DatabaseConnection;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::trending::TrendingCache};

/// Starts the trending products scheduler
///
/// Rebuilds the trending snapshot at the top of every hour. The snapshot is also
/// loaded once right away so the first request after startup is served from memory.
///
/// # Arguments
/// - `db`: Database connection
/// - `cache`: Snapshot shared with the request handlers
pub async fn start_scheduler(db: DatabaseConnection, cache: TrendingCache) -> Result<(), AppError> {
    cache.refresh(&db).await?;

    let scheduler = JobScheduler::new().await?;

    let job_db = db.clone();
    let job_cache = cache.clone();

    let job = Job::new_async("0 0 * * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let cache = job_cache.clone();

        Box::pin(async move {
            match cache.refresh(&db).await {
                Ok(products) => {
                    tracing::debug!("Refreshed trending snapshot with {} products", products.len())
                }
                Err(e) => tracing::error!("Error refreshing trending products: {}", e),
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Trending products scheduler started");

    Ok(())
}
