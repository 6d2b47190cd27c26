use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config, data::user::UserRepository, error::AppError,
    service::admin::code::AdminCodeService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for every outbound integration.
///
/// Redirects are not followed, so a misconfigured endpoint cannot bounce requests
/// carrying API keys to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Prepares an admin bootstrap code when the database has no admin yet.
///
/// The code is printed to the log and must be passed to `POST /api/users/register/admin`
/// within 15 minutes. Once an admin exists nothing is generated.
pub async fn check_for_admin(
    db: &DatabaseConnection,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;

    tracing::info!(
        "No admin account exists. Register one with admin code {} (valid for 15 minutes)",
        code
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    /// Tests bootstrap on an empty user table.
    ///
    /// Expected: a valid admin code is generated
    #[tokio::test]
    async fn generates_code_without_admin() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let admin_code_service = AdminCodeService::new();

        check_for_admin(db, &admin_code_service).await?;

        assert!(admin_code_service.has_valid_code().await);

        Ok(())
    }

    /// Tests bootstrap when an admin already exists.
    ///
    /// Expected: no code is generated
    #[tokio::test]
    async fn skips_code_with_existing_admin() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        factory::user::UserFactory::new(db)
            .role("admin")
            .build()
            .await
            .unwrap();
        let admin_code_service = AdminCodeService::new();

        check_for_admin(db, &admin_code_service).await?;

        assert!(!admin_code_service.has_valid_code().await);

        Ok(())
    }
}
