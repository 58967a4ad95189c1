//! Database connection and migrations at process start.

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::server::{config::Config, error::Error};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Database connected and migrations applied");

    Ok(db)
}
