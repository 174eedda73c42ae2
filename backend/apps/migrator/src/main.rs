//! Migrator
//!
//! Applies `database/migrations` to `DATABASE_URL` and exits. Already-applied
//! migrations are skipped, so running it twice is harmless.

use platform::config::DatabaseSettings;
use platform::telemetry;
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if dotenvy::dotenv().is_err() {
        eprintln!(".env not found, using the process environment");
    }
    telemetry::init_tracing("migrator=info,sqlx=warn");

    let database = DatabaseSettings::from_env()?;

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&database.url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");
    Ok(())
}
