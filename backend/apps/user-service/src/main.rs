//! User Service Entry Point
//!
//! Registration, login and the current-user profile. Uses `anyhow` for
//! startup errors; request errors go through `auth::AuthError`.

use auth::{AuthConfig, PgUserRepository, auth_router};
use platform::config::{self, DatabaseSettings};
use platform::telemetry;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;

const DEFAULT_PORT: u16 = 8081;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init_tracing("user_service=info,auth=info,platform=info,tower_http=info");

    let database = DatabaseSettings::from_env()?;
    let jwt_secret = config::optional("JWT_SECRET");
    if jwt_secret.is_none() {
        tracing::warn!("JWT_SECRET is not set; login will fail until it is configured");
    }
    let addr = config::listen_addr(DEFAULT_PORT)?;

    let pool = PgPoolOptions::new()
        .max_connections(database.max_connections)
        .connect(&database.url)
        .await?;
    tracing::info!("Connected to database");

    let app = telemetry::instrument(auth_router(
        PgUserRepository::new(pool),
        AuthConfig::from_secret(jwt_secret.as_deref()),
    ));

    tracing::info!("user-service listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
