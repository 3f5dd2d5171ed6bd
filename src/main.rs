pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::account;

use crate::account::adapter::outgoing::security::{
    Argon2Hasher, BcryptHasher, PasswordHashingService,
};
use crate::account::adapter::outgoing::user_store_postgres::UserStorePostgres;
use crate::account::application::account_use_cases::AccountUseCases;
use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub account: AccountUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Try .env.{environment} first, then fall back to .env
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;

    // Database connection
    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to run migrations")?;
        info!("Migrations applied");
    }

    let db_arc = Arc::new(conn);

    let argon2_hasher = Argon2Hasher::with_params(
        config.argon2_memory_kib,
        config.argon2_iterations,
        config.argon2_parallelism,
    )
    .map_err(|e| anyhow::anyhow!("Invalid argon2 parameters: {e}"))?;
    let password_hasher = PasswordHashingService::new(
        config.password_hasher,
        BcryptHasher::with_cost(config.bcrypt_cost),
        argon2_hasher,
    );
    info!(algorithm = %password_hasher.algorithm(), "Password hasher configured");

    let user_store = UserStorePostgres::new(Arc::clone(&db_arc));
    let state = AppState {
        account: AccountUseCases::new(user_store, Arc::new(password_hasher)),
    };

    let server_url = config.server_url();
    info!(address = %server_url, "Server listening");

    let db_for_server = Arc::clone(&db_arc);
    let openapi = ApiDoc::openapi();

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    info!("Server stopped, closing database connection");
    close_database(db_arc).await;

    Ok(())
}

/// Closes the pool when `db` is the last handle, otherwise leaves it to drop.
/// Returns whether the pool was closed.
async fn close_database(db: Arc<DatabaseConnection>) -> bool {
    match Arc::try_unwrap(db) {
        Ok(db) => match db.close().await {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, "Failed to close database connection");
                false
            }
        },
        Err(shared) => {
            warn!(
                handles = Arc::strong_count(&shared),
                "Database connection still shared, leaving pool to drop"
            );
            false
        }
    }
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Account
    crate::account::adapter::incoming::web::routes::configure(cfg);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
        std::process::exit(1);
    }
}
