/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including database loading, migrations, account seeding and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Connect the SQLite pool (skipped when a pool is supplied)
 * 2. Run the embedded migrations
 * 3. Seed the configured admin / VIP accounts
 * 4. Build the application state (session keys, hasher, generator)
 * 5. Create and configure the router
 *
 * Every step is required; a failure in any of them aborts startup.
 */

use std::sync::Arc;

use axum::Router;
use chrono::Duration;
use sqlx::SqlitePool;
use thiserror::Error;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::SessionKeys;
use crate::backend::conversations::generator::{ChatCompletionsGenerator, GeneratorError};
use crate::backend::error::BackendError;
use crate::backend::routes::router::create_router;
use crate::backend::server::bootstrap::seed_accounts;
use crate::backend::server::config::{load_database, run_migrations, ServerConfig};
use crate::backend::server::state::AppState;

/// Failure while bringing the server up
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to connect to database: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Failed to run migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Failed to seed accounts: {0}")]
    Seed(#[from] BackendError),

    #[error("Failed to build reply generator: {0}")]
    Generator(#[from] GeneratorError),

    #[error("Invalid token lifetime: {0} hours")]
    TokenTtl(i64),
}

/// Create and configure the Axum application
///
/// Connects to `config.database_url` and delegates to
/// [`create_app_with_pool`].
pub async fn create_app(config: &ServerConfig) -> Result<Router<()>, StartupError> {
    tracing::info!("Initializing ChatNest backend server");

    // Step 1: Connect to the database
    let pool = load_database(config).await?;
    tracing::info!("Connected to database at {}", config.database_url);

    create_app_with_pool(config, pool).await
}

/// Create the application around an existing pool
///
/// Used by the binary after connecting, and by tests with an in-memory
/// database.
pub async fn create_app_with_pool(
    config: &ServerConfig,
    pool: SqlitePool,
) -> Result<Router<()>, StartupError> {
    let app_state = build_state(config, pool).await?;

    // Step 5: Create router with all routes
    let app = create_router(app_state, config.static_dir.as_deref());
    tracing::info!("Router configured");

    Ok(app)
}

/// Migrate, seed and assemble the application state
pub async fn build_state(config: &ServerConfig, pool: SqlitePool) -> Result<AppState, StartupError> {
    let ttl = Duration::try_hours(config.token_ttl_hours)
        .filter(|ttl| *ttl > Duration::zero())
        .ok_or(StartupError::TokenTtl(config.token_ttl_hours))?;

    // Step 2: Bring the schema up to date
    run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    // Step 3: Seed configured accounts
    let passwords = PasswordHasher::new(config.bcrypt_cost);
    let seeded = seed_accounts(&pool, &passwords, config.seed_accounts()).await?;
    if seeded > 0 {
        tracing::info!("Seeded {} account(s)", seeded);
    }

    // Step 4: Create app state
    let sessions = SessionKeys::new(&config.jwt_secret, ttl);
    let mut app_state = AppState::new(pool, sessions, passwords);

    match &config.generator {
        Some(generator_config) => {
            let generator = ChatCompletionsGenerator::new(generator_config)?;
            tracing::info!(
                "Reply generation enabled via {} (model {})",
                generator.endpoint(),
                generator_config.model
            );
            app_state = app_state.with_generator(Arc::new(generator));
        }
        None => tracing::info!("No reply generator configured; conversations are stored only"),
    }

    Ok(app_state)
}
