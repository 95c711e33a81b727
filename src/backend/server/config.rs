/**
 * Server Configuration
 *
 * This module loads the server configuration from environment variables
 * (after `.env` has been applied by the binary) and opens the SQLite pool.
 *
 * # Environment Variables
 *
 * | Variable | Default |
 * |---|---|
 * | `SERVER_PORT` | `3000` |
 * | `DATABASE_URL` | `sqlite://chatnest.db?mode=rwc` |
 * | `DATABASE_MAX_CONNECTIONS` | `5` |
 * | `JWT_SECRET` | development fallback, with a warning |
 * | `TOKEN_TTL_HOURS` | `24` |
 * | `BCRYPT_COST` | `10` |
 * | `STATIC_DIR` | unset (no frontend served) |
 * | `ADMIN_EMAIL`, `ADMIN_USERNAME`, `ADMIN_PASSWORD` | unset |
 * | `VIP_EMAIL`, `VIP_USERNAME`, `VIP_PASSWORD` | unset |
 * | `GENERATOR_URL`, `GENERATOR_MODEL`, `GENERATOR_API_KEY` | unset |
 */

use std::path::PathBuf;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use thiserror::Error;

/// Secret used when `JWT_SECRET` is missing. Only suitable for development.
pub const DEV_JWT_SECRET: &str = "chatnest-dev-secret-change-in-production";

/// Work factors bcrypt accepts
const BCRYPT_COST_RANGE: std::ops::RangeInclusive<u32> = 4..=31;

/// Session lifetimes accepted for `TOKEN_TTL_HOURS` (up to one year)
const TOKEN_TTL_HOURS_RANGE: std::ops::RangeInclusive<i64> = 1..=8760;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
    #[error("incomplete {prefix} account: {prefix}_EMAIL, {prefix}_USERNAME and {prefix}_PASSWORD must all be set")]
    IncompleteAccount { prefix: &'static str },
    #[error("GENERATOR_MODEL must be set when GENERATOR_URL is set")]
    MissingGeneratorModel,
}

/// An account created at startup if its email is not registered yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedAccount {
    pub username: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
}

/// Connection settings for the reply generation backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Base URL of an OpenAI-compatible API, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub bcrypt_cost: u32,
    /// Built frontend to serve for unknown paths
    pub static_dir: Option<PathBuf>,
    pub admin_account: Option<SeedAccount>,
    pub vip_account: Option<SeedAccount>,
    pub generator: Option<GeneratorConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            database_url: "sqlite://chatnest.db?mode=rwc".to_string(),
            database_max_connections: 5,
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl_hours: 24,
            bcrypt_cost: 10,
            static_dir: None,
            admin_account: None,
            vip_account: None,
            generator: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let jwt_secret = match get("JWT_SECRET") {
            Some(secret) => secret,
            None => {
                tracing::warn!("JWT_SECRET not set. Using the development secret.");
                defaults.jwt_secret
            }
        };

        let generator = match (get("GENERATOR_URL"), get("GENERATOR_MODEL")) {
            (Some(base_url), Some(model)) => Some(GeneratorConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                model,
                api_key: get("GENERATOR_API_KEY"),
            }),
            (Some(_), None) => return Err(ConfigError::MissingGeneratorModel),
            (None, _) => None,
        };

        let bcrypt_cost = parse_or("BCRYPT_COST", get("BCRYPT_COST"), defaults.bcrypt_cost)?;
        if !BCRYPT_COST_RANGE.contains(&bcrypt_cost) {
            return Err(ConfigError::InvalidValue {
                key: "BCRYPT_COST",
                value: bcrypt_cost.to_string(),
            });
        }

        let token_ttl_hours = parse_or(
            "TOKEN_TTL_HOURS",
            get("TOKEN_TTL_HOURS"),
            defaults.token_ttl_hours,
        )?;
        if !TOKEN_TTL_HOURS_RANGE.contains(&token_ttl_hours) {
            return Err(ConfigError::InvalidValue {
                key: "TOKEN_TTL_HOURS",
                value: token_ttl_hours.to_string(),
            });
        }

        Ok(Self {
            port: parse_or("SERVER_PORT", get("SERVER_PORT"), defaults.port)?,
            database_url: get("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: parse_or(
                "DATABASE_MAX_CONNECTIONS",
                get("DATABASE_MAX_CONNECTIONS"),
                defaults.database_max_connections,
            )?,
            jwt_secret,
            token_ttl_hours,
            bcrypt_cost,
            static_dir: get("STATIC_DIR").map(PathBuf::from),
            admin_account: seed_account("ADMIN", true, &get)?,
            vip_account: seed_account("VIP", false, &get)?,
            generator,
        })
    }

    /// Accounts to seed at startup, admin first
    pub fn seed_accounts(&self) -> impl Iterator<Item = &SeedAccount> {
        self.admin_account.iter().chain(self.vip_account.iter())
    }
}

fn parse_or<T: FromStr>(key: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        Some(value) => {
            let parsed = value.trim().parse::<T>();
            parsed.map_err(|_| ConfigError::InvalidValue { key, value })
        }
        None => Ok(default),
    }
}

fn seed_account<F>(prefix: &'static str, is_admin: bool, get: &F) -> Result<Option<SeedAccount>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let email = get(&format!("{}_EMAIL", prefix));
    let username = get(&format!("{}_USERNAME", prefix));
    let password = get(&format!("{}_PASSWORD", prefix));

    match (email, username, password) {
        (Some(email), Some(username), Some(password)) => Ok(Some(SeedAccount {
            username,
            email,
            password,
            is_admin,
        })),
        (None, None, None) => Ok(None),
        _ => Err(ConfigError::IncompleteAccount { prefix }),
    }
}

/// Open the SQLite connection pool
///
/// The database file is created if missing and foreign keys are enforced.
pub async fn load_database(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.database_max_connections)
        .connect_with(options)
        .await?;

    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}

/// Open a private in-memory database
///
/// Every SQLite in-memory connection is its own database, so the pool holds
/// exactly one connection that is never closed.
pub async fn load_in_memory_database() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

/// Apply the embedded migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
