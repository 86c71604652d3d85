//! PostgreSQL connectivity for the service binaries.
//!
//! # Features
//!
//! - `postgres` (default) - SeaORM connection pool, migrations and health checks
//! - `config` - `core_config::FromEnv` for [`postgres::PostgresConfig`]
//!
//! ```ignore
//! use database::{postgres, RetryConfig};
//!
//! let config = postgres::PostgresConfig::from_env()?;
//! let retry = RetryConfig::fixed(10, 2000);
//! let db = postgres::connect_from_config_with_retry(config, Some(retry)).await?;
//! postgres::run_migrations::<Migrator>(&db, "userapi").await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::{DatabaseError, RetryConfig};
