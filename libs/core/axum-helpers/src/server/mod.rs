//! Server infrastructure: router assembly, health endpoints and graceful shutdown.
//!
//! ```ignore
//! use axum_helpers::server::{create_app, create_router, health_router, ShutdownCoordinator};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let (coordinator, _rx) = ShutdownCoordinator::new();
//! let app = create_router::<ApiDoc>(api_routes).merge(health_router(app_info!()));
//! create_app(app, &ServerConfig::default(), coordinator.notified()).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_router};
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::ShutdownCoordinator;
