//! # Axum Helpers
//!
//! Shared HTTP plumbing for the service binaries.
//!
//! - **[`server`]**: router assembly with OpenAPI docs, health checks, graceful shutdown
//! - **[`errors`]**: structured JSON error responses with error codes
//! - **[`extractors`]**: custom extractors (UUID path)

pub mod errors;
pub mod extractors;
pub mod server;

pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, create_app, create_router,
    health_router, run_health_checks,
};

pub use errors::{AppError, ErrorCode, ErrorResponse};

pub use extractors::UuidPath;
