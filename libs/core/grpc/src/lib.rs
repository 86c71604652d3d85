//! # gRPC helpers
//!
//! Shared plumbing for tonic servers:
//!
//! - **[`server`]**: `ServerConfig` loaded from `GRPC_*` variables, startup logging
//!   and `grpc.health.v1.Health` registration
//! - **[`error`]**: `ToTonicResult` / `ToTonicOption` for turning adapter-level
//!   failures into `tonic::Status`
//! - **[`conversions`]**: timestamp and UUID helpers for proto messages
//!
//! ```ignore
//! use grpc_client::server::{GrpcServer, ServerConfig};
//! use core_config::FromEnv;
//!
//! let config = ServerConfig::from_env()?;
//! let (health_reporter, health_service) = grpc_client::server::create_health_service();
//! GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
//! GrpcServer::log_startup(&config, SERVICE_NAME);
//! ```

pub mod conversions;
pub mod error;
pub mod server;

pub use error::{ToTonicOption, ToTonicResult};
