//! gRPC server configuration and health registration.

mod builder;
mod config;

pub use builder::{GrpcServer, create_health_service};
pub use config::ServerConfig;
