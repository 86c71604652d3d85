//! User API
//!
//! One process serving the users domain over two transports that share a
//! single PostgreSQL pool.
//!
//! ```text
//! HTTP (axum, :8080)        gRPC (tonic + zstd, :9090)
//!   /api/users/...            userapi.v1.UserService
//!   /health, /ready           grpc.health.v1.Health
//!         \                       /
//!          └──── UserService ────┘
//!                     │
//!              PgUserRepository
//!                     │
//!                PostgreSQL
//! ```
//!
//! ## Modules
//!
//! - `config`: environment-driven configuration
//! - `grpc`: tonic adapter over the users service
//! - `openapi`: OpenAPI document served at `/swagger-ui`
//! - `server`: startup, both listeners, graceful shutdown

pub mod config;
pub mod grpc;
pub mod openapi;
pub mod server;

pub use config::Config;
pub use grpc::UserServiceImpl;
pub use server::run;
