//! Users Domain
//!
//! Create, read, update and delete registered users, served over HTTP and gRPC.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────┐
//! │ Handlers / gRPC adapter  │  ← parse wire input, map errors to status codes
//! └────────────┬─────────────┘
//!              │
//! ┌────────────▼─────────────┐
//! │        UserService       │  ← validation, email uniqueness, error taxonomy
//! └────────────┬─────────────┘
//!              │
//! ┌────────────▼─────────────┐
//! │      UserRepository      │  ← in-memory or PostgreSQL (sea-orm)
//! └──────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//!
//! let service = UserService::new(InMemoryUserRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod conversions;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;
pub mod validation;

pub use error::{ErrorKind, UserError, UserResult};
pub use handlers::ApiDoc;
pub use models::{MessageResponse, User, UserInput};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, RepositoryError, RepositoryResult, UserRepository};
pub use service::UserService;
pub use validation::ValidationError;
