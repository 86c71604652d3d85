//! Process lifecycle
//!
//! 1. color-eyre, configuration and tracing
//! 2. PostgreSQL pool (retried at a fixed interval) and migrations
//! 3. HTTP and gRPC listeners sharing one `UserService`
//! 4. SIGINT/SIGTERM stops both listeners, then the pool is closed

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
};
use axum_helpers::{
    HealthCheckFuture, ShutdownCoordinator, create_app, create_router, health_router,
    run_health_checks,
};
use core_config::{AppInfo, tracing::{init_tracing, install_color_eyre}};
use database::postgres::{self, DatabaseConnection};
use domain_users::{PgUserRepository, UserRepository, UserService, handlers};
use eyre::{Result, WrapErr};
use grpc_client::server::{GrpcServer, ServerConfig as GrpcConfig, create_health_service};
use migration::Migrator;
use rpc::userapi::v1::user_service_server::UserServiceServer;
use tonic::codec::CompressionEncoding;
use tonic::transport::Server;
use tracing::{error, info};

use crate::config::Config;
use crate::grpc::UserServiceImpl;
use crate::openapi::ApiDoc;

/// Fully-qualified gRPC service name reported through grpc.health.v1
pub const SERVICE_NAME: &str = "userapi.v1.UserService";

/// Run the service until a shutdown signal arrives or a listener fails.
pub async fn run() -> Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);
    info!(
        name = config.app.name,
        version = config.app.version,
        "Starting user API"
    );

    let db = postgres::connect_from_config_with_retry(
        config.database.clone(),
        Some(config.database_retry.clone()),
    )
    .await
    .wrap_err("Failed to connect to database")?;

    postgres::run_migrations::<Migrator>(&db, config.app.name)
        .await
        .wrap_err("Failed to run database migrations")?;

    let service = Arc::new(UserService::new(PgUserRepository::new(db.clone())));

    let (coordinator, _) = ShutdownCoordinator::new();
    let signals = coordinator.clone();
    tokio::spawn(async move { signals.wait_for_signal().await });

    let router = http_router(service.clone(), config.app, db.clone());
    let http = async {
        let result = create_app(router, &config.http, coordinator.notified())
            .await
            .wrap_err("HTTP server failed");
        stop_on_error(&coordinator, result)
    };
    let grpc = async {
        let result = serve_grpc(&config.grpc, service, coordinator.notified()).await;
        stop_on_error(&coordinator, result)
    };

    let (http, grpc) = tokio::join!(http, grpc);

    if let Err(e) = postgres::close(db).await {
        error!("Error closing PostgreSQL pool: {}", e);
    }

    http.and(grpc)?;
    info!("User API shutdown complete");
    Ok(())
}

/// A listener that fails takes the other one down with it.
fn stop_on_error(coordinator: &ShutdownCoordinator, result: Result<()>) -> Result<()> {
    if let Err(e) = &result {
        error!("{:#}", e);
        coordinator.shutdown();
    }
    result
}

/// Users API under `/api/users`, docs, `/health` and `/ready`.
pub fn http_router<R>(
    service: Arc<UserService<R>>,
    app: AppInfo,
    db: DatabaseConnection,
) -> Router
where
    R: UserRepository + 'static,
{
    let api = Router::new().nest("/users", handlers::router_with_shared(service));

    create_router::<ApiDoc>(api)
        .merge(health_router(app))
        .merge(ready_router(db))
}

/// `/ready`: 200 when PostgreSQL answers `SELECT 1`, 503 otherwise.
pub fn ready_router(db: DatabaseConnection) -> Router {
    Router::new()
        .route("/ready", get(ready_handler))
        .with_state(db)
}

async fn ready_handler(State(db): State<DatabaseConnection>) -> Response {
    let checks: Vec<(&str, HealthCheckFuture<'_>)> = vec![(
        "database",
        Box::pin(async {
            postgres::check_health(&db)
                .await
                .map_err(|e| e.to_string())
        }),
    )];

    match run_health_checks(checks).await {
        Ok(ready) | Err(ready) => ready.into_response(),
    }
}

async fn serve_grpc<R, F>(config: &GrpcConfig, service: Arc<UserService<R>>, shutdown: F) -> Result<()>
where
    R: UserRepository + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config
        .socket_addr()
        .wrap_err_with(|| format!("Invalid gRPC address: {}", config.addr_string()))?;

    let (health_reporter, health_service) = create_health_service();
    GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
    GrpcServer::log_startup(config, SERVICE_NAME);

    let mut users = UserServiceServer::new(UserServiceImpl::new(service))
        .max_decoding_message_size(config.max_decoding_message_size)
        .max_encoding_message_size(config.max_encoding_message_size);
    if config.enable_compression {
        users = users
            .accept_compressed(CompressionEncoding::Zstd)
            .send_compressed(CompressionEncoding::Zstd);
    }

    Server::builder()
        .http2_keepalive_interval(Some(Duration::from_secs(config.keepalive_secs)))
        .add_service(health_service)
        .add_service(users)
        .serve_with_shutdown(addr, async move {
            shutdown.await;
            GrpcServer::mark_not_serving(&health_reporter, SERVICE_NAME).await;
        })
        .await
        .wrap_err("gRPC server failed")?;

    info!("gRPC server stopped");
    Ok(())
}
