//! gRPC server startup helpers.

use super::config::ServerConfig;
use tracing::info;

/// Helpers shared by every tonic server binary.
///
/// ```ignore
/// let (health_reporter, health_service) = create_health_service();
/// GrpcServer::setup_health(&health_reporter, SERVICE_NAME).await;
/// GrpcServer::log_startup(&config, SERVICE_NAME);
///
/// Server::builder()
///     .add_service(health_service)
///     .add_service(MyServiceServer::new(my_impl))
///     .serve_with_shutdown(config.socket_addr()?, shutdown)
///     .await?;
/// ```
pub struct GrpcServer;

impl GrpcServer {
    /// Log server startup information for a single service.
    pub fn log_startup(config: &ServerConfig, service_name: &str) {
        info!(
            addr = %config.addr_string(),
            service = service_name,
            compression = config.enable_compression,
            "gRPC server starting"
        );

        if config.enable_compression {
            info!("Zstd compression enabled");
        }

        info!("Health check service enabled (grpc.health.v1.Health)");
    }

    /// Mark `service_name` and the empty service name as serving.
    ///
    /// The empty name is what generic health probes query.
    pub async fn setup_health(
        health_reporter: &tonic_health::server::HealthReporter,
        service_name: &str,
    ) {
        health_reporter
            .set_service_status(service_name, tonic_health::ServingStatus::Serving)
            .await;
        health_reporter
            .set_service_status("", tonic_health::ServingStatus::Serving)
            .await;

        info!(service = service_name, "Service marked as serving");
    }

    /// Flip every registered status to NOT_SERVING before the listener stops.
    pub async fn mark_not_serving(
        health_reporter: &tonic_health::server::HealthReporter,
        service_name: &str,
    ) {
        health_reporter
            .set_service_status(service_name, tonic_health::ServingStatus::NotServing)
            .await;
        health_reporter
            .set_service_status("", tonic_health::ServingStatus::NotServing)
            .await;
    }
}

pub use tonic_health::server::health_reporter as create_health_service;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_setup_health_does_not_panic() {
        let (reporter, _service) = create_health_service();
        GrpcServer::setup_health(&reporter, "userapi.v1.UserService").await;
        GrpcServer::mark_not_serving(&reporter, "userapi.v1.UserService").await;
    }

    #[test]
    fn test_log_startup_does_not_panic() {
        GrpcServer::log_startup(&ServerConfig::default(), "userapi.v1.UserService");
    }
}
