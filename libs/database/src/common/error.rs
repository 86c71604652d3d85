/// Errors surfaced by the database helpers
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}
