use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, Statement};
use tracing::debug;

use crate::common::DatabaseError;

/// Run `SELECT 1` against the pool.
///
/// Backs the readiness probe: any error means the service should stop
/// receiving traffic.
pub async fn check_health(db: &DatabaseConnection) -> Result<(), DatabaseError> {
    debug!("Running PostgreSQL health check");

    let stmt = Statement::from_string(DatabaseBackend::Postgres, "SELECT 1".to_owned());
    db.query_one_raw(stmt)
        .await
        .map_err(|e| DatabaseError::HealthCheckFailed(format!("PostgreSQL: {e}")))?;

    debug!("PostgreSQL health check passed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbErr, MockDatabase, Value};
    use std::collections::BTreeMap;

    #[tokio::test]
    async fn test_check_health_ok() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([("?column?", Value::Int(Some(1)))])]])
            .into_connection();

        assert!(check_health(&db).await.is_ok());
    }

    #[tokio::test]
    async fn test_check_health_reports_failure() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();

        let err = check_health(&db).await.unwrap_err();
        assert!(matches!(err, DatabaseError::HealthCheckFailed(_)));
        assert!(err.to_string().contains("connection reset"));
    }
}
