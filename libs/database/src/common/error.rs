/// Error type shared by the database connectors
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Driver-level failure reported by SeaORM
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    /// The liveness probe query failed
    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

/// Result alias for database operations
pub type DatabaseResult<T> = Result<T, DatabaseError>;
