//! Database connection cleanup during graceful shutdown.

use tracing::{error, info};

/// Close a SeaORM PostgreSQL connection, logging the outcome.
///
/// The connection closes on drop anyway; the explicit close makes the
/// shutdown sequence visible in the logs.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::close_postgres;
///
/// close_postgres(db, "main").await;
/// ```
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
