use sea_orm::{Database, DatabaseConnection, DbErr};
use studybuddy_db::migration::run_migrations;

const SQLITE_MEMORY_URI: &str = "sqlite::memory:";

/// Connects to a fresh in-memory sqlite database with the schema applied.
pub async fn setup_sqlite() -> Result<DatabaseConnection, DbErr> {
    tracing::info!(uri = SQLITE_MEMORY_URI, "connecting to test db");
    let conn = Database::connect(SQLITE_MEMORY_URI).await?;
    run_migrations(&conn).await?;
    Ok(conn)
}
