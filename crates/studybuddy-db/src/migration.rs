use sea_orm::{ConnectionTrait, DatabaseBackend, DbErr};

/// Creates any missing tables. Safe to run on every start.
pub async fn run_migrations<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    let migration = match db.get_database_backend() {
        DatabaseBackend::Postgres => include_str!("../migrations/postgres.sql"),
        DatabaseBackend::Sqlite => include_str!("../migrations/sqlite.sql"),
        DatabaseBackend::MySql => return Err(DbErr::Custom("mysql is not supported".to_owned())),
    };

    tracing::debug!(backend = ?db.get_database_backend(), "running migrations");
    db.execute_unprepared(migration).await?;
    Ok(())
}
