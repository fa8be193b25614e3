use sea_orm::DatabaseConnection;

pub use studybuddy_test_helpers::ScriptedGenerator;

pub async fn setup_db() -> DatabaseConnection {
    studybuddy_test_helpers::setup_sqlite().await.unwrap()
}
