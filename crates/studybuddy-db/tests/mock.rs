use chrono::NaiveDate;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase};
use studybuddy_db::quiz::quiz::Query;
use studybuddy_entity::quiz::quiz::{self, Difficulty, Provenance};
use test_log::test;
use uuid::Uuid;

fn quiz_model(owner_id: Uuid, title: &str) -> quiz::Model {
    quiz::Model {
        id: Uuid::new_v4(),
        owner_id,
        title: title.to_owned(),
        description: "Auto-generated quiz with 1 questions".to_owned(),
        provenance: Provenance::Pdf,
        difficulty: Difficulty::Hard,
        created_at: NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap(),
    }
}

#[test(tokio::test)]
async fn test_find_by_owner() -> Result<(), DbErr> {
    let owner_id = Uuid::new_v4();
    let models = [quiz_model(owner_id, "later"), quiz_model(owner_id, "earlier")];
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([models.clone()])
        .into_connection();

    assert_eq!(Query::find_by_owner(&db, owner_id).await?, Vec::from(models));

    Ok(())
}

#[test(tokio::test)]
async fn test_find_by_id_propagates_errors() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_errors([DbErr::Custom("connection reset".to_owned())])
        .into_connection();

    assert!(Query::find_by_id(&db, Uuid::new_v4()).await.is_err());
}
