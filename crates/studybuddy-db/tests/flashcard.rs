mod common;

use crate::common::{card, setup_db};

use studybuddy_db::flashcard::{flashcard as flashcard_db, flashcard_set as flashcard_set_db};
use studybuddy_entity::quiz::quiz::Provenance;
use test_log::test;
use uuid::Uuid;

#[test(tokio::test)]
async fn test_create_and_load_flashcard_set() {
    let conn = &setup_db().await;
    let owner_id = Uuid::new_v4();

    let (set, cards) = flashcard_set_db::Mutation::create_flashcard_set(
        conn,
        owner_id,
        "Cells".to_owned(),
        "Auto-generated flashcard set with 2 cards".to_owned(),
        Provenance::Pdf,
        vec![card("What is a cell?", "The basic unit of life"), card("Mitochondria?", "Powerhouse")],
    )
    .await
    .unwrap();

    assert_eq!(cards.len(), 2);
    assert_eq!(flashcard_set_db::Query::find_by_id(conn, set.id).await.unwrap(), Some(set.clone()));
    assert_eq!(
        flashcard_set_db::Query::find_by_owner(conn, owner_id).await.unwrap(),
        vec![set.clone()]
    );

    let loaded = flashcard_db::Query::get_cards_by_set(conn, set.id).await.unwrap();
    assert_eq!(loaded, cards);
    assert_eq!(loaded[1].answer, "Powerhouse");
}
