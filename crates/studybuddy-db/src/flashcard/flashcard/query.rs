use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use studybuddy_entity::flashcard::flashcard::{self, Entity as Flashcard, Model as FlashcardModel};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn get_cards_by_set<C: ConnectionTrait>(db: &C, set_id: Uuid) -> Result<Vec<FlashcardModel>, DbErr> {
        Flashcard::find()
            .filter(flashcard::Column::SetId.eq(set_id))
            .order_by_asc(flashcard::Column::Position)
            .all(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load flashcards");
            })
    }
}
