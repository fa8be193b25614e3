use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use studybuddy_entity::flashcard::flashcard_set::{self, Entity as FlashcardSet, Model as FlashcardSetModel};
use uuid::Uuid;

pub struct Query;

impl Query {
    pub async fn find_by_owner<C: ConnectionTrait>(db: &C, owner_id: Uuid) -> Result<Vec<FlashcardSetModel>, DbErr> {
        FlashcardSet::find()
            .filter(flashcard_set::Column::OwnerId.eq(owner_id))
            .order_by_desc(flashcard_set::Column::CreatedAt)
            .all(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load flashcard sets by owner");
            })
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, set_id: Uuid) -> Result<Option<FlashcardSetModel>, DbErr> {
        FlashcardSet::find_by_id(set_id).one(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load flashcard set by id");
        })
    }
}
