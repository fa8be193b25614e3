use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set, TransactionTrait};
use studybuddy_entity::flashcard::{flashcard, flashcard_set};
use studybuddy_entity::quiz::quiz::Provenance;
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Stores a flashcard set and its cards in one transaction, assigning ids and positions.
    pub async fn create_flashcard_set<C: ConnectionTrait + TransactionTrait>(
        db: &C,
        owner_id: Uuid,
        title: String,
        description: String,
        provenance: Provenance,
        cards: Vec<flashcard::ActiveModel>,
    ) -> Result<(flashcard_set::Model, Vec<flashcard::Model>), DbErr> {
        let txn = db.begin().await?;

        let set = flashcard_set::ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner_id),
            title: Set(title),
            description: Set(description),
            provenance: Set(provenance),
            created_at: Set(Utc::now().naive_utc()),
        };
        let set = set.insert(&txn).await?;

        let mut stored = Vec::with_capacity(cards.len());
        for (position, card) in cards.into_iter().enumerate() {
            let position = i32::try_from(position).map_err(|error| DbErr::Custom(error.to_string()))?;
            let card = flashcard::ActiveModel {
                id: Set(Uuid::new_v4()),
                set_id: Set(set.id),
                position: Set(position),
                ..card
            };
            stored.push(card.insert(&txn).await?);
        }

        txn.commit().await?;

        tracing::debug!(set_id = %set.id, cards = stored.len(), "stored flashcard set");

        Ok((set, stored))
    }
}
