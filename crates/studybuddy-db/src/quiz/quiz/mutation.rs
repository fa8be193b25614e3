use chrono::Utc;
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, Set, TransactionTrait};
use studybuddy_entity::quiz::question;
use studybuddy_entity::quiz::quiz::{self, Difficulty, Provenance};
use uuid::Uuid;

pub struct Mutation;

impl Mutation {
    /// Stores a quiz together with its questions in one transaction.
    ///
    /// Identifiers, positions and the creation timestamp are assigned here; whatever the
    /// caller put into those fields of `questions` is overwritten.
    #[allow(clippy::too_many_arguments)]
    pub async fn create_quiz<C: ConnectionTrait + TransactionTrait>(
        db: &C,
        owner_id: Uuid,
        title: String,
        description: String,
        provenance: Provenance,
        difficulty: Difficulty,
        questions: Vec<question::ActiveModel>,
    ) -> Result<(quiz::Model, Vec<question::Model>), DbErr> {
        let txn = db.begin().await?;

        let quiz = quiz::ActiveModel {
            id: Set(Uuid::new_v4()),
            owner_id: Set(owner_id),
            title: Set(title),
            description: Set(description),
            provenance: Set(provenance),
            difficulty: Set(difficulty),
            created_at: Set(Utc::now().naive_utc()),
        };
        let quiz = quiz.insert(&txn).await?;

        let mut stored = Vec::with_capacity(questions.len());
        for (position, question) in questions.into_iter().enumerate() {
            let position = i32::try_from(position).map_err(|error| DbErr::Custom(error.to_string()))?;
            let question = question::ActiveModel {
                id: Set(Uuid::new_v4()),
                quiz_id: Set(quiz.id),
                position: Set(position),
                ..question
            };
            stored.push(question.insert(&txn).await?);
        }

        txn.commit().await?;

        tracing::debug!(quiz_id = %quiz.id, questions = stored.len(), "stored quiz");

        Ok((quiz, stored))
    }
}
