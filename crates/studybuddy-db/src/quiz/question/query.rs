use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use studybuddy_entity::quiz::question::{self, Entity as Question, Model as QuestionModel};
use uuid::Uuid;

pub struct Query;

impl Query {
    /// Questions of a quiz in their stored order.
    pub async fn get_questions_by_quiz<C: ConnectionTrait>(
        db: &C,
        quiz_id: Uuid,
    ) -> Result<Vec<QuestionModel>, DbErr> {
        Question::find()
            .filter(question::Column::QuizId.eq(quiz_id))
            .order_by_asc(question::Column::Position)
            .all(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load questions");
            })
    }
}
