use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::error::Error;
use studybuddy_entity::quiz::quiz::{self, Entity as Quiz, Model as QuizModel};
use uuid::Uuid;

pub struct Query;

impl Query {
    /// Every stored quiz, newest first.
    pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<QuizModel>, DbErr> {
        Quiz::find()
            .order_by_desc(quiz::Column::CreatedAt)
            .all(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load quizzes");
            })
    }

    /// Quizzes owned by `owner_id`, newest first.
    pub async fn find_by_owner<C: ConnectionTrait>(db: &C, owner_id: Uuid) -> Result<Vec<QuizModel>, DbErr> {
        Quiz::find()
            .filter(quiz::Column::OwnerId.eq(owner_id))
            .order_by_desc(quiz::Column::CreatedAt)
            .all(db)
            .await
            .inspect_err(|error| {
                tracing::error!(error = error as &dyn Error, "failed to load quizzes by owner");
            })
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, quiz_id: Uuid) -> Result<Option<QuizModel>, DbErr> {
        Quiz::find_by_id(quiz_id).one(db).await.inspect_err(|error| {
            tracing::error!(error = error as &dyn Error, "failed to load quiz by id");
        })
    }
}
