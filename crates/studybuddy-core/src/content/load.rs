use sea_orm::{ConnectionTrait, DbErr};
use studybuddy_db::flashcard::{flashcard as flashcard_db, flashcard_set as flashcard_set_db};
use studybuddy_db::quiz::{question as question_db, quiz as quiz_db};
use studybuddy_entity::quiz::quiz as quiz_entity;
use studybuddy_model::flashcard::FlashcardSet;
use studybuddy_model::quiz::quiz::Quiz;
use studybuddy_model_tools::convert::{FromDbModel, TryFromDbModel};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Persistence(#[from] DbErr),
    #[error("stored content could not be converted: {0}")]
    Conversion(#[from] studybuddy_model_tools::error::Error),
}

async fn with_questions<C: ConnectionTrait>(conn: &C, quiz: quiz_entity::Model) -> Result<Quiz, LoadError> {
    let questions = question_db::Query::get_questions_by_quiz(conn, quiz.id).await?;
    Ok(Quiz::try_from_db_model((quiz, questions))?)
}

pub async fn load_quiz<C: ConnectionTrait>(conn: &C, quiz_id: Uuid) -> Result<Option<Quiz>, LoadError> {
    match quiz_db::Query::find_by_id(conn, quiz_id).await? {
        Some(quiz) => Ok(Some(with_questions(conn, quiz).await?)),
        None => Ok(None),
    }
}

/// Every quiz with its questions, newest first.
pub async fn list_quizzes<C: ConnectionTrait>(conn: &C) -> Result<Vec<Quiz>, LoadError> {
    let mut quizzes = Vec::new();
    for quiz in quiz_db::Query::find_all(conn).await? {
        quizzes.push(with_questions(conn, quiz).await?);
    }
    Ok(quizzes)
}

pub async fn list_quizzes_by_owner<C: ConnectionTrait>(conn: &C, owner_id: Uuid) -> Result<Vec<Quiz>, LoadError> {
    let mut quizzes = Vec::new();
    for quiz in quiz_db::Query::find_by_owner(conn, owner_id).await? {
        quizzes.push(with_questions(conn, quiz).await?);
    }
    Ok(quizzes)
}

pub async fn load_flashcard_set<C: ConnectionTrait>(conn: &C, set_id: Uuid) -> Result<Option<FlashcardSet>, LoadError> {
    let Some(set) = flashcard_set_db::Query::find_by_id(conn, set_id).await? else {
        return Ok(None);
    };
    let cards = flashcard_db::Query::get_cards_by_set(conn, set.id).await?;
    Ok(Some(FlashcardSet::from_db_model((set, cards))))
}

pub async fn list_flashcard_sets_by_owner<C: ConnectionTrait>(
    conn: &C,
    owner_id: Uuid,
) -> Result<Vec<FlashcardSet>, LoadError> {
    let mut sets = Vec::new();
    for set in flashcard_set_db::Query::find_by_owner(conn, owner_id).await? {
        let cards = flashcard_db::Query::get_cards_by_set(conn, set.id).await?;
        sets.push(FlashcardSet::from_db_model((set, cards)));
    }
    Ok(sets)
}
