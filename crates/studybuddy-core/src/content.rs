use chrono::{DateTime, Utc};
use sea_orm::{ConnectionTrait, TransactionTrait};
use std::error::Error;
use studybuddy_db::flashcard::flashcard_set as flashcard_set_db;
use studybuddy_db::quiz::quiz as quiz_db;
use studybuddy_entity::flashcard::flashcard;
use studybuddy_entity::quiz::question;
use studybuddy_model::content::{ContentRecord, Provenance};
use studybuddy_model::flashcard::FlashcardSet;
use studybuddy_model::quiz::question::Difficulty;
use studybuddy_model::quiz::quiz::Quiz;
use studybuddy_model_tools::convert::{FromDbModel, FromModel, IntoDbModel, TryFromDbModel, TryFromModel};
use tracing::instrument;
use typed_builder::TypedBuilder;
use uuid::Uuid;

use crate::generation::error::GenerationError;
use crate::generation::prompt::{DEFAULT_FLASHCARD_COUNT, DEFAULT_QUESTION_COUNT, FlashcardPrompt, QuizPrompt};
use crate::generation::sanitize::sanitize_response;
use crate::generation::validate::{ValidationError, validate_flashcards, validate_questions};
use crate::openai::TextGenerator;

pub mod load;

#[derive(Debug, Clone, TypedBuilder)]
pub struct QuizRequest {
    #[builder(setter(into))]
    pub text: String,
    #[builder(default = DEFAULT_QUESTION_COUNT)]
    pub num_questions: usize,
    #[builder(default)]
    pub difficulty: Difficulty,
    #[builder(default)]
    pub title: Option<String>,
    #[builder(default)]
    pub provenance: Provenance,
}

#[derive(Debug, Clone, TypedBuilder)]
pub struct FlashcardRequest {
    #[builder(setter(into))]
    pub text: String,
    #[builder(default = DEFAULT_FLASHCARD_COUNT)]
    pub num_cards: usize,
    #[builder(default)]
    pub title: Option<String>,
    #[builder(default)]
    pub provenance: Provenance,
}

#[derive(Debug, Clone)]
pub enum ContentRequest {
    Quiz(QuizRequest),
    Flashcards(FlashcardRequest),
}

#[must_use]
pub fn default_quiz_title(now: DateTime<Utc>) -> String {
    format!("Quiz generated on {}", now.format("%Y-%m-%d"))
}

#[must_use]
pub fn default_flashcard_title(now: DateTime<Utc>) -> String {
    format!("Flashcards generated on {}", now.format("%Y-%m-%d"))
}

#[must_use]
pub fn quiz_description(question_count: usize) -> String {
    format!("Auto-generated quiz with {question_count} questions")
}

#[must_use]
pub fn flashcard_description(card_count: usize) -> String {
    format!("Auto-generated flashcard set with {card_count} cards")
}

/// A blank requested title counts as no title at all.
fn resolve_title(requested: Option<String>, default: impl FnOnce() -> String) -> String {
    requested
        .map(|title| title.trim().to_owned())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(default)
}

fn require_source(text: &str) -> Result<(), GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::EmptySource);
    }
    Ok(())
}

fn log_rejected_payload(error: &ValidationError, raw: &str) {
    tracing::warn!(error = error as &dyn Error, raw, "generated payload failed validation");
}

fn log_count_mismatch(requested: usize, received: usize) {
    if requested != received {
        tracing::warn!(requested, received, "generative service returned a different number of items");
    }
}

/// Runs the whole quiz pipeline and stores the result.
///
/// Nothing is written unless every generated question passes validation. `now` only feeds
/// the default title; the stored creation time comes from the database layer.
#[instrument(skip_all, fields(owner_id = %owner_id, requested = request.num_questions, difficulty = %request.difficulty))]
pub async fn generate_quiz<C: ConnectionTrait + TransactionTrait>(
    generator: &dyn TextGenerator,
    conn: &C,
    owner_id: Uuid,
    request: QuizRequest,
    now: DateTime<Utc>,
) -> Result<Quiz, GenerationError> {
    require_source(&request.text)?;

    let prompt = QuizPrompt::builder()
        .source(&request.text)
        .count(request.num_questions)
        .difficulty(request.difficulty)
        .title(request.title.as_deref())
        .build()
        .render();

    let raw = generator.generate(&prompt).await?;
    let questions = validate_questions(sanitize_response(&raw), request.difficulty)
        .inspect_err(|error| log_rejected_payload(error, &raw))?;
    log_count_mismatch(request.num_questions, questions.len());

    let title = resolve_title(request.title, || default_quiz_title(now));
    let description = quiz_description(questions.len());
    let questions = questions
        .into_iter()
        .map(question::ActiveModel::try_from_model)
        .collect::<Result<Vec<_>, _>>()?;

    let (quiz, questions) = quiz_db::Mutation::create_quiz(
        conn,
        owner_id,
        title,
        description,
        request.provenance.into_db_model(),
        request.difficulty.into_db_model(),
        questions,
    )
    .await
    .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to store quiz"))?;

    tracing::info!(quiz_id = %quiz.id, questions = questions.len(), "generated quiz");

    Ok(Quiz::try_from_db_model((quiz, questions))?)
}

/// Flashcard counterpart of [`generate_quiz`].
#[instrument(skip_all, fields(owner_id = %owner_id, requested = request.num_cards))]
pub async fn generate_flashcards<C: ConnectionTrait + TransactionTrait>(
    generator: &dyn TextGenerator,
    conn: &C,
    owner_id: Uuid,
    request: FlashcardRequest,
    now: DateTime<Utc>,
) -> Result<FlashcardSet, GenerationError> {
    require_source(&request.text)?;

    let prompt = FlashcardPrompt::builder()
        .source(&request.text)
        .count(request.num_cards)
        .title(request.title.as_deref())
        .build()
        .render();

    let raw = generator.generate(&prompt).await?;
    let cards = validate_flashcards(sanitize_response(&raw)).inspect_err(|error| log_rejected_payload(error, &raw))?;
    log_count_mismatch(request.num_cards, cards.len());

    let title = resolve_title(request.title, || default_flashcard_title(now));
    let description = flashcard_description(cards.len());
    let cards = cards.into_iter().map(flashcard::ActiveModel::from_model).collect();

    let (set, cards) = flashcard_set_db::Mutation::create_flashcard_set(
        conn,
        owner_id,
        title,
        description,
        request.provenance.into_db_model(),
        cards,
    )
    .await
    .inspect_err(|error| tracing::error!(error = error as &dyn Error, "failed to store flashcard set"))?;

    tracing::info!(set_id = %set.id, cards = cards.len(), "generated flashcard set");

    Ok(FlashcardSet::from_db_model((set, cards)))
}

/// Generates and stores either kind of record.
pub async fn generate_content<C: ConnectionTrait + TransactionTrait>(
    generator: &dyn TextGenerator,
    conn: &C,
    owner_id: Uuid,
    request: ContentRequest,
    now: DateTime<Utc>,
) -> Result<ContentRecord, GenerationError> {
    match request {
        ContentRequest::Quiz(request) => generate_quiz(generator, conn, owner_id, request, now)
            .await
            .map(ContentRecord::from),
        ContentRequest::Flashcards(request) => generate_flashcards(generator, conn, owner_id, request, now)
            .await
            .map(ContentRecord::from),
    }
}
