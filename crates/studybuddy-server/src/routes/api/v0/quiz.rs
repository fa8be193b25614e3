use crate::AppConfig;
use crate::routes::api::v0::quiz::error::QuizError;
use crate::user::ExtractUserId;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use std::collections::BTreeMap;
use studybuddy_core::content::{QuizRequest, load};
use studybuddy_core::generation::prompt::{DEFAULT_QUESTION_COUNT, MAX_QUESTION_COUNT};
use studybuddy_core::score::score_quiz;
use studybuddy_model::content::Provenance;
use studybuddy_model::quiz::answer::AnswerMap;
use studybuddy_model::quiz::question::{Difficulty, OptionIndex};
use studybuddy_model::quiz::quiz::Quiz;
use studybuddy_model::quiz::score::ScoreResult;
use utoipa::ToSchema;
use uuid::Uuid;

pub(crate) mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(get_quizzes))
        .route("/mine", get(get_my_quizzes))
        .route("/generate", post(generate_quiz))
        .nest(
            "/{quiz_id}",
            Router::new()
                .route("/", get(get_quiz))
                .route("/score", post(submit_answers)),
        )
        .with_state(())
}

fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct GenerateQuiz {
    /// Study material the questions are drawn from.
    text: String,
    #[serde(default = "default_question_count", alias = "numQuestions")]
    #[schema(minimum = 1, maximum = 20, default = 5)]
    num_questions: usize,
    #[serde(default)]
    difficulty: Difficulty,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    provenance: Provenance,
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct SubmitAnswers {
    /// Selected option letter per zero-based question index.
    #[schema(value_type = BTreeMap<String, String>, example = json!({"0": "B", "2": "A"}))]
    answers: BTreeMap<usize, String>,
}

/// Converts the client's letter tags into an [`AnswerMap`] for `quiz`.
fn to_answer_map(quiz: &Quiz, answers: BTreeMap<usize, String>) -> Result<AnswerMap, QuizError> {
    answers
        .into_iter()
        .map(|(index, letter)| {
            if index >= quiz.len() {
                return Err(QuizError::AnswerOutOfRange { index, len: quiz.len() });
            }
            let option = OptionIndex::from_letter(&letter).map_err(|source| QuizError::InvalidAnswer { index, source })?;
            Ok((index, option))
        })
        .collect()
}

#[utoipa::path(
    post,
    path = "/api/v0/quizzes/generate",
    request_body = GenerateQuiz,
    responses(
        (status = OK, body = Quiz, description = "The generated and stored quiz"),
        (status = BAD_REQUEST, description = "Missing text or question count out of range"),
        (status = BAD_GATEWAY, description = "The generative service failed or returned unusable content"),
        (status = GATEWAY_TIMEOUT, description = "The generative service did not answer in time"),
    ),
    tag = "v0/quizzes",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn generate_quiz(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Json(body): Json<GenerateQuiz>,
) -> Result<Response, QuizError> {
    if !(1..=MAX_QUESTION_COUNT).contains(&body.num_questions) {
        return Err(QuizError::InvalidQuestionCount(body.num_questions));
    }

    let request = QuizRequest::builder()
        .text(body.text)
        .num_questions(body.num_questions)
        .difficulty(body.difficulty)
        .title(body.title)
        .provenance(body.provenance)
        .build();

    let quiz =
        studybuddy_core::content::generate_quiz(app_config.quiz_generator(), &conn, user_id, request, Utc::now()).await?;

    Ok(Json(quiz).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/quizzes",
    responses(
        (status = OK, body = Vec<Quiz>, description = "Every quiz, newest first"),
    ),
    tag = "v0/quizzes",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_quizzes(
    ExtractUserId(_user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Response, QuizError> {
    let quizzes = load::list_quizzes(&conn).await?;
    Ok(Json(quizzes).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/quizzes/mine",
    responses(
        (status = OK, body = Vec<Quiz>, description = "Quizzes generated by the caller, newest first"),
    ),
    tag = "v0/quizzes",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_my_quizzes(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Response, QuizError> {
    let quizzes = load::list_quizzes_by_owner(&conn, user_id).await?;
    tracing::debug!(%user_id, count = quizzes.len(), "listed quizzes of user");
    Ok(Json(quizzes).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/quizzes/{quiz_id}",
    params(
        ("quiz_id" = Uuid, Path, description = "Id of the quiz"),
    ),
    responses(
        (status = OK, body = Quiz, description = "The quiz with all questions"),
        (status = NOT_FOUND, description = "No quiz with this id"),
    ),
    tag = "v0/quizzes",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_quiz(
    ExtractUserId(_user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(quiz_id): Path<Uuid>,
) -> Result<Response, QuizError> {
    let quiz = load::load_quiz(&conn, quiz_id).await?.ok_or(QuizError::QuizNotFound)?;
    Ok(Json(quiz).into_response())
}

#[utoipa::path(
    post,
    path = "/api/v0/quizzes/{quiz_id}/score",
    params(
        ("quiz_id" = Uuid, Path, description = "Id of the quiz"),
    ),
    request_body = SubmitAnswers,
    responses(
        (status = OK, body = ScoreResult, description = "Score of the submitted answers"),
        (status = BAD_REQUEST, description = "An answer is not a letter A-D or names a question the quiz does not have"),
        (status = NOT_FOUND, description = "No quiz with this id"),
    ),
    tag = "v0/quizzes",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn submit_answers(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(quiz_id): Path<Uuid>,
    Json(body): Json<SubmitAnswers>,
) -> Result<Response, QuizError> {
    let quiz = load::load_quiz(&conn, quiz_id).await?.ok_or(QuizError::QuizNotFound)?;
    let answers = to_answer_map(&quiz, body.answers)?;
    let result = score_quiz(&quiz, &answers)?;
    tracing::info!(%user_id, %quiz_id, correct = result.correct_count, total = result.total, "scored quiz");
    Ok(Json(result).into_response())
}
