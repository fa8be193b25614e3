use crate::routes::error::{ContentErrorType, ErrorData, ErrorDataProvider, GetStatusCode, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use studybuddy_core::content::load::LoadError;
use studybuddy_core::generation::error::GenerationError;
use studybuddy_core::generation::prompt::MAX_QUESTION_COUNT;
use studybuddy_core::score::ScoreError;
use studybuddy_model::quiz::question::InvalidOptionTag;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum QuizError {
    #[error("num_questions must be between 1 and {MAX_QUESTION_COUNT}, got {0}")]
    InvalidQuestionCount(usize),

    #[error("The requested quiz was not found.")]
    QuizNotFound,

    #[error("answer for question {index} is out of range, the quiz has {len} questions")]
    AnswerOutOfRange { index: usize, len: usize },

    #[error("answer for question {index} is invalid: {source}")]
    InvalidAnswer { index: usize, source: InvalidOptionTag },

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Score(#[from] ScoreError),
}

impl ErrorDataProvider<ContentErrorType> for QuizError {
    fn error_data(self) -> Option<ErrorData<ContentErrorType>> {
        let error_data = match self {
            Self::InvalidQuestionCount(_) | Self::AnswerOutOfRange { .. } | Self::InvalidAnswer { .. } => {
                ErrorData::new(ContentErrorType::InvalidRequest, self.to_string())
            }
            Self::QuizNotFound => ErrorData::new(ContentErrorType::NotFound, "quiz not found"),
            Self::Generation(error) => return error.error_data(),
            Self::Load(error) => return error.error_data(),
            Self::Score(error) => {
                tracing::error!(error = &error as &dyn std::error::Error, "stored quiz could not be scored");
                return None;
            }
        };
        Some(error_data)
    }
}

impl GetStatusCode for QuizError {
    fn status_code(&self) -> http::StatusCode {
        http::StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for QuizError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
