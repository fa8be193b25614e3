use crate::routes::error::{ContentErrorType, ErrorData, ErrorDataProvider, GetStatusCode, error_to_axum_response};
use axum::response::{IntoResponse, Response};
use studybuddy_core::content::load::LoadError;
use studybuddy_core::generation::error::GenerationError;
use studybuddy_core::generation::prompt::MAX_FLASHCARD_COUNT;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum FlashcardError {
    #[error("num_cards must be between 1 and {MAX_FLASHCARD_COUNT}, got {0}")]
    InvalidCardCount(usize),

    #[error("The requested flashcard set was not found.")]
    SetNotFound,

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

impl ErrorDataProvider<ContentErrorType> for FlashcardError {
    fn error_data(self) -> Option<ErrorData<ContentErrorType>> {
        match self {
            Self::InvalidCardCount(_) => Some(ErrorData::new(ContentErrorType::InvalidRequest, self.to_string())),
            Self::SetNotFound => Some(ErrorData::new(ContentErrorType::NotFound, "flashcard set not found")),
            Self::Generation(error) => error.error_data(),
            Self::Load(error) => error.error_data(),
        }
    }
}

impl GetStatusCode for FlashcardError {
    fn status_code(&self) -> http::StatusCode {
        http::StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for FlashcardError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
