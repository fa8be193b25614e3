use sea_orm::DbErr;
use thiserror::Error;

use crate::generation::validate::ValidationError;
use crate::openai::error::GeneratorError;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("source text is required")]
    EmptySource,

    #[error(transparent)]
    Generator(#[from] GeneratorError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to store generated content: {0}")]
    Persistence(#[from] DbErr),

    #[error("stored content could not be converted: {0}")]
    Conversion(#[from] studybuddy_model_tools::error::Error),
}
