use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error(transparent)]
    Api(#[from] async_openai::error::OpenAIError),

    #[error("No response from the generative service")]
    EmptyResponse,

    #[error("Generative service did not answer within {0:?}")]
    Timeout(Duration),

    #[error(transparent)]
    HttpClientBuild(#[from] reqwest::Error),
}
