use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use std::error::Error;
use studybuddy_core::content::load::LoadError;
use studybuddy_core::generation::error::GenerationError;
use studybuddy_core::openai::error::GeneratorError;
use utoipa::ToSchema;

pub(crate) trait GetStatusCode {
    fn status_code(&self) -> http::StatusCode;
}

#[derive(Debug, Serialize, ToSchema)]
pub(crate) struct ErrorData<T> {
    pub(crate) error: T,
    pub(crate) error_description: Cow<'static, str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<Map<String, Value>>,
}

impl<T> ErrorData<T> {
    pub fn new<A: Into<Cow<'static, str>>>(error: T, error_description: A) -> Self {
        Self {
            error,
            error_description: error_description.into(),
            data: None,
        }
    }

    #[must_use]
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.get_or_insert_with(Map::new).insert(key.into(), value.into());
        self
    }
}

pub(crate) trait ErrorDataProvider<T: GetStatusCode> {
    fn error_data(self) -> Option<ErrorData<T>>;
}

/// Error kinds shared by the quiz and flashcard routes.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum ContentErrorType {
    InvalidRequest,
    NotFound,
    InvalidGeneratedContent,
    GenerativeService,
    GenerativeServiceTimeout,
    Database,
}

impl GetStatusCode for ContentErrorType {
    fn status_code(&self) -> http::StatusCode {
        match self {
            Self::InvalidRequest => http::StatusCode::BAD_REQUEST,
            Self::NotFound => http::StatusCode::NOT_FOUND,
            Self::InvalidGeneratedContent | Self::GenerativeService => http::StatusCode::BAD_GATEWAY,
            Self::GenerativeServiceTimeout => http::StatusCode::GATEWAY_TIMEOUT,
            Self::Database => http::StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl ErrorDataProvider<ContentErrorType> for GenerationError {
    fn error_data(self) -> Option<ErrorData<ContentErrorType>> {
        let error_data = match self {
            Self::EmptySource => ErrorData::new(ContentErrorType::InvalidRequest, "PDF text is required"),
            Self::Validation(error) => {
                // The diagnostic is safe to return, the raw reply was only logged.
                ErrorData::new(ContentErrorType::InvalidGeneratedContent, error.to_string())
            }
            Self::Generator(GeneratorError::Timeout(duration)) => ErrorData::new(
                ContentErrorType::GenerativeServiceTimeout,
                "the generative service did not answer in time",
            )
            .with_data("timeout_secs", duration.as_secs()),
            Self::Generator(error) => {
                tracing::error!(error = &error as &dyn Error, "generative service call failed");
                ErrorData::new(ContentErrorType::GenerativeService, "error communicating with the generative service")
            }
            Self::Persistence(error) => {
                tracing::error!(error = &error as &dyn Error, "error storing generated content");
                ErrorData::new(ContentErrorType::Database, "error communicating with database")
            }
            Self::Conversion(error) => {
                tracing::error!(error = &error as &dyn Error, "stored content could not be read back");
                return None;
            }
        };
        Some(error_data)
    }
}

impl ErrorDataProvider<ContentErrorType> for LoadError {
    fn error_data(self) -> Option<ErrorData<ContentErrorType>> {
        match self {
            Self::Persistence(error) => {
                tracing::error!(error = &error as &dyn Error, "error loading content");
                Some(ErrorData::new(ContentErrorType::Database, "error communicating with database"))
            }
            Self::Conversion(error) => {
                tracing::error!(error = &error as &dyn Error, "stored content could not be converted");
                None
            }
        }
    }
}

pub(crate) fn error_to_axum_response<E, T>(error: T) -> Response
where
    E: GetStatusCode + serde::Serialize,
    T: GetStatusCode + ErrorDataProvider<E>,
{
    let status_code = GetStatusCode::status_code(&error);
    let error_data = error.error_data();
    match error_data {
        Some(data) => {
            let status_code = GetStatusCode::status_code(&data.error);
            let json = Json(data);
            (status_code, json).into_response()
        }
        None => status_code.into_response(),
    }
}
