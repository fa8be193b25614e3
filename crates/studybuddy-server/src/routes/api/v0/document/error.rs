use crate::routes::error::{ErrorData, ErrorDataProvider, GetStatusCode, error_to_axum_response};
use axum::extract::multipart::MultipartError;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::error::Error;
use studybuddy_core::extract::ExtractionError;
use thiserror::Error;
use tokio::task::JoinError;
use utoipa::ToSchema;

#[derive(Error, Debug)]
pub(crate) enum DocumentError {
    #[error("Upload could not be read")]
    Multipart(#[from] MultipartError),

    #[error("No file was uploaded, expected a `file` or `pdf` field")]
    MissingFile,

    #[error("Only PDF files are allowed")]
    NotPdf,

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Extraction task failed")]
    Join(#[from] JoinError),
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub(crate) enum DocumentErrorType {
    InvalidRequest,
    UnsupportedMediaType,
    Extraction,
}

impl GetStatusCode for DocumentErrorType {
    fn status_code(&self) -> http::StatusCode {
        match self {
            Self::InvalidRequest => http::StatusCode::BAD_REQUEST,
            Self::UnsupportedMediaType => http::StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::Extraction => http::StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl ErrorDataProvider<DocumentErrorType> for DocumentError {
    fn error_data(self) -> Option<ErrorData<DocumentErrorType>> {
        let error_data = match self {
            // Body limit violations keep the status the multipart error carries.
            Self::Multipart(_) => return None,
            Self::MissingFile => ErrorData::new(DocumentErrorType::InvalidRequest, self.to_string()),
            Self::NotPdf => ErrorData::new(DocumentErrorType::UnsupportedMediaType, self.to_string()),
            Self::Extraction(error) => ErrorData::new(DocumentErrorType::Extraction, error.to_string()),
            Self::Join(error) => {
                tracing::error!(error = &error as &dyn Error, "pdf extraction task failed");
                return None;
            }
        };
        Some(error_data)
    }
}

impl GetStatusCode for DocumentError {
    fn status_code(&self) -> http::StatusCode {
        match self {
            Self::Multipart(error) => error.status(),
            _ => http::StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for DocumentError {
    fn into_response(self) -> Response {
        error_to_axum_response(self)
    }
}
