use crate::routes::api::v0::document::error::DocumentError;
use crate::user::ExtractUserId;
use axum::extract::{DefaultBodyLimit, Multipart};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use studybuddy_core::extract::extract_pdf;
use studybuddy_model::document::ExtractedDocument;
use utoipa::ToSchema;

pub(crate) mod error;

const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;
const FILE_FIELDS: [&str; 2] = ["file", "pdf"];
const PDF_CONTENT_TYPE: &str = "application/pdf";

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/extract", post(extract_document))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(())
}

/// Browsers sometimes send PDFs as `application/octet-stream`, the file name decides then.
fn is_pdf(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    match content_type {
        Some(PDF_CONTENT_TYPE) => true,
        Some("application/octet-stream") | None => {
            file_name.is_some_and(|name| name.to_ascii_lowercase().ends_with(".pdf"))
        }
        Some(_) => false,
    }
}

#[allow(dead_code)]
#[derive(ToSchema)]
pub(crate) struct DocumentUpload {
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
}

#[utoipa::path(
    post,
    path = "/api/v0/documents/extract",
    request_body(content = DocumentUpload, content_type = "multipart/form-data"),
    responses(
        (status = OK, body = ExtractedDocument, description = "Text of every page of the uploaded PDF"),
        (status = BAD_REQUEST, description = "No file was uploaded"),
        (status = UNSUPPORTED_MEDIA_TYPE, description = "The upload is not a PDF"),
        (status = UNPROCESSABLE_ENTITY, description = "No text could be extracted from the PDF"),
    ),
    tag = "v0/documents",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn extract_document(
    ExtractUserId(user_id): ExtractUserId,
    mut multipart: Multipart,
) -> Result<Response, DocumentError> {
    while let Some(field) = multipart.next_field().await? {
        if !field.name().is_some_and(|name| FILE_FIELDS.contains(&name)) {
            continue;
        }

        let file_name = field.file_name().map(ToOwned::to_owned);
        if !is_pdf(field.content_type(), file_name.as_deref()) {
            return Err(DocumentError::NotPdf);
        }

        let bytes = field.bytes().await?;
        let mut document = tokio::task::spawn_blocking(move || extract_pdf(&bytes)).await??;
        document.file_name = file_name;

        tracing::info!(%user_id, pages = document.page_count, chars = document.text.len(), "extracted document");
        return Ok(Json(document).into_response());
    }

    Err(DocumentError::MissingFile)
}
