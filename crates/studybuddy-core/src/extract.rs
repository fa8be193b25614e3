use studybuddy_model::document::ExtractedDocument;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to read pdf: {0}")]
    Pdf(String),
    #[error("the document contains no extractable text")]
    NoText,
}

/// Extracts the text of every page of a PDF, joining pages with a newline.
///
/// This is CPU bound; async callers should run it on a blocking thread.
#[instrument(skip_all, fields(bytes = bytes.len()))]
pub fn extract_pdf(bytes: &[u8]) -> Result<ExtractedDocument, ExtractionError> {
    let pages = pdf_extract::extract_text_from_mem_by_pages(bytes).map_err(|error| {
        tracing::warn!(%error, "failed to extract pdf text");
        ExtractionError::Pdf(error.to_string())
    })?;

    let page_count = pages.len();
    let text = pages.join("\n");
    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }

    tracing::debug!(page_count, chars = text.len(), "extracted pdf text");

    Ok(ExtractedDocument {
        file_name: None,
        text,
        page_count,
    })
}
