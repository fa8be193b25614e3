use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ExtractedDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    pub text: String,
    pub page_count: usize,
}
