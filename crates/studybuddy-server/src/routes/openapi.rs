use super::api;

use axum::routing::get;
use axum::{Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder};
use utoipa::{Modify, OpenApi, openapi::security::SecurityScheme};

struct SecurityAddon;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::v0::status::get_status,
        api::v0::quiz::generate_quiz,
        api::v0::quiz::get_quizzes,
        api::v0::quiz::get_my_quizzes,
        api::v0::quiz::get_quiz,
        api::v0::quiz::submit_answers,
        api::v0::flashcard::generate_flashcards,
        api::v0::flashcard::get_my_flashcard_sets,
        api::v0::flashcard::get_flashcard_set,
        api::v0::document::extract_document,
    ),
    components(schemas(
        super::error::ContentErrorType,
        api::v0::document::error::DocumentErrorType,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "v0/quizzes", description = "Generate, browse and score quizzes"),
        (name = "v0/flashcards", description = "Generate and browse flashcard sets"),
        (name = "v0/documents", description = "Extract study material from uploads"),
    )
)]
struct ApiDoc;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "token",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some("Identity token, also accepted as the `token` cookie"))
                    .build(),
            ),
        );
    }
}

pub fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .with_state(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_routes() {
        let doc = ApiDoc::openapi();
        for path in [
            "/api/v0/quizzes/generate",
            "/api/v0/quizzes/{quiz_id}/score",
            "/api/v0/flashcards/{set_id}",
            "/api/v0/documents/extract",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
        let components = doc.components.unwrap();
        assert!(components.security_schemes.contains_key("token"));
        assert!(components.schemas.contains_key("Quiz"));
    }
}
