use crate::AppConfig;
use crate::routes::api::v0::flashcard::error::FlashcardError;
use crate::user::ExtractUserId;
use axum::extract::Path;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use studybuddy_core::content::{FlashcardRequest, load};
use studybuddy_core::generation::prompt::{DEFAULT_FLASHCARD_COUNT, MAX_FLASHCARD_COUNT};
use studybuddy_model::content::Provenance;
use studybuddy_model::flashcard::FlashcardSet;
use utoipa::ToSchema;
use uuid::Uuid;

pub(crate) mod error;

pub(crate) fn create_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/mine", get(get_my_flashcard_sets))
        .route("/generate", post(generate_flashcards))
        .route("/{set_id}", get(get_flashcard_set))
        .with_state(())
}

fn default_card_count() -> usize {
    DEFAULT_FLASHCARD_COUNT
}

#[derive(Debug, Deserialize, ToSchema)]
pub(crate) struct GenerateFlashcards {
    text: String,
    #[serde(default = "default_card_count", alias = "numCards")]
    #[schema(minimum = 1, maximum = 30, default = 10)]
    num_cards: usize,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    provenance: Provenance,
}

#[utoipa::path(
    post,
    path = "/api/v0/flashcards/generate",
    request_body = GenerateFlashcards,
    responses(
        (status = OK, body = FlashcardSet, description = "The generated and stored flashcard set"),
        (status = BAD_REQUEST, description = "Missing text or card count out of range"),
        (status = BAD_GATEWAY, description = "The generative service failed or returned unusable content"),
        (status = GATEWAY_TIMEOUT, description = "The generative service did not answer in time"),
    ),
    tag = "v0/flashcards",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn generate_flashcards(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Extension(app_config): Extension<AppConfig>,
    Json(body): Json<GenerateFlashcards>,
) -> Result<Response, FlashcardError> {
    if !(1..=MAX_FLASHCARD_COUNT).contains(&body.num_cards) {
        return Err(FlashcardError::InvalidCardCount(body.num_cards));
    }

    let request = FlashcardRequest::builder()
        .text(body.text)
        .num_cards(body.num_cards)
        .title(body.title)
        .provenance(body.provenance)
        .build();

    let set = studybuddy_core::content::generate_flashcards(
        app_config.flashcard_generator(),
        &conn,
        user_id,
        request,
        Utc::now(),
    )
    .await?;

    Ok(Json(set).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/flashcards/mine",
    responses(
        (status = OK, body = Vec<FlashcardSet>, description = "Flashcard sets generated by the caller, newest first"),
    ),
    tag = "v0/flashcards",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_my_flashcard_sets(
    ExtractUserId(user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
) -> Result<Response, FlashcardError> {
    let sets = load::list_flashcard_sets_by_owner(&conn, user_id).await?;
    Ok(Json(sets).into_response())
}

#[utoipa::path(
    get,
    path = "/api/v0/flashcards/{set_id}",
    params(
        ("set_id" = Uuid, Path, description = "Id of the flashcard set"),
    ),
    responses(
        (status = OK, body = FlashcardSet, description = "The flashcard set with all cards"),
        (status = NOT_FOUND, description = "No flashcard set with this id"),
    ),
    tag = "v0/flashcards",
    security(
        ("token" = [])
    )
)]
pub(crate) async fn get_flashcard_set(
    ExtractUserId(_user_id): ExtractUserId,
    Extension(conn): Extension<DatabaseConnection>,
    Path(set_id): Path<Uuid>,
) -> Result<Response, FlashcardError> {
    let set = load::load_flashcard_set(&conn, set_id)
        .await?
        .ok_or(FlashcardError::SetNotFound)?;
    Ok(Json(set).into_response())
}

#[cfg(test)]
mod tests {
    use crate::test_helpers::{QUIZ_REPLY, ScriptedGenerator, app_with, json_request, read_json, setup_app, setup_db};
    use http::{Method, StatusCode};
    use serde_json::json;
    use test_log::test;
    use tower::ServiceExt;
    use uuid::Uuid;

    #[test(tokio::test)]
    async fn test_generate_list_and_load() {
        let (app, _conn) = setup_app().await;
        let user_id = Uuid::new_v4();

        let body = json!({ "text": "Cells are the basic unit of life.", "num_cards": 2 });
        let response = app
            .clone()
            .oneshot(json_request(Method::POST, "/api/v0/flashcards/generate", Some(user_id), Some(&body)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let set = read_json(response).await;
        assert_eq!(set["description"], "Auto-generated flashcard set with 2 cards");
        assert_eq!(set["cards"][0]["answer"], "Mitochondria");
        assert!(set["title"].as_str().unwrap().starts_with("Flashcards generated on "));

        let response = app
            .clone()
            .oneshot(json_request(Method::GET, "/api/v0/flashcards/mine", Some(user_id), None))
            .await
            .unwrap();
        assert_eq!(read_json(response).await, json!([set.clone()]));

        let uri = format!("/api/v0/flashcards/{}", set["id"].as_str().unwrap());
        let response = app
            .oneshot(json_request(Method::GET, &uri, Some(Uuid::new_v4()), None))
            .await
            .unwrap();
        assert_eq!(read_json(response).await, set);
    }

    #[test(tokio::test)]
    async fn test_quiz_shaped_reply_is_rejected() {
        let conn = setup_db().await;
        let app = app_with(
            &conn,
            ScriptedGenerator::replying(QUIZ_REPLY),
            ScriptedGenerator::replying(r#"[{"question": "Powerhouse of the cell"}]"#),
        );

        let response = app
            .oneshot(json_request(
                Method::POST,
                "/api/v0/flashcards/generate",
                Some(Uuid::new_v4()),
                Some(&json!({ "text": "Cells." })),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let error = read_json(response).await;
        assert!(error["error_description"].as_str().unwrap().contains("answer"));
    }

    #[test(tokio::test)]
    async fn test_card_count_range() {
        let (app, _conn) = setup_app().await;
        for count in [0, 31] {
            let response = app
                .clone()
                .oneshot(json_request(
                    Method::POST,
                    "/api/v0/flashcards/generate",
                    Some(Uuid::new_v4()),
                    Some(&json!({ "text": "Cells.", "num_cards": count })),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[test(tokio::test)]
    async fn test_unknown_set() {
        let (app, _conn) = setup_app().await;
        let uri = format!("/api/v0/flashcards/{}", Uuid::new_v4());
        let response = app
            .oneshot(json_request(Method::GET, &uri, Some(Uuid::new_v4()), None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
