use crate::AppConfig;
use crate::app::{AuthConfig, create_app};
use crate::auth::UserToken;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::response::Response;
use http::{Method, Request, header};
use jsonwebtoken::{EncodingKey, Header};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use std::sync::Arc;
use studybuddy_test_helpers::setup_sqlite;
use uuid::Uuid;

pub(crate) use studybuddy_test_helpers::ScriptedGenerator;

pub(crate) const TEST_SECRET: &str = "test secret";

pub(crate) const QUIZ_REPLY: &str = r#"```json
[
  {"question": "What is the powerhouse of the cell?", "options": ["Nucleus", "Mitochondria", "Ribosome", "Golgi body"], "correctAnswer": "B", "explanation": "Mitochondria produce ATP.", "difficulty": "easy"},
  {"question": "Which organelle holds the DNA?", "options": ["Nucleus", "Vacuole", "Lysosome", "Cell wall"], "correctAnswer": "A", "explanation": "DNA is stored in the nucleus."},
  {"question": "Where are proteins assembled?", "options": ["Vacuole", "Nucleus", "Ribosome", "Membrane"], "correctAnswer": "C", "explanation": "Ribosomes translate mRNA."}
]
```"#;

pub(crate) const FLASHCARD_REPLY: &str = r#"[
  {"question": "Powerhouse of the cell", "answer": "Mitochondria"},
  {"question": "Site of protein synthesis", "answer": "Ribosome"}
]"#;

pub(crate) fn issue_token(user_id: Uuid) -> String {
    let claims = UserToken {
        sub: user_id.to_string(),
        exp: 4_102_444_800,
    };
    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap()
}

pub(crate) async fn setup_db() -> DatabaseConnection {
    setup_sqlite().await.unwrap()
}

pub(crate) fn app_with(
    conn: &DatabaseConnection,
    quiz_generator: impl Into<Arc<ScriptedGenerator>>,
    flashcard_generator: impl Into<Arc<ScriptedGenerator>>,
) -> Router {
    let quiz_generator: Arc<ScriptedGenerator> = quiz_generator.into();
    let flashcard_generator: Arc<ScriptedGenerator> = flashcard_generator.into();
    let app_config = AppConfig::new(quiz_generator, flashcard_generator);
    create_app(app_config, AuthConfig::from_secret(TEST_SECRET), &[], conn.clone()).unwrap()
}

pub(crate) async fn setup_app() -> (Router, DatabaseConnection) {
    let conn = setup_db().await;
    let app = app_with(
        &conn,
        ScriptedGenerator::replying(QUIZ_REPLY),
        ScriptedGenerator::replying(FLASHCARD_REPLY),
    );
    (app, conn)
}

pub(crate) fn json_request(method: Method, uri: &str, user_id: Option<Uuid>, body: Option<&Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(user_id) = user_id {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", issue_token(user_id)));
    }
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

pub(crate) async fn read_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
