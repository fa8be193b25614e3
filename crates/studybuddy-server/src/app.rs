use crate::{AppConfig, routes};
use axum::{Extension, Router};
use http::{HeaderValue, Method, header};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub(crate) struct InnerAuthConfig {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl InnerAuthConfig {
    pub(crate) fn decoding_key(&self) -> &DecodingKey {
        &self.decoding_key
    }

    pub(crate) fn validation(&self) -> &Validation {
        &self.validation
    }
}

#[derive(Clone)]
pub(crate) struct AuthConfig(Arc<InnerAuthConfig>);

impl AuthConfig {
    pub(crate) fn from_secret(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        Self(Arc::new(InnerAuthConfig {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }))
    }
}

impl AsRef<InnerAuthConfig> for AuthConfig {
    fn as_ref(&self) -> &InnerAuthConfig {
        &self.0
    }
}

pub(crate) fn create_app(
    app_config: AppConfig,
    auth_config: AuthConfig,
    origins: &[String],
    seaorm_pool: DatabaseConnection,
) -> anyhow::Result<Router> {
    tracing::info!(?origins, "allowing origins");

    // Credentials are allowed so the browser sends the `token` cookie.
    let api_cors = CorsLayer::new()
        .allow_origin(
            origins
                .iter()
                .map(|origin| origin.parse())
                .collect::<Result<Vec<HeaderValue>, _>>()?,
        )
        .allow_headers([
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::COOKIE,
            header::ORIGIN,
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600));

    let app = Router::new()
        .merge(routes::openapi::create_router())
        .nest(
            "/api/v0",
            Router::new()
                .nest("/status", routes::api::v0::status::create_router())
                .nest("/quizzes", routes::api::v0::quiz::create_router())
                .nest("/flashcards", routes::api::v0::flashcard::create_router())
                .nest("/documents", routes::api::v0::document::create_router())
                .layer(api_cors),
        )
        .layer(
            // ServiceBuilder layers are called top to bottom
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(Extension(app_config))
                .layer(Extension(auth_config))
                .layer(Extension(seaorm_pool)),
        )
        .with_state(());
    Ok(app)
}
