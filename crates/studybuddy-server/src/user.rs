use crate::app::AuthConfig;
use crate::auth::validate_jwt;
use axum::extract::FromRequestParts;
use axum::{Extension, RequestPartsExt};
use axum_extra::TypedHeader;
use axum_extra::extract::CookieJar;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;
use http::StatusCode;
use http::request::Parts;
use std::error::Error;
use uuid::Uuid;

const TOKEN_COOKIE: &str = "token";

type Rejection = (StatusCode, &'static str);

/// Id of the authenticated caller, used as the owner of everything they generate.
#[derive(Clone)]
pub(crate) struct ExtractUserId(pub Uuid);

/// The `token` cookie wins over the `Authorization` header.
async fn extract_token(parts: &mut Parts) -> Option<String> {
    let jar = CookieJar::from_headers(&parts.headers);
    if let Some(cookie) = jar.get(TOKEN_COOKIE).filter(|cookie| !cookie.value().is_empty()) {
        return Some(cookie.value().to_owned());
    }

    let Ok(TypedHeader(Authorization(bearer))) = parts.extract::<TypedHeader<Authorization<Bearer>>>().await else {
        return None;
    };
    Some(bearer.token().to_owned())
}

impl<S> FromRequestParts<S> for ExtractUserId
where
    S: Send + Sync,
{
    type Rejection = Rejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Some(token) = extract_token(parts).await else {
            return Err((StatusCode::UNAUTHORIZED, "No authentication token provided"));
        };

        let Extension::<AuthConfig>(auth_config) = parts.extract::<Extension<AuthConfig>>().await.map_err(|error| {
            tracing::error!(error = &error as &dyn Error, "auth config not found in app data");
            (StatusCode::INTERNAL_SERVER_ERROR, "Authentication is not configured")
        })?;

        match validate_jwt(&token, auth_config.as_ref()) {
            Ok(user_id) => Ok(Self(user_id)),
            Err(error) => {
                tracing::debug!(error = &error as &dyn Error, "rejected identity token");
                Err((StatusCode::UNAUTHORIZED, "Invalid authentication token"))
            }
        }
    }
}
