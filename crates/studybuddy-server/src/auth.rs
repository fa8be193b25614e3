use crate::app::InnerAuthConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub(crate) enum AuthError {
    #[error("Invalid token")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Subject claim is not a user id")]
    InvalidSubject(#[from] uuid::Error),
}

/// Claims of an identity token. Older tokens carry the subject as `userId`.
#[derive(Serialize, Deserialize, Debug)]
pub(crate) struct UserToken {
    #[serde(alias = "userId")]
    pub sub: String,
    pub exp: u64,
}

/// Verifies signature and expiry and returns the owner id the token was issued for.
pub(crate) fn validate_jwt(token: &str, config: &InnerAuthConfig) -> Result<Uuid, AuthError> {
    let data = jsonwebtoken::decode::<UserToken>(token, config.decoding_key(), config.validation())?;
    let user_id = Uuid::parse_str(&data.claims.sub)?;
    Ok(user_id)
}
