//! Identity verification: bearer credential to opaque user id.

pub mod firebase;

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use thiserror::Error;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no bearer token provided")]
    MissingToken,

    #[error("invalid token format: {0}")]
    InvalidFormat(String),

    #[error("token has expired")]
    Expired,

    #[error("unknown key ID: {0}")]
    UnknownKeyId(String),

    #[error("failed to fetch signing keys: {0}")]
    KeyFetch(String),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// Resolves a bearer credential to the user id it was issued for.
#[async_trait]
pub trait IdentityVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<String, AuthError>;
}

/// The verified caller. Extracting it rejects the request with 401 unless a
/// valid `Authorization: Bearer <token>` header is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub String);

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, AppError> {
        let token = bearer_token(parts).ok_or(AuthError::MissingToken)?;
        let user_id = state.verifier.verify(token).await?;
        Ok(AuthUser(user_id))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let header = parts.headers.get(axum::http::header::AUTHORIZATION)?;
    let value = header.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
