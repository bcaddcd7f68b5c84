pub mod analysis;
pub mod career;
pub mod profile;

use async_trait::async_trait;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::errors::AppError;
use crate::models::profile::StudentProfile;

/// JSON body whose rejections (malformed JSON, wrong types, unknown enum
/// values) surface as `AppError::Validation` instead of axum's plain-text 422.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, AppError> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(ValidatedJson(value))
    }
}

/// JSON body validated into a [`StudentProfile`].
///
/// Malformed JSON, missing fields, bad enum values, and out-of-range numbers all
/// surface as `AppError::Validation` rather than the framework's default rejection.
pub struct ProfilePayload(pub StudentProfile);

#[async_trait]
impl<S> FromRequest<S> for ProfilePayload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, AppError> {
        let ValidatedJson(value) = ValidatedJson::<Value>::from_request(req, state).await?;
        Ok(ProfilePayload(StudentProfile::from_value(value)?))
    }
}

/// Read-endpoint body: the document itself, or an informational message when
/// the caller has nothing stored. Absence is not an error.
#[derive(Debug, serde::Serialize)]
#[serde(untagged)]
pub enum Lookup<T> {
    Found(T),
    Missing { message: &'static str },
}

impl<T> Lookup<T> {
    pub fn from_option(value: Option<T>, message: &'static str) -> Self {
        match value {
            Some(v) => Lookup::Found(v),
            None => Lookup::Missing { message },
        }
    }
}
