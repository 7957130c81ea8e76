//! JSON body extractor that runs `validator` rules before the handler sees the value.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use crate::error::AppError;

/// Like [`axum::Json`], but rejects with [`AppError`] so failures keep the envelope shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| {
                debug!(error = %rejection, "rejected request body");
                AppError::Payload(rejection.body_text())
            })?;

        value
            .validate()
            .map_err(|errors| AppError::Validation(describe_violation(&errors)))?;

        Ok(Self(value))
    }
}

/// `"<message> : <field>"` for the alphabetically first failing field.
pub fn describe_violation(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .find_map(|(field, violations)| {
            violations.first().map(|v| {
                let message = v.message.as_deref().unwrap_or(v.code.as_ref());
                format!("{} : {}", message, field)
            })
        })
        .unwrap_or_else(|| errors.to_string())
}
