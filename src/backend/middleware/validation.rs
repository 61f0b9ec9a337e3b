/**
 * Validated JSON Bodies
 *
 * `ValidatedJson<T>` deserializes a JSON body and runs `validator` rules on
 * it. Both failure kinds become `ApiError::Validation`, so clients always
 * get `{"errors": [...]}` with status 400.
 */

use axum::{
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::backend::error::ApiError;
use crate::shared::ErrorItem;

/// JSON body that passed validation
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            ApiError::Validation(vec![ErrorItem {
                msg: rejection.body_text(),
                param: None,
                location: Some("body".to_string()),
            }])
        })?;

        value
            .validate()
            .map_err(|errors| ApiError::Validation(field_errors(&errors)))?;

        Ok(Self(value))
    }
}

/// Flatten validator errors into error items, ordered by field name
pub fn field_errors(errors: &ValidationErrors) -> Vec<ErrorItem> {
    let mut items: Vec<ErrorItem> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |e| ErrorItem::field(field.to_string(), error_message(e)))
        })
        .collect();

    items.sort_by(|a, b| a.param.cmp(&b.param));
    items
}

fn error_message(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}
