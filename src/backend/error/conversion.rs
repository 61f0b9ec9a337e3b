/**
 * Error Conversion
 *
 * `IntoResponse` for `ApiError`. Internal errors are logged here with their
 * source, and the client only receives the plain-text context message.
 *
 * # Response Format
 *
 * - `Validation` - `{"errors": [{"msg", "param", "location"}, ...]}`
 * - `Rejected` - `{"errors": [{"msg"}]}`
 * - `NotFound`, `Unauthorized` - `{"msg"}`
 * - `Internal` - `text/plain` body
 */

use axum::{
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::error::types::ApiError;
use crate::shared::{ErrorItem, ErrorList, MessageBody};

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            ApiError::Validation(errors) => (status, Json(ErrorList { errors })).into_response(),
            ApiError::Rejected(message) => {
                (status, Json(ErrorList::single(ErrorItem::message(message)))).into_response()
            }
            ApiError::NotFound(message) | ApiError::Unauthorized(message) => {
                (status, Json(MessageBody::new(message))).into_response()
            }
            ApiError::Internal { context, source } => {
                tracing::error!(error = %source, "{}", context);
                (status, context).into_response()
            }
        }
    }
}
