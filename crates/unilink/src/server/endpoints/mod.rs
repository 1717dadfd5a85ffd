use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::warn;

use crate::server::types::ApiErrorType;
use crate::types::UserId;

pub mod directory;
pub mod i18n;
pub mod schedule;
pub mod status;

/// Parses the `:user` path segment, answering 400 if it is not a valid id.
fn parse_user(raw: &str) -> Result<UserId, Response> {
    UserId::parse(raw).map_err(|e| {
        ApiErrorType::from((StatusCode::BAD_REQUEST, "Invalid user id", Some(e.to_string())))
            .into_response()
    })
}

/// Unwraps a JSON request body, answering with an [`ApiErrorType`] if axum
/// could not read or deserialize it.
fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, Response> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            Err(ApiErrorType::from((
                rejection.status(),
                "Invalid request body",
                Some(rejection.body_text()),
            ))
            .into_response())
        }
    }
}
