use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::directory::DirectoryError;
use crate::schedule::ScheduleError;
use crate::validation::FieldFailure;

/// JSON error body returned by every endpoint.
#[derive(Debug, Serialize)]
pub struct ApiErrorType {
    #[serde(skip)]
    status: StatusCode,
    error: String,
    context: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    failures: Vec<FieldFailure>,
}

impl From<(StatusCode, &str, Option<String>)> for ApiErrorType {
    fn from((status, error, context): (StatusCode, &str, Option<String>)) -> Self {
        Self {
            status,
            error: error.to_string(),
            context,
            failures: Vec::new(),
        }
    }
}

impl From<ScheduleError> for ApiErrorType {
    fn from(error: ScheduleError) -> Self {
        let context = Some(error.to_string());
        match error {
            ScheduleError::Validation(v) => Self {
                failures: v.failures,
                ..Self::from((StatusCode::UNPROCESSABLE_ENTITY, "Invalid appointment", context))
            },
            ScheduleError::NotFound { .. } => {
                Self::from((StatusCode::NOT_FOUND, "Appointment not found", context))
            }
            ScheduleError::Persistence(_) => Self::from((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to access schedule",
                context,
            )),
        }
    }
}

impl From<DirectoryError> for ApiErrorType {
    fn from(error: DirectoryError) -> Self {
        let context = Some(error.to_string());
        match error {
            DirectoryError::Validation(v) => Self {
                failures: v.failures,
                ..Self::from((StatusCode::UNPROCESSABLE_ENTITY, "Invalid input", context))
            },
            DirectoryError::NotFound { .. } => {
                Self::from((StatusCode::NOT_FOUND, "Record not found", context))
            }
            DirectoryError::Persistence(_) => Self::from((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to access directory",
                context,
            )),
        }
    }
}

impl IntoResponse for ApiErrorType {
    fn into_response(self) -> Response {
        (self.status, Json(self)).into_response()
    }
}
