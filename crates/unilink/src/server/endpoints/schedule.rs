use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::Local;
use serde_json::json;
use tracing::{error, info, warn};

use super::{json_body, parse_user};
use crate::schedule::{view_for_date, view_for_day, AppointmentForm, ScheduleError, Weekday};
use crate::server::types::ApiErrorType;
use crate::types::AppState;

fn schedule_error_response(error: ScheduleError) -> Response {
    match &error {
        ScheduleError::Persistence(e) => error!("Schedule store failed: {}", e),
        other => warn!("Rejected schedule request: {}", other),
    }
    ApiErrorType::from(error).into_response()
}

/// GET /users/:user/appointments
pub async fn get_appointments(
    Path(user): Path<String>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /users/{}/appointments", user);
    let user = match parse_user(&user) {
        Ok(user) => user,
        Err(response) => return response,
    };

    match s.schedule.list(&user) {
        Ok(appointments) => (StatusCode::OK, Json(appointments)).into_response(),
        Err(e) => schedule_error_response(e),
    }
}

/// POST /users/:user/appointments
///
/// Responds 201 with the generated id.
pub async fn post_appointment(
    Path(user): Path<String>,
    State(s): State<Arc<AppState>>,
    payload: Result<Json<AppointmentForm>, JsonRejection>,
) -> Response {
    info!("POST /users/{}/appointments", user);
    let user = match parse_user(&user) {
        Ok(user) => user,
        Err(response) => return response,
    };
    let form = match json_body(payload) {
        Ok(form) => form,
        Err(response) => return response,
    };

    match s.schedule.add(&user, &form) {
        Ok(id) => (StatusCode::CREATED, Json(json!({ "id": id }))).into_response(),
        Err(e) => schedule_error_response(e),
    }
}

/// PUT /users/:user/appointments/:id
pub async fn put_appointment(
    Path((user, id)): Path<(String, String)>,
    State(s): State<Arc<AppState>>,
    payload: Result<Json<AppointmentForm>, JsonRejection>,
) -> Response {
    info!("PUT /users/{}/appointments/{}", user, id);
    let user = match parse_user(&user) {
        Ok(user) => user,
        Err(response) => return response,
    };
    let form = match json_body(payload) {
        Ok(form) => form,
        Err(response) => return response,
    };

    match s.schedule.update(&user, &id, &form) {
        Ok(appointment) => (StatusCode::OK, Json(appointment)).into_response(),
        Err(e) => schedule_error_response(e),
    }
}

/// DELETE /users/:user/appointments/:id
pub async fn delete_appointment(
    Path((user, id)): Path<(String, String)>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("DELETE /users/{}/appointments/{}", user, id);
    let user = match parse_user(&user) {
        Ok(user) => user,
        Err(response) => return response,
    };

    match s.schedule.remove(&user, &id) {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => schedule_error_response(e),
    }
}

/// GET /users/:user/schedule/:day
///
/// `day` is a canonical weekday name (`Monday` ... `Sunday`, case-sensitive).
pub async fn get_schedule_for_day(
    Path((user, day)): Path<(String, String)>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /users/{}/schedule/{}", user, day);
    let user = match parse_user(&user) {
        Ok(user) => user,
        Err(response) => return response,
    };
    let day: Weekday = match day.parse() {
        Ok(day) => day,
        Err(e) => {
            return ApiErrorType::from((
                StatusCode::BAD_REQUEST,
                "Invalid day",
                Some(format!("{e}")),
            ))
            .into_response()
        }
    };

    match s.schedule.list(&user) {
        Ok(appointments) => (StatusCode::OK, Json(view_for_day(&appointments, day))).into_response(),
        Err(e) => schedule_error_response(e),
    }
}

/// GET /users/:user/today
///
/// Appointments on today's weekday, in server local time.
pub async fn get_today(
    Path(user): Path<String>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /users/{}/today", user);
    let user = match parse_user(&user) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let today = Local::now().date_naive();
    match s.schedule.list(&user) {
        Ok(appointments) => {
            (StatusCode::OK, Json(view_for_date(&appointments, today))).into_response()
        }
        Err(e) => schedule_error_response(e),
    }
}
