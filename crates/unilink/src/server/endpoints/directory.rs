use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::{error, info, warn};

use super::{json_body, parse_user};
use crate::directory::{ClientForm, ClubForm, DirectoryError, ProfileForm};
use crate::server::types::ApiErrorType;
use crate::types::AppState;

fn directory_error_response(error: DirectoryError) -> Response {
    match &error {
        DirectoryError::Persistence(e) => error!("Directory store failed: {}", e),
        other => warn!("Rejected directory request: {}", other),
    }
    ApiErrorType::from(error).into_response()
}

/// GET /users/:user/profile
///
/// Seeds the user on first visit.
pub async fn get_profile(Path(user): Path<String>, State(s): State<Arc<AppState>>) -> Response {
    info!("GET /users/{}/profile", user);
    let user = match parse_user(&user) {
        Ok(user) => user,
        Err(response) => return response,
    };

    match s.profiles.get(&user) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => directory_error_response(e),
    }
}

/// PUT /users/:user/profile
pub async fn put_profile(
    Path(user): Path<String>,
    State(s): State<Arc<AppState>>,
    payload: Result<Json<ProfileForm>, JsonRejection>,
) -> Response {
    info!("PUT /users/{}/profile", user);
    let user = match parse_user(&user) {
        Ok(user) => user,
        Err(response) => return response,
    };
    let form = match json_body(payload) {
        Ok(form) => form,
        Err(response) => return response,
    };

    match s.profiles.update(&user, &form) {
        Ok(profile) => (StatusCode::OK, Json(profile)).into_response(),
        Err(e) => directory_error_response(e),
    }
}

/// GET /clubs
pub async fn get_clubs(State(s): State<Arc<AppState>>) -> Response {
    info!("GET /clubs");

    match s.clubs.list() {
        Ok(clubs) => (StatusCode::OK, Json(clubs)).into_response(),
        Err(e) => directory_error_response(e),
    }
}

/// POST /clubs
pub async fn post_club(
    State(s): State<Arc<AppState>>,
    payload: Result<Json<ClubForm>, JsonRejection>,
) -> Response {
    info!("POST /clubs");
    let form = match json_body(payload) {
        Ok(form) => form,
        Err(response) => return response,
    };

    match s.clubs.add(&form) {
        Ok(id) => (StatusCode::CREATED, Json(json!({ "id": id }))).into_response(),
        Err(e) => directory_error_response(e),
    }
}

/// GET /clients
pub async fn get_clients(State(s): State<Arc<AppState>>) -> Response {
    info!("GET /clients");

    match s.clients.list() {
        Ok(clients) => (StatusCode::OK, Json(clients)).into_response(),
        Err(e) => directory_error_response(e),
    }
}

/// POST /clients
pub async fn post_client(
    State(s): State<Arc<AppState>>,
    payload: Result<Json<ClientForm>, JsonRejection>,
) -> Response {
    info!("POST /clients");
    let form = match json_body(payload) {
        Ok(form) => form,
        Err(response) => return response,
    };

    match s.clients.add(&form) {
        Ok(id) => (StatusCode::CREATED, Json(json!({ "id": id }))).into_response(),
        Err(e) => directory_error_response(e),
    }
}
