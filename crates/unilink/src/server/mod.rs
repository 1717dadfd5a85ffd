use std::sync::Arc;

use axum::routing::{get, put};
use axum::Router;

use crate::server::endpoints::{directory, i18n, schedule, status};
use crate::types::AppState;

mod endpoints;
mod types;

pub use types::ApiErrorType;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Per-user routes; the user id is taken from the path
    let user_router = Router::new()
        .route(
            "/appointments",
            get(schedule::get_appointments).post(schedule::post_appointment),
        )
        .route(
            "/appointments/:id",
            put(schedule::put_appointment).delete(schedule::delete_appointment),
        )
        .route("/schedule/:day", get(schedule::get_schedule_for_day))
        .route("/today", get(schedule::get_today))
        .route(
            "/profile",
            get(directory::get_profile).put(directory::put_profile),
        );

    let i18n_router = Router::new()
        .route("/", get(i18n::get_default_table))
        .route("/:locale", get(i18n::get_locale_table))
        .route("/:locale/:key", get(i18n::get_translation));

    Router::new()
        .route("/health", get(status::get_health))
        .nest("/users/:user", user_router)
        .route(
            "/clubs",
            get(directory::get_clubs).post(directory::post_club),
        )
        .route(
            "/clients",
            get(directory::get_clients).post(directory::post_client),
        )
        .nest("/i18n", i18n_router)
        .route("/weekdays/:locale", get(i18n::get_weekdays))
        .with_state(app_state)
}
