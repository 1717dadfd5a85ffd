use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::info;

use crate::i18n::Locale;
use crate::schedule::Weekday;
use crate::server::types::ApiErrorType;
use crate::types::AppState;

fn parse_locale(raw: &str) -> Result<Locale, Response> {
    raw.parse().map_err(|e: crate::i18n::UnknownLocale| {
        ApiErrorType::from((StatusCode::BAD_REQUEST, "Invalid locale", Some(e.to_string())))
            .into_response()
    })
}

/// GET /i18n
///
/// Table of the server's default locale.
pub async fn get_default_table(State(s): State<Arc<AppState>>) -> Response {
    info!("GET /i18n");

    (
        StatusCode::OK,
        Json(json!({
            "locale": s.default_locale,
            "strings": s.catalog.table(s.default_locale),
        })),
    )
        .into_response()
}

/// GET /i18n/:locale
///
/// Every string of the locale, with gaps filled from the fallback locale.
pub async fn get_locale_table(
    Path(locale): Path<String>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /i18n/{}", locale);
    let locale = match parse_locale(&locale) {
        Ok(locale) => locale,
        Err(response) => return response,
    };

    (StatusCode::OK, Json(s.catalog.table(locale))).into_response()
}

/// GET /i18n/:locale/:key
pub async fn get_translation(
    Path((locale, key)): Path<(String, String)>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /i18n/{}/{}", locale, key);
    let locale = match parse_locale(&locale) {
        Ok(locale) => locale,
        Err(response) => return response,
    };

    let translator = s.catalog.translator(locale);
    let text = translator.t(&key);
    (
        StatusCode::OK,
        Json(json!({ "locale": translator.locale(), "key": key, "text": text })),
    )
        .into_response()
}

/// GET /weekdays/:locale
///
/// Weekday names and abbreviations for the day picker, Monday first.
pub async fn get_weekdays(
    Path(locale): Path<String>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /weekdays/{}", locale);
    let locale = match parse_locale(&locale) {
        Ok(locale) => locale,
        Err(response) => return response,
    };

    let translator = s.catalog.translator(locale);
    let days: Vec<_> = Weekday::ALL
        .iter()
        .map(|day| {
            json!({
                "day": day,
                "name": translator.t(day.translation_key()),
                "abbreviation": translator.t(day.abbreviation_key()),
            })
        })
        .collect();

    (
        StatusCode::OK,
        Json(json!({ "locale": translator.locale(), "days": days })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::test_util::{body_json, test_state};

    #[tokio::test]
    async fn test_translation_lookup() {
        let response = get_translation(
            Path(("uz".to_string(), "nav.clubs".to_string())),
            State(test_state()),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["text"], "Klublar");
        assert_eq!(body["locale"], "uz");
    }

    #[tokio::test]
    async fn test_unknown_key_echoes_key() {
        let response = get_translation(
            Path(("ru".to_string(), "nav.settings".to_string())),
            State(test_state()),
        )
        .await;
        assert_eq!(body_json(response).await["text"], "nav.settings");
    }

    #[tokio::test]
    async fn test_locale_table_and_bad_locale() {
        let response = get_locale_table(Path("en".to_string()), State(test_state())).await;
        assert_eq!(body_json(response).await["nav.home"], "Home");

        let response = get_locale_table(Path("fr".to_string()), State(test_state())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_default_table_uses_configured_locale() {
        let body = body_json(get_default_table(State(test_state())).await).await;
        assert_eq!(body["locale"], "ru");
        assert_eq!(body["strings"]["nav.home"], "Главная");
    }

    #[tokio::test]
    async fn test_weekdays_are_localized() {
        let response = get_weekdays(Path("uz".to_string()), State(test_state())).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["locale"], "uz");
        let days = body["days"].as_array().unwrap();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0]["day"], "Monday");
        assert_eq!(days[0]["name"], "Dushanba");
        assert!(!days[0]["abbreviation"].as_str().unwrap().is_empty());
        assert_ne!(days[0]["abbreviation"], "schedule.day.monday_abbr");

        let response = get_weekdays(Path("xx".to_string()), State(test_state())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
