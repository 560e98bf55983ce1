use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::server::api;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub content_type: &'static str,
    pub location: Option<&'static str>,
    pub body: String,
}

impl HttpResponse {
    fn json(status_code: u16, body: String) -> Self {
        Self {
            status_code,
            content_type: "application/json",
            location: None,
            body,
        }
    }

    fn redirect(location: &'static str) -> Self {
        Self {
            status_code: 307,
            content_type: "text/plain; charset=utf-8",
            location: Some(location),
            body: String::new(),
        }
    }
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut response =
            (status, [(header::CONTENT_TYPE, self.content_type)], self.body).into_response();
        if let Some(location) = self.location {
            response
                .headers_mut()
                .insert(header::LOCATION, HeaderValue::from_static(location));
        }
        response
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Route {
    Root,
    Welcome,
    Fight,
    Moves,
    Health,
}

fn match_route(path: &str) -> Option<Route> {
    let path = path.split('?').next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    match trimmed {
        "" => Some(Route::Root),
        "/kombat" => Some(Route::Welcome),
        "/kombat/fight" => Some(Route::Fight),
        "/kombat/moves" => Some(Route::Moves),
        "/health" => Some(Route::Health),
        _ => None,
    }
}

pub fn route_request(method: &str, path: &str, body: &str) -> HttpResponse {
    let Some(route) = match_route(path) else {
        return error_response(404, "Not Found");
    };

    match (method, route) {
        ("GET", Route::Root) => HttpResponse::redirect("/kombat/"),
        ("GET", Route::Welcome) => ok_or_internal(api::welcome_payload()),
        ("GET", Route::Fight) => ok_or_internal(api::fight_info_payload()),
        ("POST", Route::Fight) => match api::fight_payload(body) {
            Ok(payload) => HttpResponse::json(200, payload),
            Err(err @ api::FightPayloadError::Serialize(_)) => {
                tracing::error!(%err, "fight response failed");
                error_response(500, &err.to_string())
            }
            Err(err) => {
                tracing::warn!(%err, "fight request rejected");
                error_response(400, &err.to_string())
            }
        },
        ("GET", Route::Moves) => ok_or_internal(api::moves_payload()),
        ("GET", Route::Health) => ok_or_internal(api::health_payload()),
        _ => error_response(405, "Method Not Allowed"),
    }
}

fn ok_or_internal(payload: Result<String, serde_json::Error>) -> HttpResponse {
    match payload {
        Ok(body) => HttpResponse::json(200, body),
        Err(err) => error_response(500, &err.to_string()),
    }
}

fn error_response(status_code: u16, detail: &str) -> HttpResponse {
    let fallback = "{\n  \"detail\": \"Unknown error\"\n}".to_string();
    HttpResponse::json(
        status_code,
        serde_json::to_string_pretty(&serde_json::json!({ "detail": detail }))
            .unwrap_or(fallback),
    )
}
