use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use kombat::server::app;
use kombat::server::routes::route_request;
use tower::ServiceExt;

const FIGHT_BODY: &str = r#"{
    "player1": {
        "movimientos": ["D", "DSD", "S", "DSD", "SD"],
        "golpes": ["K", "P", "", "K", "P"]
    },
    "player2": {
        "movimientos": ["SA", "SA", "SA", "ASA", "SA"],
        "golpes": ["K", "", "K", "P", "P"]
    }
}"#;

fn json_body(body: &str) -> serde_json::Value {
    serde_json::from_str(body).expect("response should be valid json")
}

#[test]
fn root_redirects_to_kombat() {
    let response = route_request("GET", "/", "");
    assert_eq!(response.status_code, 307);
    assert_eq!(response.location, Some("/kombat/"));
}

#[test]
fn kombat_root_returns_welcome_info() {
    let response = route_request("GET", "/kombat/", "");
    assert_eq!(response.status_code, 200);
    assert_eq!(response.content_type, "application/json");
    assert_eq!(
        json_body(&response.body),
        serde_json::json!({
            "info": "Bienvenido a la API de Talana Kombat! Para iniciar una pelea, envía una solicitud POST a la URL /kombat/fight."
        })
    );
}

#[test]
fn fight_get_returns_usage_info() {
    let response = route_request("GET", "/kombat/fight", "");
    assert_eq!(response.status_code, 200);
    let payload = json_body(&response.body);
    assert!(payload["info"]
        .as_str()
        .is_some_and(|info| info.starts_with("Genial, has llegado a la URL!")));
}

#[test]
fn fight_post_returns_story_and_text() {
    let response = route_request("POST", "/kombat/fight", FIGHT_BODY);
    assert_eq!(response.status_code, 200);

    let payload = json_body(&response.body);
    let story: Vec<&str> = payload["story"]
        .as_array()
        .expect("story should be an array")
        .iter()
        .filter_map(serde_json::Value::as_str)
        .collect();
    assert_eq!(story.len(), 7);
    assert_eq!(story[0], "Tonyn avanza y da una patada");
    assert_eq!(
        story[6],
        "Arnaldor Gana la pelea y aún le queda 2 de energía"
    );
    assert_eq!(payload["story_text"], story.join("\n"));
}

#[test]
fn fight_post_is_deterministic() {
    let a = route_request("POST", "/kombat/fight", FIGHT_BODY);
    let b = route_request("POST", "/kombat/fight", FIGHT_BODY);
    assert_eq!(a, b);
}

#[test]
fn fight_post_rejects_missing_player() {
    let response = route_request(
        "POST",
        "/kombat/fight",
        r#"{"player2": {"movimientos": [], "golpes": []}}"#,
    );
    assert_eq!(response.status_code, 400);
    assert_eq!(
        json_body(&response.body)["detail"],
        "Error: Las claves \"player1\" y \"player2\" son requeridas."
    );
}

#[test]
fn fight_post_rejects_mismatched_lengths() {
    let response = route_request(
        "POST",
        "/kombat/fight",
        r#"{
            "player1": {"movimientos": ["D"], "golpes": ["K", "P"]},
            "player2": {"movimientos": [], "golpes": []}
        }"#,
    );
    assert_eq!(response.status_code, 400);
    assert_eq!(
        json_body(&response.body)["detail"],
        "Error: Para cada jugador, la cantidad de movimientos y de golpes debe ser la misma."
    );
}

#[test]
fn fight_post_rejects_malformed_json() {
    let response = route_request("POST", "/kombat/fight", "{bad json}");
    assert_eq!(response.status_code, 400);
    assert!(json_body(&response.body)["detail"]
        .as_str()
        .is_some_and(|detail| detail.starts_with("Invalid request body")));
}

#[test]
fn moves_endpoint_lists_catalog() {
    let response = route_request("GET", "/kombat/moves", "");
    assert_eq!(response.status_code, 200);
    let payload = json_body(&response.body);
    assert_eq!(payload["combatants"][0]["name"], "Tonyn Stallone");
    assert_eq!(payload["combatants"][1]["energy"], 6);
}

#[test]
fn health_endpoint_returns_ok_json() {
    let response = route_request("GET", "/health", "");
    assert_eq!(response.status_code, 200);
    assert_eq!(json_body(&response.body)["status"], "ok");
}

#[test]
fn unknown_route_is_not_found() {
    let response = route_request("GET", "/invalid-route/", "");
    assert_eq!(response.status_code, 404);
    assert_eq!(
        json_body(&response.body),
        serde_json::json!({ "detail": "Not Found" })
    );
}

#[test]
fn wrong_method_is_not_allowed() {
    let response = route_request("DELETE", "/kombat/fight", "");
    assert_eq!(response.status_code, 405);
}

#[tokio::test]
async fn axum_app_serves_fight_over_http() {
    let request = Request::builder()
        .method("POST")
        .uri("/kombat/fight")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(FIGHT_BODY))
        .expect("request should build");

    let response = app().oneshot(request).await.expect("app should respond");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    let payload: serde_json::Value =
        serde_json::from_slice(&bytes).expect("response should be valid json");
    assert_eq!(payload["story"].as_array().map(Vec::len), Some(7));
}

#[tokio::test]
async fn axum_app_redirects_root() {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("request should build");

    let response = app().oneshot(request).await.expect("app should respond");
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/kombat/");
}
