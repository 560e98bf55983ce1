use axum::http::{Method, Uri};
use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod routes;

use routes::{route_request, HttpResponse};

/// Axum application: every request goes through [route_request].
pub fn app() -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(TraceLayer::new_for_http())
}

async fn dispatch(method: Method, uri: Uri, body: String) -> HttpResponse {
    route_request(method.as_str(), uri.path(), &body)
}

pub fn run_server(bind_addr: &str) -> std::io::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(serve(bind_addr))
}

pub async fn serve(bind_addr: &str) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("kombat server listening on http://{bind_addr}");
    axum::serve(listener, app()).await
}
