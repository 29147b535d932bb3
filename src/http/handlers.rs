//! Request handlers.
//!
//! - Page handlers load their resource through its direct loader and embed
//!   the JSON in an HTML template.
//! - The JSON handler dispatches on the literal request path.
//! - File reads run on the blocking thread pool.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tokio::task::JoinError;

use crate::data::{LoadError, Resource};
use crate::http::request;
use crate::http::response;
use crate::http::server::AppState;
use crate::observability::metrics;
use crate::render::Page;

/// Anything that can stop a handler from producing its data.
#[derive(Debug, Error)]
pub enum ServeError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("load task failed: {0}")]
    Task(#[from] JoinError),

    #[error("failed to encode data: {0}")]
    Encode(#[from] serde_json::Error),
}

async fn run_blocking<T, F>(f: F) -> Result<T, ServeError>
where
    F: FnOnce() -> Result<T, LoadError> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f).await??)
}

/// `GET /`
pub async fn main_page(State(state): State<AppState>) -> Response {
    metrics::record_request("/", 200);
    Html(state.templates.render_main()).into_response()
}

/// `GET /<resource>` for resources with a page. JSON clients are handed to
/// [`json_data`]'s logic instead.
pub async fn resource_page(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    resource: Resource,
    page: Page,
) -> Response {
    if request::wants_json(&headers) {
        return serve_json(&state, &headers, uri.path()).await;
    }

    let source = state.data.clone();
    let rendered = run_blocking(move || source.load(resource))
        .await
        .and_then(|data| Ok(serde_json::to_string(&data)?));

    match rendered {
        Ok(json) => {
            metrics::record_request(resource.path(), 200);
            Html(state.templates.render_resource(page, &json)).into_response()
        }
        Err(e) => {
            tracing::error!(
                request_id = %request::request_id(&headers),
                resource = resource.name(),
                error = %e,
                "Failed to render page"
            );
            metrics::record_request(resource.path(), 500);
            response::html_error(&state.templates, &e.to_string())
        }
    }
}

/// Generic JSON endpoint, keyed off the request path.
pub async fn json_data(State(state): State<AppState>, headers: HeaderMap, uri: Uri) -> Response {
    serve_json(&state, &headers, uri.path()).await
}

async fn serve_json(state: &AppState, headers: &HeaderMap, path: &str) -> Response {
    let route = Resource::from_path(path).map_or("unmatched", Resource::path);
    let source = state.data.clone();
    let owned = path.to_string();

    match run_blocking(move || source.load_for_path(&owned)).await {
        Ok(data) => {
            tracing::debug!(
                request_id = %request::request_id(headers),
                resource = data.resource().name(),
                items = data.item_count(),
                "Serving JSON"
            );
            metrics::record_request(route, 200);
            (StatusCode::OK, Json(data)).into_response()
        }
        Err(e) => {
            tracing::error!(
                request_id = %request::request_id(headers),
                path = %path,
                error = %e,
                "Failed to load data"
            );
            metrics::record_request(route, 500);
            response::json_error(&e.to_string())
        }
    }
}
