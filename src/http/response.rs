//! Error responses.
//!
//! Page routes degrade to the error template, JSON routes to an
//! `{"error": "<message>"}` body. Both use status 500 and carry the raw
//! error text.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::render::Templates;

pub fn html_error(templates: &Templates, message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(templates.render_error(message)),
    )
        .into_response()
}

pub fn json_error(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": message })),
    )
        .into_response()
}
