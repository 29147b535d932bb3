//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (request ID, tracing, timeout, headers)
//! - Serve static assets
//! - Bind server to listener and stop on shutdown

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, HeaderValue, Request, Uri},
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::Span;

use crate::config::ServerConfig;
use crate::data::{DataSource, Resource};
use crate::http::handlers;
use crate::http::request::{self, UuidRequestId};
use crate::render::{Page, TemplateError, Templates};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub data: DataSource,
    pub templates: Arc<Templates>,
}

/// HTTP server for the data pages and JSON endpoints.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new HTTP server, reading templates from the configured directory.
    pub fn new(config: ServerConfig) -> Result<Self, TemplateError> {
        let templates = Templates::load(&config.web.templates_dir)?;
        Ok(Self::with_templates(config, templates))
    }

    /// Create a server with an already loaded template set.
    pub fn with_templates(config: ServerConfig, templates: Templates) -> Self {
        let state = AppState {
            data: DataSource::from_config(&config.data),
            templates: Arc::new(templates),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &ServerConfig, state: AppState) -> Router {
        let mut router = Router::new().route("/", get(handlers::main_page));

        for resource in Resource::ALL {
            router = match Page::for_resource(resource) {
                Some(page) => router.route(
                    resource.path(),
                    get(
                        move |state: State<AppState>, headers: HeaderMap, uri: Uri| {
                            handlers::resource_page(state, headers, uri, resource, page)
                        },
                    ),
                ),
                None => router.route(resource.path(), get(handlers::json_data)),
            };
        }

        router
            .nest_service("/static", ServeDir::new(&config.web.static_dir))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(SetRequestIdLayer::x_request_id(UuidRequestId))
                    .layer(TraceLayer::new_for_http().make_span_with(request_span))
                    .layer(PropagateRequestIdLayer::x_request_id())
                    .layer(SetResponseHeaderLayer::if_not_present(
                        header::X_CONTENT_TYPE_OPTIONS,
                        HeaderValue::from_static("nosniff"),
                    ))
                    .layer(TimeoutLayer::new(Duration::from_secs(
                        config.timeouts.request_secs,
                    ))),
            )
    }

    /// The fully layered router, for serving or for driving in tests.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on the given listener until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            data_dir = %self.config.data.dir.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

fn request_span(req: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        method = %req.method(),
        path = %req.uri().path(),
        request_id = %request::request_id(req.headers()),
    )
}
