//! Organization data web server library.
//!
//! Serves products, capabilities, teams, architecture, pipelines and value
//! streams from JSON files, either as HTML pages or as raw JSON.

pub mod config;
pub mod data;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod render;

pub use config::ServerConfig;
pub use data::{DataSource, LoadError, Resource, ResourceData};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
