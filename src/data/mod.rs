//! Data loading subsystem.
//!
//! # Data Flow
//! ```text
//! request path ("/teams")
//!     → dispatch.rs (exact match → Resource)
//!     → loader.rs (read <data dir>/teams.json, parse)
//!     → model.rs (typed envelope, e.g. TeamsData)
//!     → ResourceData (tagged union over the six envelopes)
//! ```
//!
//! # Design Decisions
//! - Every request reads the file again; nothing is cached
//! - Loaders are synchronous; async callers move them to a blocking thread
//! - Entities are never mutated after parsing

pub mod dispatch;
pub mod error;
pub mod loader;
pub mod model;

pub use dispatch::{Resource, ResourceData};
pub use error::{LoadError, LoadResult};
pub use loader::DataSource;
