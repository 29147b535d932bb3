//! HTML rendering.
//!
//! # Data Flow
//! ```text
//! loaded envelope
//!     → serde_json::to_string
//!     → escape.rs (script-safe JSON)
//!     → templates.rs (substitute into page)
//!     → HTML response body
//! ```

pub mod escape;
pub mod templates;

pub use templates::{Page, TemplateError, Templates};
