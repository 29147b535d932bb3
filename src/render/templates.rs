//! Page templates.
//!
//! Templates are plain HTML files with `{{ name }}` placeholders. They are
//! read once at startup; a page absent from the templates directory falls back
//! to the copy compiled into the binary.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::data::Resource;
use crate::render::escape;

/// A renderable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Main,
    Products,
    Capabilities,
    Teams,
    Architecture,
    Pipelines,
    Error,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Main,
        Page::Products,
        Page::Capabilities,
        Page::Teams,
        Page::Architecture,
        Page::Pipelines,
        Page::Error,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Page::Main => "mainpage.html",
            Page::Products => "products.html",
            Page::Capabilities => "capabilities.html",
            Page::Teams => "teams.html",
            Page::Architecture => "architecture.html",
            Page::Pipelines => "pipelines.html",
            Page::Error => "error.html",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Main => "Organization overview",
            Page::Products => "Products",
            Page::Capabilities => "Capabilities",
            Page::Teams => "Teams",
            Page::Architecture => "Architecture",
            Page::Pipelines => "Pipelines",
            Page::Error => "Error",
        }
    }

    /// The HTML page for a resource. Value streams are JSON-only.
    pub fn for_resource(resource: Resource) -> Option<Page> {
        match resource {
            Resource::Products => Some(Page::Products),
            Resource::Capabilities => Some(Page::Capabilities),
            Resource::Teams => Some(Page::Teams),
            Resource::Architecture => Some(Page::Architecture),
            Resource::Pipelines => Some(Page::Pipelines),
            Resource::Valuestreams => None,
        }
    }

    fn builtin(self) -> &'static str {
        match self {
            Page::Main => include_str!("../../templates/mainpage.html"),
            Page::Products => include_str!("../../templates/products.html"),
            Page::Capabilities => include_str!("../../templates/capabilities.html"),
            Page::Teams => include_str!("../../templates/teams.html"),
            Page::Architecture => include_str!("../../templates/architecture.html"),
            Page::Pipelines => include_str!("../../templates/pipelines.html"),
            Page::Error => include_str!("../../templates/error.html"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to read template {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// The loaded set of page templates.
#[derive(Debug, Clone)]
pub struct Templates {
    pages: HashMap<Page, String>,
}

impl Templates {
    /// Templates compiled into the binary.
    pub fn builtin() -> Self {
        let pages = Page::ALL
            .into_iter()
            .map(|page| (page, page.builtin().to_string()))
            .collect();
        Self { pages }
    }

    /// Read templates from `dir`, falling back to the built-in page for any
    /// file that does not exist.
    pub fn load(dir: &Path) -> Result<Self, TemplateError> {
        let mut pages = HashMap::new();
        for page in Page::ALL {
            let path = dir.join(page.file_name());
            let source = match std::fs::read_to_string(&path) {
                Ok(source) => source,
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "Template not on disk, using built-in");
                    page.builtin().to_string()
                }
                Err(source) => return Err(TemplateError::Io { path, source }),
            };
            pages.insert(page, source);
        }
        tracing::info!(dir = %dir.display(), "Templates loaded");
        Ok(Self { pages })
    }

    /// Substitute `{{ name }}` placeholders. Values are inserted as given;
    /// callers escape them for their context. Unknown placeholders are kept.
    pub fn render(&self, page: Page, vars: &[(&str, &str)]) -> String {
        let source = self
            .pages
            .get(&page)
            .map(String::as_str)
            .unwrap_or_else(|| page.builtin());
        substitute(source, vars)
    }

    pub fn render_main(&self) -> String {
        self.render(Page::Main, &[])
    }

    /// A resource page with its data embedded as JSON.
    pub fn render_resource(&self, page: Page, json: &str) -> String {
        let title = escape::html(page.title());
        let data = escape::script_json(json);
        self.render(page, &[("title", &title), ("data", &data)])
    }

    pub fn render_error(&self, message: &str) -> String {
        let message = escape::html(message);
        self.render(Page::Error, &[("error", &message)])
    }
}

impl Default for Templates {
    fn default() -> Self {
        Self::builtin()
    }
}

fn substitute(source: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(source.len());
    let mut rest = source;
    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after = &rest[open + 2..];
        let Some(close) = after.find("}}") else {
            out.push_str(&rest[open..]);
            return out;
        };
        let name = after[..close].trim();
        match vars.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after[close + 2..];
    }
    out.push_str(rest);
    out
}
