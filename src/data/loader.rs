//! File loaders, one per resource.
//!
//! Each loader reads its whole file, parses it into the typed envelope and
//! returns it. Nothing is cached: every call hits the filesystem.
//!
//! `pipelines.json` is optional. Any read failure there yields an empty
//! collection; every other file must be readable.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::de::DeserializeOwned;

use crate::config::DataConfig;
use crate::data::dispatch::Resource;
use crate::data::error::{LoadError, LoadResult};
use crate::data::model::{
    Architecture, CapabilitiesData, PipelinesData, ProductsData, TeamsData, ValuestreamsData,
};
use crate::observability::metrics;

/// Default nesting limit for the capability tree.
pub const DEFAULT_MAX_CAPABILITY_DEPTH: usize = 32;

/// Reads resource files from a data directory.
#[derive(Debug, Clone)]
pub struct DataSource {
    root: PathBuf,
    max_capability_depth: usize,
}

impl DataSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            max_capability_depth: DEFAULT_MAX_CAPABILITY_DEPTH,
        }
    }

    pub fn from_config(config: &DataConfig) -> Self {
        Self::new(config.dir.clone()).with_max_capability_depth(config.max_capability_depth)
    }

    pub fn with_max_capability_depth(mut self, limit: usize) -> Self {
        self.max_capability_depth = limit;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of a resource's file.
    pub fn path_of(&self, resource: Resource) -> PathBuf {
        self.root.join(resource.file_name())
    }

    pub fn load_products(&self) -> LoadResult<ProductsData> {
        self.read_json(Resource::Products)
    }

    /// Loads the capability tree and rejects it if it nests deeper than the
    /// configured limit.
    pub fn load_capabilities(&self) -> LoadResult<CapabilitiesData> {
        let data: CapabilitiesData = self.read_json(Resource::Capabilities)?;
        let depth = data.depth();
        if depth > self.max_capability_depth {
            return Err(LoadError::TooDeep {
                path: self.path_of(Resource::Capabilities),
                depth,
                limit: self.max_capability_depth,
            });
        }
        Ok(data)
    }

    pub fn load_teams(&self) -> LoadResult<TeamsData> {
        self.read_json(Resource::Teams)
    }

    pub fn load_architecture(&self) -> LoadResult<Architecture> {
        self.read_json(Resource::Architecture)
    }

    /// Missing or unreadable file means no pipelines, not an error.
    pub fn load_pipelines(&self) -> LoadResult<PipelinesData> {
        match self.read_json(Resource::Pipelines) {
            Err(LoadError::Io { path, source }) => {
                if source.kind() == ErrorKind::NotFound {
                    tracing::debug!(path = %path.display(), "No pipelines file, serving empty list");
                } else {
                    tracing::warn!(path = %path.display(), error = %source, "Pipelines file unreadable, serving empty list");
                }
                Ok(PipelinesData::default())
            }
            other => other,
        }
    }

    pub fn load_valuestreams(&self) -> LoadResult<ValuestreamsData> {
        self.read_json(Resource::Valuestreams)
    }

    /// Reads and parses one resource file. The load duration is recorded
    /// whether or not the load succeeds.
    fn read_json<T: DeserializeOwned>(&self, resource: Resource) -> LoadResult<T> {
        let start = Instant::now();
        let path = self.path_of(resource);
        let result = std::fs::read(&path)
            .map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            })
            .and_then(|bytes| {
                let data = parse(&path, &bytes)?;
                tracing::debug!(
                    resource = resource.name(),
                    path = %path.display(),
                    bytes = bytes.len(),
                    "Loaded data file"
                );
                Ok(data)
            });

        metrics::record_load(resource.name(), start);
        result
    }
}

impl Default for DataSource {
    fn default() -> Self {
        Self::new("data")
    }
}

fn parse<T: DeserializeOwned>(path: &Path, bytes: &[u8]) -> LoadResult<T> {
    serde_json::from_slice(bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
