//! Request path to loader dispatch.
//!
//! # Responsibilities
//! - Enumerate the served resources and their paths
//! - Map a raw request path onto exactly one resource
//! - Wrap each loader's envelope in a single tagged result
//!
//! # Design Decisions
//! - Exact, case-sensitive match; no trailing-slash or query normalization
//! - Unknown paths are an error, never a default resource
//! - `ResourceData` serializes untagged so the JSON body is the envelope itself

use serde::Serialize;

use crate::data::error::{LoadError, LoadResult};
use crate::data::loader::DataSource;
use crate::data::model::{
    Architecture, CapabilitiesData, PipelinesData, ProductsData, TeamsData, ValuestreamsData,
};

/// A resource backed by one data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Products,
    Capabilities,
    Teams,
    Architecture,
    Pipelines,
    Valuestreams,
}

impl Resource {
    pub const ALL: [Resource; 6] = [
        Resource::Products,
        Resource::Capabilities,
        Resource::Teams,
        Resource::Architecture,
        Resource::Pipelines,
        Resource::Valuestreams,
    ];

    /// Short lowercase name, used in logs and metric labels.
    pub fn name(self) -> &'static str {
        match self {
            Resource::Products => "products",
            Resource::Capabilities => "capabilities",
            Resource::Teams => "teams",
            Resource::Architecture => "architecture",
            Resource::Pipelines => "pipelines",
            Resource::Valuestreams => "valuestreams",
        }
    }

    /// Request path this resource is served at.
    pub fn path(self) -> &'static str {
        match self {
            Resource::Products => "/products",
            Resource::Capabilities => "/capabilities",
            Resource::Teams => "/teams",
            Resource::Architecture => "/architecture",
            Resource::Pipelines => "/pipelines",
            Resource::Valuestreams => "/valuestreams",
        }
    }

    /// File name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Resource::Products => "products.json",
            Resource::Capabilities => "capabilities.json",
            Resource::Teams => "teams.json",
            Resource::Architecture => "architecture.json",
            Resource::Pipelines => "pipelines.json",
            Resource::Valuestreams => "valuestreams.json",
        }
    }

    /// Exact match of a request path.
    pub fn from_path(path: &str) -> Option<Resource> {
        Resource::ALL.into_iter().find(|r| r.path() == path)
    }
}

/// The loaded envelope of any resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResourceData {
    Products(ProductsData),
    Capabilities(CapabilitiesData),
    Teams(TeamsData),
    Architecture(Architecture),
    Pipelines(PipelinesData),
    Valuestreams(ValuestreamsData),
}

impl ResourceData {
    pub fn resource(&self) -> Resource {
        match self {
            ResourceData::Products(_) => Resource::Products,
            ResourceData::Capabilities(_) => Resource::Capabilities,
            ResourceData::Teams(_) => Resource::Teams,
            ResourceData::Architecture(_) => Resource::Architecture,
            ResourceData::Pipelines(_) => Resource::Pipelines,
            ResourceData::Valuestreams(_) => Resource::Valuestreams,
        }
    }

    /// Number of top-level entries. Architecture counts its components.
    pub fn item_count(&self) -> usize {
        match self {
            ResourceData::Products(d) => d.products.len(),
            ResourceData::Capabilities(d) => d.capabilities.len(),
            ResourceData::Teams(d) => d.teams.len(),
            ResourceData::Architecture(d) => d.software_system.components.len(),
            ResourceData::Pipelines(d) => d.pipelines.len(),
            ResourceData::Valuestreams(d) => d.valuestreams.len(),
        }
    }
}

impl DataSource {
    /// Load a resource through its dedicated loader.
    pub fn load(&self, resource: Resource) -> LoadResult<ResourceData> {
        Ok(match resource {
            Resource::Products => ResourceData::Products(self.load_products()?),
            Resource::Capabilities => ResourceData::Capabilities(self.load_capabilities()?),
            Resource::Teams => ResourceData::Teams(self.load_teams()?),
            Resource::Architecture => ResourceData::Architecture(self.load_architecture()?),
            Resource::Pipelines => ResourceData::Pipelines(self.load_pipelines()?),
            Resource::Valuestreams => ResourceData::Valuestreams(self.load_valuestreams()?),
        })
    }

    /// Load whichever resource is served at `path`.
    pub fn load_for_path(&self, path: &str) -> LoadResult<ResourceData> {
        let resource =
            Resource::from_path(path).ok_or_else(|| LoadError::UnknownPath(path.to_string()))?;
        self.load(resource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn source_with(files: &[(&str, &str)]) -> (TempDir, DataSource) {
        let dir = tempfile::tempdir().unwrap();
        for (name, body) in files {
            fs::write(dir.path().join(name), body).unwrap();
        }
        let source = DataSource::new(dir.path());
        (dir, source)
    }

    #[test]
    fn test_from_path_exact_match() {
        for resource in Resource::ALL {
            assert_eq!(Resource::from_path(resource.path()), Some(resource));
        }
        assert_eq!(Resource::from_path("/products/"), None);
        assert_eq!(Resource::from_path("/Products"), None);
        assert_eq!(Resource::from_path("/products?x=1"), None);
        assert_eq!(Resource::from_path("products"), None);
    }

    #[test]
    fn test_dispatch_matches_direct_loader() {
        let (_dir, source) = source_with(&[(
            "products.json",
            r#"{"products":[{"id":"p1","name":"Ledger","description":"Books"}]}"#,
        )]);

        let direct = source.load_products().unwrap();
        let dispatched = source.load_for_path("/products").unwrap();
        assert_eq!(dispatched, ResourceData::Products(direct));
        assert_eq!(dispatched.resource(), Resource::Products);
        assert_eq!(dispatched.item_count(), 1);
    }

    #[test]
    fn test_unknown_path_names_the_path() {
        let (_dir, source) = source_with(&[]);
        let err = source.load_for_path("/unknown").unwrap_err();
        assert!(matches!(err, LoadError::UnknownPath(_)));
        assert!(err.to_string().contains("/unknown"));
    }

    #[test]
    fn test_dispatch_propagates_loader_error() {
        let (_dir, source) = source_with(&[]);
        let err = source.load_for_path("/teams").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn test_dispatch_pipelines_missing_is_empty() {
        let (_dir, source) = source_with(&[]);
        let data = source.load_for_path("/pipelines").unwrap();
        assert_eq!(data, ResourceData::Pipelines(PipelinesData::default()));
    }

    #[test]
    fn test_untagged_serialization_is_envelope() {
        let (_dir, source) = source_with(&[(
            "architecture.json",
            r#"{"software-system":{"components":[{"name":"gw","description":"edge"}]}}"#,
        )]);
        let data = source.load_for_path("/architecture").unwrap();
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json["software-system"]["components"][0]["name"], "gw");
        assert_eq!(data.item_count(), 1);
    }
}
