use crate::error::{DocsError, DocsResult};
use crate::models::{ApiDocumentation, EndpointDescriptor};
use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;

const BUILTIN_REGISTRY: &str = include_str!("../../data/endpoints.json");

/// Label used for endpoints declared without a group.
pub const DEFAULT_GROUP: &str = "General";

/// Immutable, ordered collection of documented endpoints.
#[derive(Debug, Clone)]
pub struct Registry {
    title: String,
    base_url: String,
    endpoints: Vec<EndpointDescriptor>,
    by_id: HashMap<String, usize>,
}

/// One sidebar section: a group label and its endpoints in declaration order.
#[derive(Debug)]
pub struct NavGroup<'a> {
    pub label: &'a str,
    pub endpoints: Vec<&'a EndpointDescriptor>,
}

impl Registry {
    pub fn new(
        title: impl Into<String>,
        base_url: impl Into<String>,
        endpoints: Vec<EndpointDescriptor>,
    ) -> Self {
        let mut by_id = HashMap::with_capacity(endpoints.len());
        for (index, endpoint) in endpoints.iter().enumerate() {
            // First declaration wins; duplicates surface through `validate`.
            by_id.entry(endpoint.id.clone()).or_insert(index);
        }

        Self {
            title: title.into(),
            base_url: base_url.into(),
            endpoints,
            by_id,
        }
    }

    pub fn from_documentation(documentation: ApiDocumentation) -> Self {
        Self::new(
            documentation.title,
            documentation.base_url,
            documentation.endpoints,
        )
    }

    pub fn from_json(json: &str) -> DocsResult<Self> {
        let documentation: ApiDocumentation = serde_json::from_str(json)?;
        tracing::debug!(
            endpoints = documentation.endpoints.len(),
            "Parsed registry document"
        );
        Ok(Self::from_documentation(documentation))
    }

    pub fn load(path: &Path) -> DocsResult<Self> {
        tracing::info!("Loading registry from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The registry compiled into the binary.
    pub fn builtin() -> DocsResult<Self> {
        Self::from_json(BUILTIN_REGISTRY)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn endpoints(&self) -> impl Iterator<Item = &EndpointDescriptor> {
        self.endpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&EndpointDescriptor> {
        self.by_id.get(id).map(|&index| &self.endpoints[index])
    }

    pub fn lookup(&self, id: &str) -> DocsResult<&EndpointDescriptor> {
        self.get(id).ok_or_else(|| DocsError::EndpointNotFound { id: id.to_string() })
    }

    /// Groups endpoints for the sidebar, keeping first-appearance order of groups.
    pub fn navigation(&self) -> Vec<NavGroup<'_>> {
        let mut groups: IndexMap<&str, Vec<&EndpointDescriptor>> = IndexMap::new();
        for endpoint in &self.endpoints {
            let label = match endpoint.group.trim() {
                "" => DEFAULT_GROUP,
                label => label,
            };
            groups.entry(label).or_default().push(endpoint);
        }

        groups
            .into_iter()
            .map(|(label, endpoints)| NavGroup { label, endpoints })
            .collect()
    }
}
