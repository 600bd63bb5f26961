use crate::dialect::WireDialect;
use crate::errors::ConfigError;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_WIKI_NAMESPACE: &str = "http://localhost/wiki/Special:URIResolver/";
const PROPERTY_NAMESPACE_SUFFIX: &str = "Property-3A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointKind {
    Query,
    Update,
    Data,
}

/// Where the triple store lives and how to talk to it.
///
/// Built once from site configuration and shared read-only by every
/// connector call. Optional endpoints that are set to the empty string are
/// treated as absent.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EndpointConfig {
    pub query_endpoint: String,
    pub update_endpoint: String,
    #[serde(default)]
    pub data_endpoint: Option<String>,
    #[serde(default)]
    pub default_graph: Option<String>,
    #[serde(default = "default_wiki_namespace")]
    pub wiki_namespace: String,
    #[serde(default)]
    pub property_namespace: Option<String>,
    #[serde(default)]
    pub timeout_ms: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_dialect")]
    pub dialect: WireDialect,
}

impl EndpointConfig {
    pub fn new(query_endpoint: impl Into<String>, update_endpoint: impl Into<String>) -> Self {
        EndpointConfig {
            query_endpoint: query_endpoint.into(),
            update_endpoint: update_endpoint.into(),
            data_endpoint: None,
            default_graph: None,
            wiki_namespace: default_wiki_namespace(),
            property_namespace: None,
            timeout_ms: None,
            dialect: WireDialect::STANDARD,
        }
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path)?;
        let config = serde_json::from_reader(BufReader::new(file))?;
        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_data_endpoint(mut self, data_endpoint: impl Into<String>) -> Self {
        self.data_endpoint = Some(data_endpoint.into());
        self
    }

    pub fn with_default_graph(mut self, default_graph: impl Into<String>) -> Self {
        self.default_graph = Some(default_graph.into());
        self
    }

    pub fn with_wiki_namespace(mut self, wiki_namespace: impl Into<String>) -> Self {
        self.wiki_namespace = wiki_namespace.into();
        self
    }

    pub fn with_property_namespace(mut self, property_namespace: impl Into<String>) -> Self {
        self.property_namespace = Some(property_namespace.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        let ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        // Sub-millisecond timeouts round up rather than down to "no timeout".
        self.timeout_ms = Some(if ms == 0 && !timeout.is_zero() { 1 } else { ms });
        self
    }

    pub fn standard(query_endpoint: impl Into<String>, update_endpoint: impl Into<String>) -> Self {
        EndpointConfig::new(query_endpoint, update_endpoint).with_dialect(WireDialect::STANDARD)
    }

    /// Virtuoso takes updates on its query endpoint, so one URL serves both.
    pub fn virtuoso(endpoint: impl Into<String>) -> Self {
        let endpoint = endpoint.into();
        EndpointConfig::new(endpoint.clone(), endpoint).with_dialect(WireDialect::VIRTUOSO)
    }

    pub fn with_dialect(mut self, dialect: WireDialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn query_endpoint(&self) -> Option<&str> {
        non_empty(Some(&self.query_endpoint))
    }

    pub fn update_endpoint(&self) -> Option<&str> {
        non_empty(Some(&self.update_endpoint))
    }

    pub fn data_endpoint(&self) -> Option<&str> {
        non_empty(self.data_endpoint.as_ref())
    }

    pub fn endpoint(&self, kind: EndpointKind) -> Option<&str> {
        match kind {
            EndpointKind::Query => self.query_endpoint(),
            EndpointKind::Update => self.update_endpoint(),
            EndpointKind::Data => self.data_endpoint(),
        }
    }

    pub fn default_graph(&self) -> Option<&str> {
        non_empty(self.default_graph.as_ref())
    }

    pub fn property_namespace(&self) -> String {
        match non_empty(self.property_namespace.as_ref()) {
            Some(namespace) => namespace.to_string(),
            None => format!("{}{}", self.wiki_namespace, PROPERTY_NAMESPACE_SUFFIX),
        }
    }

    /// Request timeout. Zero means no timeout.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis)
    }
}

fn non_empty(s: Option<&String>) -> Option<&str> {
    s.map(|x| x.as_str()).filter(|x| !x.is_empty())
}

fn default_wiki_namespace() -> String {
    DEFAULT_WIKI_NAMESPACE.to_string()
}

fn deserialize_dialect<'de, D>(deserializer: D) -> Result<WireDialect, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}
