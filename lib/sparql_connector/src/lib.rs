pub mod config;
pub mod connector;
pub mod dialect;
pub mod error_mapping;
pub mod errors;
pub mod http;
pub mod namespaces;
pub mod outcome;
pub mod statements;

pub use config::{EndpointConfig, EndpointKind};
pub use connector::SparqlConnector;
pub use dialect::{DataUpload, WireDialect};
pub use errors::{ConfigError, ConnectorError};
pub use http::reqwest_executor::ReqwestExecutor;
pub use http::{HttpExecutor, HttpMethod, HttpRequest, TransportError, TransportErrorCode};
pub use namespaces::{NamespaceMap, PrefixRegistry, PrologStyle};
pub use outcome::{Diagnostic, FailureKind, OutcomeReport, UpdateOutcome};
