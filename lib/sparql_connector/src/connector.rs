use crate::config::{EndpointConfig, EndpointKind};
use crate::dialect::{DataUpload, WireDialect, TURTLE_MIME_TYPE};
use crate::error_mapping::ErrorMapper;
use crate::errors::{ConfigError, ConnectorError};
use crate::http::reqwest_executor::ReqwestExecutor;
use crate::http::{HttpExecutor, HttpRequest, TransportErrorCode};
use crate::namespaces::{NamespaceMap, PrefixRegistry, PrologStyle};
use crate::outcome::UpdateOutcome;
use crate::statements;
use log::{debug, info};
use std::sync::Arc;

/// Synchronizes triples with a remote store over the SPARQL protocol.
///
/// Every operation performs at most one blocking HTTP request. A missing
/// endpoint is reported as `Err` before any I/O; every remote failure comes
/// back as a failed [`UpdateOutcome`].
///
/// The wire dialect is read from [`EndpointConfig::dialect`], so the
/// configuration is the only place it is decided.
pub struct SparqlConnector<E: HttpExecutor = ReqwestExecutor> {
    config: Arc<EndpointConfig>,
    prefixes: PrefixRegistry,
    executor: E,
}

impl SparqlConnector<ReqwestExecutor> {
    /// Connector with a reqwest client, speaking the configured dialect.
    pub fn from_config(config: EndpointConfig) -> Result<Self, ConnectorError> {
        let executor = ReqwestExecutor::from_config(&config)?;
        Ok(SparqlConnector::new(Arc::new(config), executor))
    }
}

impl<E: HttpExecutor> SparqlConnector<E> {
    pub fn new(config: Arc<EndpointConfig>, executor: E) -> Self {
        info!(
            "Created {} SPARQL connector for update endpoint `{}`",
            config.dialect, config.update_endpoint
        );
        let prefixes = PrefixRegistry::from_config(&config);
        SparqlConnector {
            config,
            prefixes,
            executor,
        }
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    pub fn dialect(&self) -> WireDialect {
        self.config.dialect
    }

    pub fn prefixes(&self) -> &PrefixRegistry {
        &self.prefixes
    }

    pub fn delete(
        &self,
        delete_pattern: &str,
        where_pattern: &str,
        extra_namespaces: &NamespaceMap,
    ) -> Result<UpdateOutcome, ConnectorError> {
        let statement = self.prolog(extra_namespaces)
            + &statements::delete(self.config.default_graph(), delete_pattern, where_pattern);
        self.execute(&statement)
    }

    /// Replaces matching triples in one request.
    ///
    /// Sending one `MODIFY` rather than a delete followed by an insert means a
    /// dropped connection can never leave only the delete applied.
    pub fn insert_delete(
        &self,
        insert_pattern: &str,
        delete_pattern: &str,
        where_pattern: &str,
        extra_namespaces: &NamespaceMap,
    ) -> Result<UpdateOutcome, ConnectorError> {
        let statement = self.prolog(extra_namespaces)
            + &statements::modify(
                self.config.default_graph(),
                insert_pattern,
                delete_pattern,
                where_pattern,
            );
        self.execute(&statement)
    }

    /// Inserts ground triples.
    ///
    /// With a data endpoint the triples go there as a Turtle document,
    /// otherwise they are wrapped in `INSERT DATA` and sent to the update
    /// endpoint.
    pub fn insert_data(
        &self,
        triples: &str,
        extra_namespaces: &NamespaceMap,
    ) -> Result<UpdateOutcome, ConnectorError> {
        if self.config.data_endpoint().is_some() {
            let document = self
                .prefixes
                .render_header(extra_namespaces, PrologStyle::Turtle)
                + triples;
            return self.post_data(&document);
        }

        let statement = self.prolog(extra_namespaces)
            + &statements::insert_data(self.config.default_graph(), triples);
        self.execute(&statement)
    }

    pub fn delete_data(
        &self,
        triples: &str,
        extra_namespaces: &NamespaceMap,
    ) -> Result<UpdateOutcome, ConnectorError> {
        let statement = self.prolog(extra_namespaces)
            + &statements::delete_data(self.config.default_graph(), triples);
        self.execute(&statement)
    }

    /// Posts a complete update statement to the update endpoint.
    pub fn execute(&self, statement: &str) -> Result<UpdateOutcome, ConnectorError> {
        let endpoint = self
            .config
            .update_endpoint()
            .ok_or(ConfigError::MissingUpdateEndpoint)?;
        let request = HttpRequest::form(endpoint, &[(self.dialect().update_parameter, statement)]);
        Ok(self.send(endpoint, statement, request))
    }

    /// Posts a Turtle document to the data endpoint.
    pub fn post_data(&self, document: &str) -> Result<UpdateOutcome, ConnectorError> {
        let endpoint = self
            .config
            .data_endpoint()
            .ok_or(ConfigError::MissingDataEndpoint)?;
        let request = match self.dialect().data_upload {
            DataUpload::Form {
                data_parameter,
                graph_parameter,
                mime_type_parameter,
            } => {
                let mut fields = vec![(data_parameter, document)];
                if let Some(graph) = self.config.default_graph() {
                    fields.push((graph_parameter, graph));
                }
                fields.push((mime_type_parameter, TURTLE_MIME_TYPE));
                HttpRequest::form(endpoint, &fields)
            }
            DataUpload::RawDocument => {
                HttpRequest::turtle(endpoint, document.to_string())
            }
        };
        Ok(self.send(endpoint, document, request))
    }

    /// Checks whether an endpoint answers at all.
    ///
    /// Any HTTP answer below 500 other than 404 counts as alive, since many
    /// endpoints reject a bare request without a query.
    pub fn ping(&self, kind: EndpointKind) -> bool {
        let Some(endpoint) = self.config.endpoint(kind) else {
            debug!("Not pinging unconfigured {:?} endpoint", kind);
            return false;
        };
        let alive = match self.executor.execute(HttpRequest::head(endpoint)) {
            Ok(()) => true,
            Err(error) => match error.code {
                TransportErrorCode::Status(code) => code != 404 && code < 500,
                _ => false,
            },
        };
        debug!("Ping {:?} endpoint {}: alive={}", kind, endpoint, alive);
        alive
    }

    fn prolog(&self, extra_namespaces: &NamespaceMap) -> String {
        self.prefixes
            .render_header(extra_namespaces, PrologStyle::Sparql)
    }

    fn send(&self, endpoint: &str, sent: &str, request: HttpRequest) -> UpdateOutcome {
        debug!(
            "Posting to {} endpoint {}:\n{}",
            self.dialect(), endpoint, sent
        );
        match self.executor.execute(request) {
            Ok(()) => UpdateOutcome::success(),
            Err(error) => UpdateOutcome::failure(ErrorMapper::map(endpoint, sent, &error)),
        }
    }
}
