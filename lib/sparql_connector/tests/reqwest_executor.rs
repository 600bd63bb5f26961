mod common;

use rstest::*;
use sparql_connector::{
    EndpointConfig, FailureKind, HttpExecutor, HttpRequest, NamespaceMap, ReqwestExecutor,
    SparqlConnector, TransportErrorCode, WireDialect,
};
use std::sync::Arc;
use std::time::Duration;

use crate::common::{closed_endpoint, init_logger, serve_once, serve_silently, QUERY_ENDPOINT};

#[fixture]
fn use_logger() {
    init_logger()
}

#[rstest]
fn test_posts_form_encoded_update(use_logger: ()) {
    let (endpoint, server) = serve_once("204 No Content", "");
    let config = EndpointConfig::new(QUERY_ENDPOINT, endpoint.as_str());
    let connector = SparqlConnector::from_config(config).unwrap();

    let outcome = connector
        .delete_data("wiki:A a wiki:B .", &NamespaceMap::new())
        .unwrap();
    assert!(outcome.is_success());

    let captured = server.join().unwrap();
    assert_eq!(captured.request_line, "POST /sparql HTTP/1.1");
    assert_eq!(
        captured.content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert!(captured.body.starts_with("update=PREFIX+wiki%3A"));
    assert!(captured
        .body
        .ends_with("DELETE+DATA+%7B+wiki%3AA+a+wiki%3AB+.+%7D"));
}

#[rstest]
fn test_virtuoso_config_posts_query_field(use_logger: ()) {
    let (endpoint, server) = serve_once("200 OK", "");
    let config = EndpointConfig::new(endpoint.as_str(), endpoint.as_str())
        .with_dialect(WireDialect::VIRTUOSO)
        .with_default_graph("http://x/g");
    let connector = SparqlConnector::from_config(config).unwrap();
    assert_eq!(connector.dialect(), WireDialect::VIRTUOSO);

    let outcome = connector
        .delete("?s ?p ?o", "?s ?p ?o", &NamespaceMap::new())
        .unwrap();
    assert!(outcome.is_success());
    let captured = server.join().unwrap();
    assert!(captured.body.starts_with("query="));
}

#[rstest]
fn test_posts_raw_turtle_to_data_endpoint(use_logger: ()) {
    let (endpoint, server) = serve_once("201 Created", "");
    let config = EndpointConfig::new(QUERY_ENDPOINT, "http://127.0.0.1:1/update")
        .with_data_endpoint(endpoint.as_str());
    let connector = SparqlConnector::from_config(config).unwrap();

    let outcome = connector
        .insert_data("wiki:A a wiki:B .", &NamespaceMap::new())
        .unwrap();
    assert!(outcome.is_success());
    let captured = server.join().unwrap();
    assert_eq!(captured.content_type.as_deref(), Some("text/turtle"));
    assert!(captured.body.starts_with("@prefix wiki: <"));
    assert!(captured.body.ends_with("wiki:A a wiki:B ."));
}

#[rstest]
fn test_bad_request_becomes_malformed_diagnostic(use_logger: ()) {
    let (endpoint, server) = serve_once("400 Bad Request", "Parse error: unexpected token");
    let config = EndpointConfig::new(QUERY_ENDPOINT, endpoint.as_str());
    let connector = SparqlConnector::from_config(config).unwrap();

    let outcome = connector
        .delete_data("wiki:A a \"unterminated .", &NamespaceMap::new())
        .unwrap();
    server.join().unwrap();

    let diagnostic = outcome.diagnostic().unwrap();
    assert_eq!(diagnostic.kind, FailureKind::MalformedRequest);
    assert_eq!(diagnostic.endpoint, endpoint);
    assert!(diagnostic.description.contains("Parse error: unexpected token"));
    assert!(diagnostic.statement.ends_with("{ wiki:A a \"unterminated . }"));
}

#[rstest]
fn test_status_without_body_uses_status_text(use_logger: ()) {
    let (endpoint, server) = serve_once("503 Service Unavailable", "");
    let executor = ReqwestExecutor::new(None).unwrap();
    let error = executor
        .execute(HttpRequest::form(&endpoint, &[("update", "CLEAR ALL")]))
        .unwrap_err();
    server.join().unwrap();
    assert_eq!(error.code, TransportErrorCode::Status(503));
    assert_eq!(error.message, "503 Service Unavailable");
}

#[rstest]
fn test_unreachable_endpoint(use_logger: ()) {
    let endpoint = closed_endpoint();
    let executor = Arc::new(ReqwestExecutor::new(Some(Duration::from_secs(5))).unwrap());
    let config = Arc::new(EndpointConfig::new(QUERY_ENDPOINT, endpoint.as_str()));
    let connector = SparqlConnector::new(config, executor);

    let outcome = connector.execute("CLEAR ALL").unwrap();
    let diagnostic = outcome.diagnostic().unwrap();
    assert_eq!(diagnostic.kind, FailureKind::Unreachable);
    assert_eq!(diagnostic.statement, "CLEAR ALL");
}

#[rstest]
fn test_sub_second_timeout_against_healthy_endpoint(use_logger: ()) {
    let (endpoint, server) = serve_once("204 No Content", "");
    let config = EndpointConfig::new(QUERY_ENDPOINT, endpoint.as_str())
        .with_timeout(Duration::from_millis(500));
    assert_eq!(config.timeout(), Some(Duration::from_millis(500)));
    let connector = SparqlConnector::from_config(config).unwrap();

    let outcome = connector.execute("CLEAR ALL").unwrap();
    server.join().unwrap();
    assert!(outcome.is_success());
}

#[rstest]
fn test_zero_timeout_means_no_timeout(use_logger: ()) {
    let (endpoint, server) = serve_once("204 No Content", "");
    let json = format!(
        r#"{{"query_endpoint": "{q}", "update_endpoint": "{u}", "timeout_ms": 0}}"#,
        q = QUERY_ENDPOINT,
        u = endpoint
    );
    let config = EndpointConfig::from_json_str(&json).unwrap();
    assert_eq!(config.timeout(), None);
    let connector = SparqlConnector::from_config(config).unwrap();

    let outcome = connector.execute("CLEAR ALL").unwrap();
    server.join().unwrap();
    assert!(outcome.is_success());
}

#[rstest]
fn test_timeout(use_logger: ()) {
    let endpoint = serve_silently(Duration::from_secs(3));
    let config = EndpointConfig::new(QUERY_ENDPOINT, endpoint.as_str())
        .with_timeout(Duration::from_secs(1));
    let connector = SparqlConnector::from_config(config).unwrap();

    let outcome = connector.execute("CLEAR ALL").unwrap();
    assert_eq!(outcome.diagnostic().unwrap().kind, FailureKind::TimedOut);
}
