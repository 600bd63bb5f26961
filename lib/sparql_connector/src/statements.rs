//! The four update statement shapes, without prefix prolog.
//!
//! Patterns and triples are inserted verbatim. Callers are responsible for
//! escaping, nothing here parses or validates RDF syntax.

pub fn delete(graph: Option<&str>, delete_pattern: &str, where_pattern: &str) -> String {
    format!(
        "DELETE {}{{ {} }} WHERE {{ {} }}",
        graph_clause("FROM", graph),
        delete_pattern,
        where_pattern
    )
}

/// A single SPARUL `MODIFY`, so that delete and insert travel in one request.
pub fn modify(
    graph: Option<&str>,
    insert_pattern: &str,
    delete_pattern: &str,
    where_pattern: &str,
) -> String {
    format!(
        "MODIFY {}DELETE {{ {} }} INSERT {{ {} }} WHERE {{ {} }}",
        graph_clause("GRAPH", graph),
        delete_pattern,
        insert_pattern,
        where_pattern
    )
}

pub fn insert_data(graph: Option<&str>, triples: &str) -> String {
    format!(
        "INSERT DATA {}{{ {} }}",
        graph_clause("INTO GRAPH", graph),
        triples
    )
}

pub fn delete_data(graph: Option<&str>, triples: &str) -> String {
    format!(
        "DELETE DATA {}{{ {} }}",
        graph_clause("FROM GRAPH", graph),
        triples
    )
}

fn graph_clause(keyword: &str, graph: Option<&str>) -> String {
    match graph {
        Some(g) if !g.is_empty() => format!("{} <{}> ", keyword, g),
        _ => String::new(),
    }
}
