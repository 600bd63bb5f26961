use crate::config::EndpointConfig;
use std::collections::BTreeMap;

pub const SWIVT: &str = "http://semantic-mediawiki.org/swivt/1.0#";
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

pub const BUILTIN_PREFIXES: [&str; 7] = ["wiki", "swivt", "rdf", "owl", "rdfs", "property", "xsd"];

/// Prefix name to namespace IRI.
pub type NamespaceMap = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrologStyle {
    /// `PREFIX p: <iri>` lines atop a SPARQL statement.
    Sparql,
    /// `@prefix p: <iri> .` lines atop a Turtle document.
    Turtle,
}

/// Renders prefix headers from the builtin namespaces plus caller extras.
///
/// The builtin set is always rendered first and in a fixed order. An extra
/// prefix with a builtin name is dropped, the builtin IRI always wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRegistry {
    builtins: Vec<(&'static str, String)>,
}

impl PrefixRegistry {
    pub fn new(wiki_namespace: &str, property_namespace: &str) -> PrefixRegistry {
        let iris = [
            wiki_namespace,
            SWIVT,
            RDF,
            OWL,
            RDFS,
            property_namespace,
            XSD,
        ];
        let builtins = BUILTIN_PREFIXES
            .into_iter()
            .zip(iris)
            .map(|(prefix, iri)| (prefix, iri.to_string()))
            .collect();
        PrefixRegistry { builtins }
    }

    pub fn from_config(config: &EndpointConfig) -> PrefixRegistry {
        PrefixRegistry::new(&config.wiki_namespace, &config.property_namespace())
    }

    pub fn builtin_iri(&self, prefix: &str) -> Option<&str> {
        self.builtins
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, iri)| iri.as_str())
    }

    pub fn render_header(&self, extra: &NamespaceMap, style: PrologStyle) -> String {
        let mut header = String::new();
        let extras = extra
            .iter()
            .filter(|(prefix, _)| !BUILTIN_PREFIXES.contains(&prefix.as_str()))
            .map(|(prefix, iri)| (prefix.as_str(), iri.as_str()));
        for (prefix, iri) in self
            .builtins
            .iter()
            .map(|(p, iri)| (*p, iri.as_str()))
            .chain(extras)
        {
            let line = match style {
                PrologStyle::Sparql => format!("PREFIX {prefix}: <{iri}>\n"),
                PrologStyle::Turtle => format!("@prefix {prefix}: <{iri}> .\n"),
            };
            header.push_str(&line);
        }
        header
    }
}
