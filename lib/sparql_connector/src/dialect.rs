use crate::errors::ConfigError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

pub const TURTLE_MIME_TYPE: &str = "application/x-turtle";

/// How a bulk insert reaches the data endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataUpload {
    /// POST the Turtle document as the request body.
    RawDocument,
    /// POST the Turtle document as a form field next to the target graph.
    Form {
        data_parameter: &'static str,
        graph_parameter: &'static str,
        mime_type_parameter: &'static str,
    },
}

/// Wire-level conventions of one triple store backend.
///
/// Statement construction is the same for every dialect; a dialect only
/// decides how a finished statement or Turtle document is posted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WireDialect {
    pub name: &'static str,
    pub update_parameter: &'static str,
    pub data_upload: DataUpload,
}

impl WireDialect {
    /// SPARQL 1.1 Protocol: updates are posted in the `update` field.
    pub const STANDARD: WireDialect = WireDialect {
        name: "standard",
        update_parameter: "update",
        data_upload: DataUpload::RawDocument,
    };

    /// Virtuoso only speaks SPARUL and only accepts updates through the
    /// `query` field of its query endpoint, so the update endpoint usually
    /// equals the query endpoint.
    ///
    /// Known backend limitations, surfaced only when Virtuoso answers with an
    /// HTTP error:
    /// - comparisons on numeric literals (including dates) may miss results
    ///   in later queries,
    /// - some inserts with unusual character content fail,
    /// - `xsd:date` values with negative years are rejected.
    ///
    /// When Virtuoso accepts a request but drops or mis-stores part of it,
    /// nothing at this layer can notice.
    pub const VIRTUOSO: WireDialect = WireDialect {
        name: "virtuoso",
        update_parameter: "query",
        data_upload: DataUpload::RawDocument,
    };

    /// 4store accepts standard updates but its data endpoint wants a form.
    pub const FOUR_STORE: WireDialect = WireDialect {
        name: "4store",
        update_parameter: "update",
        data_upload: DataUpload::Form {
            data_parameter: "data",
            graph_parameter: "graph",
            mime_type_parameter: "mime-type",
        },
    };

    pub fn all() -> [WireDialect; 3] {
        [
            WireDialect::STANDARD,
            WireDialect::VIRTUOSO,
            WireDialect::FOUR_STORE,
        ]
    }
}

impl Default for WireDialect {
    fn default() -> Self {
        WireDialect::STANDARD
    }
}

impl Display for WireDialect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl FromStr for WireDialect {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowercase = s.trim().to_lowercase();
        match lowercase.as_str() {
            "" | "standard" | "generic" => Ok(WireDialect::STANDARD),
            "virtuoso" => Ok(WireDialect::VIRTUOSO),
            "4store" | "fourstore" => Ok(WireDialect::FOUR_STORE),
            _ => Err(ConfigError::UnknownDialect(s.to_string())),
        }
    }
}
