use crate::http::{TransportError, TransportErrorCode};
use crate::outcome::{Diagnostic, FailureKind};
use log::warn;

/// Turns a failed HTTP exchange into a [`Diagnostic`].
pub struct ErrorMapper;

impl ErrorMapper {
    pub fn classify(error: &TransportError) -> FailureKind {
        match error.code {
            TransportErrorCode::Status(400) => FailureKind::MalformedRequest,
            TransportErrorCode::Status(404) => FailureKind::EndpointNotFound,
            TransportErrorCode::Status(500) => FailureKind::Refused,
            TransportErrorCode::Status(code) => FailureKind::BadStatus(code),
            TransportErrorCode::Connect => FailureKind::Unreachable,
            TransportErrorCode::Timeout => FailureKind::TimedOut,
            TransportErrorCode::Other => FailureKind::Transport,
        }
    }

    pub fn map(endpoint: &str, statement: &str, error: &TransportError) -> Diagnostic {
        let kind = ErrorMapper::classify(error);
        let description = if error.message.is_empty() {
            kind.to_string()
        } else {
            format!("{}: {}", kind, error.message)
        };
        warn!("SPARQL request to {} failed: {}", endpoint, description);
        Diagnostic {
            endpoint: endpoint.to_string(),
            statement: statement.to_string(),
            kind,
            description,
        }
    }
}
