pub mod reqwest_executor;

use std::sync::Arc;
use thiserror::Error;

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
pub const TURTLE_CONTENT_TYPE: &str = "text/turtle";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
    Head,
}

/// One outgoing request. Built per call and consumed by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub content_type: Option<&'static str>,
    pub body: String,
}

impl HttpRequest {
    /// Form-encoded POST with the given fields, in order.
    pub fn form(url: &str, fields: &[(&str, &str)]) -> HttpRequest {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(fields)
            .finish();
        HttpRequest {
            method: HttpMethod::Post,
            url: url.to_string(),
            content_type: Some(FORM_CONTENT_TYPE),
            body,
        }
    }

    pub fn turtle(url: &str, document: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Post,
            url: url.to_string(),
            content_type: Some(TURTLE_CONTENT_TYPE),
            body: document,
        }
    }

    pub fn head(url: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Head,
            url: url.to_string(),
            content_type: None,
            body: String::new(),
        }
    }

    /// Decoded value of a form field, if this is a form request.
    pub fn form_field(&self, name: &str) -> Option<String> {
        if self.content_type != Some(FORM_CONTENT_TYPE) {
            return None;
        }
        url::form_urlencoded::parse(self.body.as_bytes())
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.into_owned())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportErrorCode {
    /// The server answered with a non-success status.
    Status(u16),
    Connect,
    Timeout,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    pub code: TransportErrorCode,
    pub message: String,
}

impl TransportError {
    pub fn new(code: TransportErrorCode, message: impl Into<String>) -> TransportError {
        TransportError {
            code,
            message: message.into(),
        }
    }

    pub fn status(status: u16, message: impl Into<String>) -> TransportError {
        TransportError::new(TransportErrorCode::Status(status), message)
    }
}

/// Performs exactly one blocking HTTP exchange.
///
/// Any non-success outcome, including non-2xx statuses and timeouts, is
/// reported as a [`TransportError`].
pub trait HttpExecutor: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<(), TransportError>;
}

impl<T: HttpExecutor + ?Sized> HttpExecutor for Arc<T> {
    fn execute(&self, request: HttpRequest) -> Result<(), TransportError> {
        (**self).execute(request)
    }
}

impl<T: HttpExecutor + ?Sized> HttpExecutor for Box<T> {
    fn execute(&self, request: HttpRequest) -> Result<(), TransportError> {
        (**self).execute(request)
    }
}
