use super::{HttpExecutor, HttpMethod, HttpRequest, TransportError, TransportErrorCode};
use crate::config::EndpointConfig;
use crate::errors::ConfigError;
use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use std::time::Duration;

const USER_AGENT_VALUE: &str = concat!("sparql_connector/", env!("CARGO_PKG_VERSION"));

/// Blocking [`HttpExecutor`] on top of a shared reqwest client.
#[derive(Debug, Clone)]
pub struct ReqwestExecutor {
    client: Client,
}

impl ReqwestExecutor {
    pub fn new(timeout: Option<Duration>) -> Result<ReqwestExecutor, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|x| ConfigError::HttpClient(x.to_string()))?;
        Ok(ReqwestExecutor { client })
    }

    pub fn from_config(config: &EndpointConfig) -> Result<ReqwestExecutor, ConfigError> {
        ReqwestExecutor::new(config.timeout())
    }
}

impl HttpExecutor for ReqwestExecutor {
    fn execute(&self, request: HttpRequest) -> Result<(), TransportError> {
        let HttpRequest {
            method,
            url,
            content_type,
            body,
        } = request;
        let mut builder = match method {
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Head => self.client.head(&url),
        }
        .header(USER_AGENT, USER_AGENT_VALUE);
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type).body(body);
        }

        match builder.send() {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    Ok(())
                } else {
                    let text = response.text().unwrap_or_default();
                    let message = if text.trim().is_empty() {
                        status.to_string()
                    } else {
                        text
                    };
                    Err(TransportError::status(status.as_u16(), message))
                }
            }
            Err(error) => Err(map_reqwest_error(&error)),
        }
    }
}

fn map_reqwest_error(error: &reqwest::Error) -> TransportError {
    let code = if error.is_timeout() {
        TransportErrorCode::Timeout
    } else if error.is_connect() {
        TransportErrorCode::Connect
    } else if let Some(status) = error.status() {
        TransportErrorCode::Status(status.as_u16())
    } else {
        TransportErrorCode::Other
    };
    TransportError::new(code, error.to_string())
}
