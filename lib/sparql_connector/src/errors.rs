use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No SPARQL update endpoint specified")]
    MissingUpdateEndpoint,
    #[error("No SPARQL data endpoint specified")]
    MissingDataEndpoint,
    #[error("Unknown SPARQL database dialect `{0}`")]
    UnknownDialect(String),
    #[error("Error reading endpoint config file `{0}`")]
    ReadConfigFile(#[from] std::io::Error),
    #[error("Error deserializing endpoint config from JSON `{0}`")]
    ParseConfig(#[from] serde_json::Error),
    #[error("Error creating HTTP client `{0}`")]
    HttpClient(String),
}

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error(transparent)]
    Configuration(#[from] ConfigError),
}
