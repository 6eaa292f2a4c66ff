use crate::common::*;

#[doc = "Errors raised by the Elasticsearch helper functions."]
#[derive(Debug, ThisError)]
pub enum EsClientError {
    #[doc = "A helper was called before `initialize_es_clients` stored a client set."]
    #[error("elasticsearch clients are not initialized; call initialize_es_clients() first")]
    Uninitialized,

    #[doc = "The connection parameters are unusable. Raised before any network call."]
    #[error("invalid elasticsearch connection parameters: {0}")]
    InvalidConfiguration(String),

    #[doc = "The caller-supplied document cannot be written, e.g. it lacks a usable `id` field."]
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[doc = "The request never produced a usable response: connection refused, timeout, dns failure."]
    #[error("elasticsearch transport error: {0}")]
    Transport(#[from] elasticsearch::Error),

    #[doc = "Elasticsearch answered with a status code the helper does not treat as success."]
    #[error("unexpected elasticsearch response (status {status}): {reason}")]
    UnexpectedStatus { status: u16, reason: String },

    #[doc = "A settings or mapping file could not be read or parsed."]
    #[error("failed to load file '{path}': {source}")]
    FileLoad {
        path: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("elasticsearch client registry lock is poisoned")]
    RegistryPoisoned,
}
