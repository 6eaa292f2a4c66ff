//! Synchronous and asynchronous helper functions around an Elasticsearch
//! client connection.
//!
//! A typed [`ElasticConfig`] describes one cluster. [`EsRepositoryImpl`]
//! wraps the official [`elasticsearch`] client with document and index
//! helpers, and [`EsBlockingRepositoryImpl`] mirrors the same surface for
//! callers without an async runtime. Programs that want a single
//! process-wide handle pair register one with [`initialize_es_clients`]
//! and fetch it back with [`get_es_client`] / [`get_es_blocking_client`].
//!
//! ```rust,no_run
//! use elastic_utils_rust::{
//!     get_es_client, initialize_es_clients, test_es_connection, ElasticConfig, EsRepository,
//! };
//! use serde_json::json;
//!
//! # async fn demo() -> Result<(), elastic_utils_rust::EsClientError> {
//! initialize_es_clients(ElasticConfig::single_node("localhost", 9200))?;
//!
//! if test_es_connection().await? {
//!     let client = get_es_client()?;
//!     client.add_document("news", &json!({ "id": 1, "title": "hello" })).await?;
//! }
//! # Ok(())
//! # }
//! ```

mod common;

pub mod env_configuration;
pub mod errors;
pub mod model;
pub mod repository;
pub mod traits;
pub mod utils_modules;

pub use errors::EsClientError;

pub use model::configs::elastic_config::{
    ElasticConfig, ElasticConfigBuilder, ElasticCredentials, ElasticHost, ElasticScheme,
};
pub use model::elastic_dto::latest_doc_info::LatestDocInfo;
pub use model::elastic_dto::search_response::{
    CountResponse, GetDocResponse, HitsWrapper, SearchHit, SearchResponse,
};
pub use model::elastic_dto::write_response::{
    DocWriteResponse, DocWriteResult, IndexCreateStatus, SyncStatus,
};

pub use repository::es_blocking_repository::EsBlockingRepositoryImpl;
pub use repository::es_registry::{
    get_es_blocking_client, get_es_client, initialize_es_clients, initialize_es_clients_from_env,
    initialize_es_clients_from_file, is_initialized, test_es_connection,
    test_es_connection_blocking, EsClientSet,
};
pub use repository::es_repository::EsRepositoryImpl;

pub use traits::repository::es_blocking_repository_trait::EsBlockingRepository;
pub use traits::repository::es_repository_trait::EsRepository;
