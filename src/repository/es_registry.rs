use crate::common::*;

use crate::env_configuration::env_config::ELASTIC_INFO_PATH;
use crate::errors::EsClientError;
use crate::model::configs::elastic_config::*;
use crate::repository::es_blocking_repository::*;
use crate::repository::es_repository::*;
use crate::traits::repository::es_blocking_repository_trait::*;
use crate::traits::repository::es_repository_trait::*;
use crate::utils_modules::io_utils::*;

#[doc = "Client handles built from one `ElasticConfig`. Both views share the same transport."]
#[derive(Debug, Getters)]
#[getset(get = "pub")]
pub struct EsClientSet {
    async_client: Arc<EsRepositoryImpl>,
    blocking_client: Arc<EsBlockingRepositoryImpl<EsRepositoryImpl>>,
}

#[doc = "Process wide slot holding the current client set. Empty until `initialize_es_clients` runs; replaced wholesale on re-initialization."]
static ES_CLIENTS: once_lazy<RwLock<Option<Arc<EsClientSet>>>> =
    once_lazy::new(|| RwLock::new(None));

#[doc = "Function that builds both client handles from the given parameters and registers them globally."]
/// Calling this again replaces the previously registered handles; callers holding an
/// `Arc` from before the swap keep using the old connection.
///
/// # Arguments
/// * `config` - Connection parameters for the cluster
///
/// # Returns
/// * Result<(), EsClientError>
pub fn initialize_es_clients(config: ElasticConfig) -> Result<(), EsClientError> {
    let async_client: Arc<EsRepositoryImpl> = Arc::new(EsRepositoryImpl::new(config)?);
    let blocking_client: Arc<EsBlockingRepositoryImpl<EsRepositoryImpl>> =
        Arc::new(EsBlockingRepositoryImpl::new(Arc::clone(&async_client)));

    let client_set: Arc<EsClientSet> = Arc::new(EsClientSet {
        async_client,
        blocking_client,
    });

    let mut slot = match ES_CLIENTS.write() {
        Ok(slot) => slot,
        Err(e) => {
            error!(
                "[initialize_es_clients] Failed to take the registry write lock: {:?}",
                e
            );
            return Err(EsClientError::RegistryPoisoned);
        }
    };

    *slot = Some(client_set);
    info!("Elasticsearch clients initialized.");

    Ok(())
}

#[doc = "Function that reads the connection parameters from a toml file and registers the clients."]
pub fn initialize_es_clients_from_file(config_path: &str) -> Result<(), EsClientError> {
    let config: ElasticConfig =
        read_toml_from_file::<ElasticConfig>(config_path).map_err(|e| {
            EsClientError::InvalidConfiguration(format!(
                "[initialize_es_clients_from_file] '{}': {:?}",
                config_path, e
            ))
        })?;

    initialize_es_clients(config)
}

#[doc = "Function that registers the clients from the file named by the `ELASTIC_INFO_PATH` environment variable."]
pub fn initialize_es_clients_from_env() -> Result<(), EsClientError> {
    initialize_es_clients_from_file(&ELASTIC_INFO_PATH)
}

fn current_client_set() -> Result<Arc<EsClientSet>, EsClientError> {
    let slot = match ES_CLIENTS.read() {
        Ok(slot) => slot,
        Err(e) => {
            error!(
                "[current_client_set] Failed to take the registry read lock: {:?}",
                e
            );
            return Err(EsClientError::RegistryPoisoned);
        }
    };

    slot.as_ref().cloned().ok_or(EsClientError::Uninitialized)
}

#[doc = "Function that returns the registered asynchronous client handle."]
/// # Returns
/// * Result<Arc<EsRepositoryImpl>, EsClientError> - `Uninitialized` before the first `initialize_es_clients` call.
pub fn get_es_client() -> Result<Arc<EsRepositoryImpl>, EsClientError> {
    let client_set: Arc<EsClientSet> = current_client_set()?;
    Ok(Arc::clone(client_set.async_client()))
}

#[doc = "Function that returns the registered blocking client handle."]
pub fn get_es_blocking_client(
) -> Result<Arc<EsBlockingRepositoryImpl<EsRepositoryImpl>>, EsClientError> {
    let client_set: Arc<EsClientSet> = current_client_set()?;
    Ok(Arc::clone(client_set.blocking_client()))
}

#[doc = "True once `initialize_es_clients` has registered a client set."]
pub fn is_initialized() -> bool {
    ES_CLIENTS
        .read()
        .map(|slot| slot.is_some())
        .unwrap_or(false)
}

#[doc = "Function that tests the connection to Elasticsearch and logs the outcome."]
/// # Returns
/// * Result<bool, EsClientError> - true when the cluster answered with a success status. Transport failures are errors, not `false`.
pub async fn test_es_connection() -> Result<bool, EsClientError> {
    let client: Arc<EsRepositoryImpl> = get_es_client()?;

    match client.ping().await {
        Ok(true) => {
            info!("Successfully connected to Elasticsearch.");
            Ok(true)
        }
        Ok(false) => {
            warn!("Failed to connect to Elasticsearch.");
            Ok(false)
        }
        Err(e) => {
            error!("An error occurred while connecting to Elasticsearch: {}", e);
            Err(e)
        }
    }
}

#[doc = "Blocking twin of `test_es_connection`."]
pub fn test_es_connection_blocking() -> Result<bool, EsClientError> {
    let client: Arc<EsBlockingRepositoryImpl<EsRepositoryImpl>> = get_es_blocking_client()?;

    match client.ping() {
        Ok(true) => {
            info!("Successfully connected to Elasticsearch.");
            Ok(true)
        }
        Ok(false) => {
            warn!("Failed to connect to Elasticsearch.");
            Ok(false)
        }
        Err(e) => {
            error!("An error occurred while connecting to Elasticsearch: {}", e);
            Err(e)
        }
    }
}
