use crate::common::*;

use crate::errors::EsClientError;
use crate::model::configs::elastic_config::*;
use crate::model::elastic_dto::latest_doc_info::*;
use crate::model::elastic_dto::search_response::*;
use crate::model::elastic_dto::write_response::*;

use crate::utils_modules::io_utils::*;
use crate::utils_modules::json_utils::*;

use crate::traits::repository::es_repository_trait::*;

#[derive(Debug, Getters, Clone)]
#[getset(get = "pub")]
pub struct EsRepositoryImpl {
    pub es_client: Elasticsearch,
    pub config: ElasticConfig,
    pub hosts: Vec<String>,
}

impl EsRepositoryImpl {
    #[doc = "Elasticsearch connection constructor. Validates the parameters and builds the transport; no network call is made here."]
    /// # Arguments
    /// * `config` - Connection parameters for one cluster
    ///
    /// # Returns
    /// * Result<Self, EsClientError>
    pub fn new(config: ElasticConfig) -> Result<Self, EsClientError> {
        config.validate()?;

        let es_client: Elasticsearch = Self::create_es_conn_pool(&config)?;
        let hosts: Vec<String> = config.hosts().iter().map(|host| host.address()).collect();

        Ok(Self {
            es_client,
            config,
            hosts,
        })
    }

    #[doc = "Function that creates an Elasticsearch connection pool."]
    fn create_es_conn_pool(config: &ElasticConfig) -> Result<Elasticsearch, EsClientError> {
        let cluster_urls: Vec<Url> = config.node_urls()?;

        /* Using MultiNodeConnectionPool */
        let conn_pool: MultiNodeConnectionPool =
            MultiNodeConnectionPool::round_robin(cluster_urls, None);

        let mut builder: TransportBuilder =
            TransportBuilder::new(conn_pool).timeout(config.timeout());

        /* Authentication */
        if let Some(credentials) = config.credentials() {
            builder = builder.auth(EsCredentials::Basic(
                credentials.username().to_string(),
                credentials.password().to_string(),
            ));
        }

        let transport: EsTransport = builder.build().map_err(|e| {
            EsClientError::InvalidConfiguration(format!(
                "[EsRepositoryImpl::create_es_conn_pool] {:?}",
                e
            ))
        })?;

        Ok(Elasticsearch::new(transport))
    }

    #[doc = "Helper function to check the connection status of a single node."]
    /// # Arguments
    /// * `url` - Host address to check
    ///
    /// # Returns
    /// * bool - connection success status
    async fn check_single_node_connection(url: Url) -> bool {
        match Client::builder().timeout(Duration::from_secs(5)).build() {
            Ok(client) => match client.get(url).send().await {
                Ok(response) => response.status().is_success(),
                Err(_) => false,
            },
            Err(_) => false,
        }
    }

    #[doc = "Function that builds the probe url of a node, embedding credentials when present."]
    fn build_probe_url(&self, host: &ElasticHost) -> Result<Url, EsClientError> {
        let url: String = match self.config.credentials() {
            Some(credentials) => format!(
                "{}://{}:{}@{}:{}",
                host.scheme(),
                credentials.username(),
                credentials.password(),
                host.host(),
                host.port()
            ),
            None => host.address(),
        };

        Url::parse(&url).map_err(|e| {
            EsClientError::InvalidConfiguration(format!(
                "[EsRepositoryImpl::build_probe_url] invalid url: {}",
                e
            ))
        })
    }
}

#[doc = "Pulls the id a document wants to be stored under out of its `id` field."]
fn extract_doc_id(document: &Value) -> Result<String, EsClientError> {
    match document.get("id") {
        Some(Value::String(id)) if !id.is_empty() => Ok(id.clone()),
        Some(Value::Number(id)) => Ok(id.to_string()),
        Some(Value::String(_)) => Err(EsClientError::InvalidDocument(
            "document 'id' field is empty".to_string(),
        )),
        Some(_) | None => Err(EsClientError::InvalidDocument(
            "document does not contain a usable 'id' field".to_string(),
        )),
    }
}

#[async_trait]
impl EsRepository for EsRepositoryImpl {
    #[doc = "Function that checks whether the cluster answers at all."]
    /// # Returns
    /// * Result<bool, EsClientError> - true when the cluster responded with a success status.
    async fn ping(&self) -> Result<bool, EsClientError> {
        let response: Response = self.es_client.ping().send().await?;
        Ok(response.status_code().is_success())
    }

    #[doc = "Function that creates an index with the given settings. Creating an index that already exists is not an error."]
    /// # Arguments
    /// * `index_name`      - Name of the index
    /// * `index_settings`  - Settings and mappings body for the create call
    ///
    /// # Returns
    /// * Result<IndexCreateStatus, EsClientError>
    async fn create_index(
        &self,
        index_name: &str,
        index_settings: &Value,
    ) -> Result<IndexCreateStatus, EsClientError> {
        let exists_response: Response = self
            .es_client
            .indices()
            .exists(IndicesExistsParts::Index(&[index_name]))
            .send()
            .await?;

        match exists_response.status_code().as_u16() {
            200 => {
                info!("Index {} already exists.", index_name);
                return Ok(IndexCreateStatus::AlreadyExists);
            }
            404 => {}
            code => {
                let reason: String = exists_response.text().await?;
                return Err(EsClientError::UnexpectedStatus {
                    status: code,
                    reason,
                });
            }
        }

        let response: Response = self
            .es_client
            .indices()
            .create(IndicesCreateParts::Index(index_name))
            .body(index_settings)
            .send()
            .await?;

        if response.status_code().is_success() {
            info!("Index {} has been created.", index_name);
            return Ok(IndexCreateStatus::Created);
        }

        let status: u16 = response.status_code().as_u16();
        let reason: String = response.text().await?;

        /* Another writer may create the index between the exists check and the create call. */
        if let Ok(error_body) = serde_json::from_str::<EsErrorBody>(&reason) {
            if error_body.error.error_type == "resource_already_exists_exception" {
                info!("Index {} already exists.", index_name);
                return Ok(IndexCreateStatus::AlreadyExists);
            }
        }

        error!(
            "[EsRepositoryImpl::create_index] Failed to create index {}: {}",
            index_name, reason
        );
        Err(EsClientError::UnexpectedStatus { status, reason })
    }

    #[doc = "Same as `create_index`, with the settings body read from a json file."]
    async fn create_index_from_file(
        &self,
        index_name: &str,
        settings_path: &str,
    ) -> Result<IndexCreateStatus, EsClientError> {
        let index_settings: Value =
            read_json_from_file::<Value>(settings_path).map_err(|e| EsClientError::FileLoad {
                path: settings_path.to_string(),
                source: e,
            })?;

        self.create_index(index_name, &index_settings).await
    }

    #[doc = "Function that stores a document under the id carried in its `id` field."]
    /// # Arguments
    /// * `index_name`  - Name of the index
    /// * `document`    - Document body; must contain a usable `id` field
    ///
    /// # Returns
    /// * Result<DocWriteResult, EsClientError>
    async fn add_document(
        &self,
        index_name: &str,
        document: &Value,
    ) -> Result<DocWriteResult, EsClientError> {
        let doc_id: String = match extract_doc_id(document) {
            Ok(doc_id) => doc_id,
            Err(e) => {
                warn!("[EsRepositoryImpl::add_document] document rejected: {}", e);
                return Err(e);
            }
        };

        self.index_document(index_name, &doc_id, document).await
    }

    #[doc = "Function that stores a document under an explicit id."]
    async fn index_document(
        &self,
        index_name: &str,
        doc_id: &str,
        document: &Value,
    ) -> Result<DocWriteResult, EsClientError> {
        let response: Response = self
            .es_client
            .index(IndexParts::IndexId(index_name, doc_id))
            .body(document)
            .send()
            .await?;

        if response.status_code().is_success() {
            let write_response: DocWriteResponse = response.json().await?;
            info!(
                "Document {} has been written to index {} ({:?}).",
                doc_id, index_name, write_response.result
            );
            Ok(write_response.result)
        } else {
            let status: u16 = response.status_code().as_u16();
            let reason: String = response.text().await?;
            error!(
                "[EsRepositoryImpl::index_document] Failed to index document {}: {}",
                doc_id, reason
            );
            Err(EsClientError::UnexpectedStatus { status, reason })
        }
    }

    #[doc = "Function that fetches a document by id. A missing document is `None`, not an error."]
    /// # Arguments
    /// * `index_name` - Name of the index
    /// * `doc_id`     - Id of the document
    ///
    /// # Returns
    /// * Result<Option<T>, EsClientError>
    async fn get_document<T: for<'de> Deserialize<'de> + Send + 'static>(
        &self,
        index_name: &str,
        doc_id: &str,
    ) -> Result<Option<T>, EsClientError> {
        let response: Response = self
            .es_client
            .get(GetParts::IndexId(index_name, doc_id))
            .send()
            .await?;

        let status: u16 = response.status_code().as_u16();

        if status == 404 {
            info!("Document {} not found in index {}.", doc_id, index_name);
            return Ok(None);
        }

        if !response.status_code().is_success() {
            let reason: String = response.text().await?;
            return Err(EsClientError::UnexpectedStatus { status, reason });
        }

        let get_response: GetDocResponse<T> = response.json().await?;

        if get_response.found {
            Ok(get_response._source)
        } else {
            info!("Document {} not found in index {}.", doc_id, index_name);
            Ok(None)
        }
    }

    #[doc = "Function that checks whether a document with the given id exists."]
    async fn document_exists(&self, index_name: &str, doc_id: &str) -> Result<bool, EsClientError> {
        let response: Response = self
            .es_client
            .exists(ExistsParts::IndexId(index_name, doc_id))
            .send()
            .await?;

        match response.status_code().as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            code => {
                let reason: String = response.text().await?;
                Err(EsClientError::UnexpectedStatus {
                    status: code,
                    reason,
                })
            }
        }
    }

    #[doc = "Function that applies a partial update to an existing document."]
    /// # Arguments
    /// * `index_name`     - Name of the index
    /// * `doc_id`         - Id of the document to update
    /// * `update_fields`  - Fields to merge into the stored document
    ///
    /// # Returns
    /// * Result<DocWriteResult, EsClientError> - `Updated`, or `Noop` when nothing changed. Updating a missing document is an `UnexpectedStatus` error.
    async fn update_document(
        &self,
        index_name: &str,
        doc_id: &str,
        update_fields: &Value,
    ) -> Result<DocWriteResult, EsClientError> {
        let response: Response = self
            .es_client
            .update(UpdateParts::IndexId(index_name, doc_id))
            .body(json!({ "doc": update_fields }))
            .retry_on_conflict(3)
            .send()
            .await?;

        if response.status_code().is_success() {
            let write_response: DocWriteResponse = response.json().await?;
            info!(
                "Document {} in index {} has been updated ({:?}).",
                doc_id, index_name, write_response.result
            );
            Ok(write_response.result)
        } else {
            let status: u16 = response.status_code().as_u16();
            let reason: String = response.text().await?;
            error!(
                "[EsRepositoryImpl::update_document] Failed to update document {}: {}",
                doc_id, reason
            );
            Err(EsClientError::UnexpectedStatus { status, reason })
        }
    }

    #[doc = "Function that deletes a document by id. Deleting a document that is already gone reports `NotFound` and is not an error."]
    async fn delete_document(
        &self,
        index_name: &str,
        doc_id: &str,
    ) -> Result<DocWriteResult, EsClientError> {
        let response: Response = self
            .es_client
            .delete(DeleteParts::IndexId(index_name, doc_id))
            .send()
            .await?;

        let status: u16 = response.status_code().as_u16();

        if status == 404 {
            info!(
                "Document {} was already absent from index {}.",
                doc_id, index_name
            );
            return Ok(DocWriteResult::NotFound);
        }

        if response.status_code().is_success() {
            let write_response: DocWriteResponse = response.json().await?;
            info!("Document {} has been deleted from index {}.", doc_id, index_name);
            Ok(write_response.result)
        } else {
            let reason: String = response.text().await?;
            error!(
                "[EsRepositoryImpl::delete_document] Failed to delete document {}: {}",
                doc_id, reason
            );
            Err(EsClientError::UnexpectedStatus { status, reason })
        }
    }

    #[doc = "Function that counts the documents matching a query."]
    /// # Arguments
    /// * `index_name`  - Name of the index
    /// * `es_query`    - Count body, e.g. `{"query": {...}}`
    ///
    /// # Returns
    /// * Result<u64, EsClientError>
    async fn count_documents(
        &self,
        index_name: &str,
        es_query: &Value,
    ) -> Result<u64, EsClientError> {
        let response: Response = self
            .es_client
            .count(CountParts::Index(&[index_name]))
            .body(es_query)
            .send()
            .await?;

        if response.status_code().is_success() {
            let count_response: CountResponse = response.json().await?;
            Ok(count_response.count)
        } else {
            let status: u16 = response.status_code().as_u16();
            let reason: String = response.text().await?;
            Err(EsClientError::UnexpectedStatus { status, reason })
        }
    }

    #[doc = "Function that counts the documents whose field holds exactly the given value."]
    async fn count_documents_by_field(
        &self,
        index_name: &str,
        field_name: &str,
        field_value: &str,
    ) -> Result<u64, EsClientError> {
        let es_query: Value = json!({
            "query": {
                "term": { field_name: field_value }
            }
        });

        let count: u64 = self.count_documents(index_name, &es_query).await?;
        info!(
            "Found {} documents in index {} where {} = {}.",
            count, index_name, field_name, field_value
        );

        Ok(count)
    }

    #[doc = "Function that runs a search query and returns the source of every hit."]
    /// # Arguments
    /// * `index_name`  - Name of the index
    /// * `es_query`    - Search body
    ///
    /// # Returns
    /// * Result<Vec<T>, EsClientError>
    async fn search<T: for<'de> Deserialize<'de> + Send + 'static>(
        &self,
        index_name: &str,
        es_query: &Value,
    ) -> Result<Vec<T>, EsClientError> {
        let hits: Vec<SearchHit<T>> = self.search_hits(index_name, es_query).await?;

        let dtos: Vec<T> = hits.into_iter().filter_map(|hit| hit._source).collect();
        Ok(dtos)
    }

    #[doc = "Function that runs a search query and returns the raw hits, ids included."]
    async fn search_hits<T: for<'de> Deserialize<'de> + Send + 'static>(
        &self,
        index_name: &str,
        es_query: &Value,
    ) -> Result<Vec<SearchHit<T>>, EsClientError> {
        let response: Response = self
            .es_client
            .search(SearchParts::Index(&[index_name]))
            .body(es_query)
            .send()
            .await?;

        if response.status_code().is_success() {
            let parsed: SearchResponse<T> = response.json().await?;
            Ok(parsed.hits.hits)
        } else {
            let status: u16 = response.status_code().as_u16();
            let reason: String = response.text().await?;
            Err(EsClientError::UnexpectedStatus { status, reason })
        }
    }

    #[doc = "Function that returns the id of the document with the highest `id` field, or `None` for an empty index."]
    async fn get_last_doc_id(&self, index_name: &str) -> Result<Option<String>, EsClientError> {
        let es_query: Value = json!({
            "size": 1,
            "sort": [{ "id": { "order": "desc" } }]
        });

        let hits: Vec<SearchHit<Value>> = self.search_hits(index_name, &es_query).await?;
        Ok(hits.into_iter().next().map(|hit| hit._id))
    }

    #[doc = "Function that returns the highest value of a field across the index, or `None` when the index is empty."]
    /// # Arguments
    /// * `index_name`  - Name of the index
    /// * `field_name`  - Sort field; dotted paths reach into nested objects
    ///
    /// # Returns
    /// * Result<Option<Value>, EsClientError>
    async fn get_latest_value(
        &self,
        index_name: &str,
        field_name: &str,
    ) -> Result<Option<Value>, EsClientError> {
        let es_query: Value = json!({
            "size": 1,
            "sort": [{ field_name: { "order": "desc" } }],
            "_source": [field_name]
        });

        let hits: Vec<SearchHit<Value>> = self.search_hits(index_name, &es_query).await?;

        let latest: Option<Value> = hits
            .into_iter()
            .next()
            .and_then(|hit| hit._source)
            .and_then(|source| get_value_by_path(&source, field_name).cloned());

        Ok(latest)
    }

    #[doc = "Function that reports the highest document id and the latest value of a date field in one call. The two sorts run independently."]
    async fn get_latest_doc_info(
        &self,
        index_name: &str,
        date_field: &str,
    ) -> Result<LatestDocInfo, EsClientError> {
        let id_query: Value = json!({
            "size": 1,
            "sort": [{ "id": { "order": "desc" } }],
            "_source": false
        });

        let id_hits: Vec<SearchHit<Value>> = self.search_hits(index_name, &id_query).await?;
        let last_doc_id: Option<String> = id_hits.into_iter().next().map(|hit| hit._id);

        let latest_date: Option<Value> = self.get_latest_value(index_name, date_field).await?;

        Ok(LatestDocInfo::new(last_doc_id, latest_date))
    }

    #[doc = "Function that brings the stored copy of a document in line with the given one."]
    /// The stored copy is fetched and compared field by field; the write is skipped
    /// when nothing differs.
    ///
    /// # Arguments
    /// * `index_name`  - Name of the index
    /// * `document`    - Desired document state; must contain a usable `id` field
    ///
    /// # Returns
    /// * Result<SyncStatus, EsClientError>
    async fn sync_document(
        &self,
        index_name: &str,
        document: &Value,
    ) -> Result<SyncStatus, EsClientError> {
        let doc_id: String = match extract_doc_id(document) {
            Ok(doc_id) => doc_id,
            Err(e) => {
                warn!("[EsRepositoryImpl::sync_document] document rejected: {}", e);
                return Err(e);
            }
        };

        let existing: Option<Value> = self.get_document::<Value>(index_name, &doc_id).await?;

        match existing {
            Some(existing_doc) => {
                if compare_documents(document, &existing_doc) {
                    info!("Document with id {} is already up-to-date.", doc_id);
                    return Ok(SyncStatus::Unchanged);
                }

                info!(
                    "Document with id {}. New version found. Updating document.",
                    doc_id
                );
                self.index_document(index_name, &doc_id, document).await?;
                Ok(SyncStatus::Updated)
            }
            None => {
                self.index_document(index_name, &doc_id, document).await?;
                info!("Document with id {} has been created.", doc_id);
                Ok(SyncStatus::Created)
            }
        }
    }

    #[doc = "Function that checks whether each configured node answers on its own address."]
    /// # Returns
    /// * Vec<(String, bool)> - connection status per host
    async fn check_node_connections(&self) -> Vec<(String, bool)> {
        let mut futures = FuturesUnordered::new();

        for host in self.config.hosts() {
            let address: String = host.address();
            let url_result: Result<Url, EsClientError> = self.build_probe_url(host);

            futures.push(async move {
                match url_result {
                    Ok(node_url) => {
                        let is_connected: bool = Self::check_single_node_connection(node_url).await;
                        (address, is_connected)
                    }
                    Err(e) => {
                        warn!(
                            "[EsRepositoryImpl::check_node_connections] invalid url for host {}: {:?}",
                            address, e
                        );
                        (address, false)
                    }
                }
            });
        }

        let mut results: Vec<(String, bool)> = Vec::new();

        while let Some(result) = futures.next().await {
            results.push(result);
        }

        results
    }
}
