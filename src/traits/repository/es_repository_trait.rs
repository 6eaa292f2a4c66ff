use crate::common::*;

use crate::errors::EsClientError;
use crate::model::elastic_dto::latest_doc_info::*;
use crate::model::elastic_dto::search_response::*;
use crate::model::elastic_dto::write_response::*;

#[doc = "Asynchronous helper surface over one Elasticsearch cluster connection."]
#[async_trait]
pub trait EsRepository: Send + Sync {
    async fn ping(&self) -> Result<bool, EsClientError>;
    async fn create_index(
        &self,
        index_name: &str,
        index_settings: &Value,
    ) -> Result<IndexCreateStatus, EsClientError>;
    async fn create_index_from_file(
        &self,
        index_name: &str,
        settings_path: &str,
    ) -> Result<IndexCreateStatus, EsClientError>;
    async fn add_document(
        &self,
        index_name: &str,
        document: &Value,
    ) -> Result<DocWriteResult, EsClientError>;
    async fn index_document(
        &self,
        index_name: &str,
        doc_id: &str,
        document: &Value,
    ) -> Result<DocWriteResult, EsClientError>;
    async fn get_document<T: for<'de> Deserialize<'de> + Send + 'static>(
        &self,
        index_name: &str,
        doc_id: &str,
    ) -> Result<Option<T>, EsClientError>;
    async fn document_exists(&self, index_name: &str, doc_id: &str) -> Result<bool, EsClientError>;
    async fn update_document(
        &self,
        index_name: &str,
        doc_id: &str,
        update_fields: &Value,
    ) -> Result<DocWriteResult, EsClientError>;
    async fn delete_document(
        &self,
        index_name: &str,
        doc_id: &str,
    ) -> Result<DocWriteResult, EsClientError>;
    async fn count_documents(
        &self,
        index_name: &str,
        es_query: &Value,
    ) -> Result<u64, EsClientError>;
    async fn count_documents_by_field(
        &self,
        index_name: &str,
        field_name: &str,
        field_value: &str,
    ) -> Result<u64, EsClientError>;
    async fn search<T: for<'de> Deserialize<'de> + Send + 'static>(
        &self,
        index_name: &str,
        es_query: &Value,
    ) -> Result<Vec<T>, EsClientError>;
    async fn search_hits<T: for<'de> Deserialize<'de> + Send + 'static>(
        &self,
        index_name: &str,
        es_query: &Value,
    ) -> Result<Vec<SearchHit<T>>, EsClientError>;
    async fn get_last_doc_id(&self, index_name: &str) -> Result<Option<String>, EsClientError>;
    async fn get_latest_value(
        &self,
        index_name: &str,
        field_name: &str,
    ) -> Result<Option<Value>, EsClientError>;
    async fn get_latest_doc_info(
        &self,
        index_name: &str,
        date_field: &str,
    ) -> Result<LatestDocInfo, EsClientError>;
    async fn sync_document(
        &self,
        index_name: &str,
        document: &Value,
    ) -> Result<SyncStatus, EsClientError>;
    async fn check_node_connections(&self) -> Vec<(String, bool)>;
}
