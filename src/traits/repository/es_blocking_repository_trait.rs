use crate::common::*;

use crate::errors::EsClientError;
use crate::model::elastic_dto::latest_doc_info::*;
use crate::model::elastic_dto::search_response::*;
use crate::model::elastic_dto::write_response::*;

#[doc = "Blocking twin of `EsRepository`. Same operations, same semantics, no async runtime required on the calling side."]
pub trait EsBlockingRepository: Send + Sync {
    fn ping(&self) -> Result<bool, EsClientError>;
    fn create_index(
        &self,
        index_name: &str,
        index_settings: &Value,
    ) -> Result<IndexCreateStatus, EsClientError>;
    fn create_index_from_file(
        &self,
        index_name: &str,
        settings_path: &str,
    ) -> Result<IndexCreateStatus, EsClientError>;
    fn add_document(
        &self,
        index_name: &str,
        document: &Value,
    ) -> Result<DocWriteResult, EsClientError>;
    fn index_document(
        &self,
        index_name: &str,
        doc_id: &str,
        document: &Value,
    ) -> Result<DocWriteResult, EsClientError>;
    fn get_document<T: for<'de> Deserialize<'de> + Send + 'static>(
        &self,
        index_name: &str,
        doc_id: &str,
    ) -> Result<Option<T>, EsClientError>;
    fn document_exists(&self, index_name: &str, doc_id: &str) -> Result<bool, EsClientError>;
    fn update_document(
        &self,
        index_name: &str,
        doc_id: &str,
        update_fields: &Value,
    ) -> Result<DocWriteResult, EsClientError>;
    fn delete_document(
        &self,
        index_name: &str,
        doc_id: &str,
    ) -> Result<DocWriteResult, EsClientError>;
    fn count_documents(&self, index_name: &str, es_query: &Value) -> Result<u64, EsClientError>;
    fn count_documents_by_field(
        &self,
        index_name: &str,
        field_name: &str,
        field_value: &str,
    ) -> Result<u64, EsClientError>;
    fn search<T: for<'de> Deserialize<'de> + Send + 'static>(
        &self,
        index_name: &str,
        es_query: &Value,
    ) -> Result<Vec<T>, EsClientError>;
    fn search_hits<T: for<'de> Deserialize<'de> + Send + 'static>(
        &self,
        index_name: &str,
        es_query: &Value,
    ) -> Result<Vec<SearchHit<T>>, EsClientError>;
    fn get_last_doc_id(&self, index_name: &str) -> Result<Option<String>, EsClientError>;
    fn get_latest_value(
        &self,
        index_name: &str,
        field_name: &str,
    ) -> Result<Option<Value>, EsClientError>;
    fn get_latest_doc_info(
        &self,
        index_name: &str,
        date_field: &str,
    ) -> Result<LatestDocInfo, EsClientError>;
    fn sync_document(
        &self,
        index_name: &str,
        document: &Value,
    ) -> Result<SyncStatus, EsClientError>;
    fn check_node_connections(&self) -> Vec<(String, bool)>;
}
