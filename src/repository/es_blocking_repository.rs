use crate::common::*;

use crate::errors::EsClientError;
use crate::model::elastic_dto::latest_doc_info::*;
use crate::model::elastic_dto::search_response::*;
use crate::model::elastic_dto::write_response::*;

use crate::traits::repository::es_blocking_repository_trait::*;
use crate::traits::repository::es_repository_trait::*;

#[doc = "Runtime that drives every blocking helper call. Shared process wide so repeated calls do not spawn runtimes."]
static ES_BLOCKING_RUNTIME: once_lazy<Runtime> = once_lazy::new(|| {
    match RuntimeBuilder::new_multi_thread()
        .worker_threads(1)
        .thread_name("es-blocking")
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => panic!("[ES_BLOCKING_RUNTIME] Failed to build the runtime: {:?}", e),
    }
});

#[doc = "Blocking facade over an asynchronous repository. Every call runs the matching async operation to completion on a shared runtime."]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct EsBlockingRepositoryImpl<R: EsRepository> {
    pub repository: Arc<R>,
}

impl<R: EsRepository> EsBlockingRepositoryImpl<R> {
    #[doc = "Runs a repository future to completion. When the caller already sits inside an async runtime, the wait moves to a scoped thread so the runtimes do not nest."]
    fn block_on<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future + Send,
        F::Output: Send,
    {
        let handle: &Handle = ES_BLOCKING_RUNTIME.handle();

        if Handle::try_current().is_ok() {
            std::thread::scope(|scope| {
                scope
                    .spawn(move || handle.block_on(future))
                    .join()
                    .expect("[EsBlockingRepositoryImpl::block_on] helper thread panicked")
            })
        } else {
            handle.block_on(future)
        }
    }
}

impl<R: EsRepository> EsBlockingRepository for EsBlockingRepositoryImpl<R> {
    fn ping(&self) -> Result<bool, EsClientError> {
        self.block_on(self.repository.ping())
    }

    fn create_index(
        &self,
        index_name: &str,
        index_settings: &Value,
    ) -> Result<IndexCreateStatus, EsClientError> {
        self.block_on(self.repository.create_index(index_name, index_settings))
    }

    fn create_index_from_file(
        &self,
        index_name: &str,
        settings_path: &str,
    ) -> Result<IndexCreateStatus, EsClientError> {
        self.block_on(
            self.repository
                .create_index_from_file(index_name, settings_path),
        )
    }

    fn add_document(
        &self,
        index_name: &str,
        document: &Value,
    ) -> Result<DocWriteResult, EsClientError> {
        self.block_on(self.repository.add_document(index_name, document))
    }

    fn index_document(
        &self,
        index_name: &str,
        doc_id: &str,
        document: &Value,
    ) -> Result<DocWriteResult, EsClientError> {
        self.block_on(self.repository.index_document(index_name, doc_id, document))
    }

    fn get_document<T: for<'de> Deserialize<'de> + Send + 'static>(
        &self,
        index_name: &str,
        doc_id: &str,
    ) -> Result<Option<T>, EsClientError> {
        self.block_on(self.repository.get_document::<T>(index_name, doc_id))
    }

    fn document_exists(&self, index_name: &str, doc_id: &str) -> Result<bool, EsClientError> {
        self.block_on(self.repository.document_exists(index_name, doc_id))
    }

    fn update_document(
        &self,
        index_name: &str,
        doc_id: &str,
        update_fields: &Value,
    ) -> Result<DocWriteResult, EsClientError> {
        self.block_on(
            self.repository
                .update_document(index_name, doc_id, update_fields),
        )
    }

    fn delete_document(
        &self,
        index_name: &str,
        doc_id: &str,
    ) -> Result<DocWriteResult, EsClientError> {
        self.block_on(self.repository.delete_document(index_name, doc_id))
    }

    fn count_documents(&self, index_name: &str, es_query: &Value) -> Result<u64, EsClientError> {
        self.block_on(self.repository.count_documents(index_name, es_query))
    }

    fn count_documents_by_field(
        &self,
        index_name: &str,
        field_name: &str,
        field_value: &str,
    ) -> Result<u64, EsClientError> {
        self.block_on(
            self.repository
                .count_documents_by_field(index_name, field_name, field_value),
        )
    }

    fn search<T: for<'de> Deserialize<'de> + Send + 'static>(
        &self,
        index_name: &str,
        es_query: &Value,
    ) -> Result<Vec<T>, EsClientError> {
        self.block_on(self.repository.search::<T>(index_name, es_query))
    }

    fn search_hits<T: for<'de> Deserialize<'de> + Send + 'static>(
        &self,
        index_name: &str,
        es_query: &Value,
    ) -> Result<Vec<SearchHit<T>>, EsClientError> {
        self.block_on(self.repository.search_hits::<T>(index_name, es_query))
    }

    fn get_last_doc_id(&self, index_name: &str) -> Result<Option<String>, EsClientError> {
        self.block_on(self.repository.get_last_doc_id(index_name))
    }

    fn get_latest_value(
        &self,
        index_name: &str,
        field_name: &str,
    ) -> Result<Option<Value>, EsClientError> {
        self.block_on(self.repository.get_latest_value(index_name, field_name))
    }

    fn get_latest_doc_info(
        &self,
        index_name: &str,
        date_field: &str,
    ) -> Result<LatestDocInfo, EsClientError> {
        self.block_on(self.repository.get_latest_doc_info(index_name, date_field))
    }

    fn sync_document(
        &self,
        index_name: &str,
        document: &Value,
    ) -> Result<SyncStatus, EsClientError> {
        self.block_on(self.repository.sync_document(index_name, document))
    }

    fn check_node_connections(&self) -> Vec<(String, bool)> {
        self.block_on(self.repository.check_node_connections())
    }
}
