use crate::common::*;

#[doc = "Value of the `result` field in a document write response."]
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocWriteResult {
    Created,
    Updated,
    Deleted,
    NotFound,
    Noop,
}

impl DocWriteResult {
    #[doc = "True when the write stored the document, i.e. `created` or `updated`."]
    pub fn is_write_success(&self) -> bool {
        matches!(self, DocWriteResult::Created | DocWriteResult::Updated)
    }
}

#[doc = "Body returned by the index, update and delete apis."]
#[derive(Debug, Deserialize)]
pub struct DocWriteResponse {
    #[serde(default)]
    pub _id: Option<String>,
    pub result: DocWriteResult,
}

#[doc = "Outcome of `create_index`."]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexCreateStatus {
    Created,
    AlreadyExists,
}

#[doc = "Outcome of `sync_document`."]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Created,
    Updated,
    Unchanged,
}

#[doc = "Error body Elasticsearch sends with non-success status codes."]
#[derive(Debug, Deserialize)]
pub struct EsErrorBody {
    pub error: EsErrorCause,
}

#[derive(Debug, Deserialize)]
pub struct EsErrorCause {
    #[serde(rename = "type")]
    pub error_type: String,
    #[serde(default)]
    pub reason: Option<String>,
}
