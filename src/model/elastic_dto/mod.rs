pub mod latest_doc_info;
pub mod search_response;
pub mod write_response;
