use crate::common::*;

#[doc = "Highest document id and the latest value of a date field within one index. The two values are independent sort results and may come from different documents."]
#[derive(Debug, Clone, PartialEq, Getters, new)]
#[getset(get = "pub")]
pub struct LatestDocInfo {
    pub last_doc_id: Option<String>,
    pub latest_date: Option<Value>,
}
