use crate::common::*;

#[doc = "One hit of a search response. Field names follow the raw Elasticsearch body."]
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct SearchHit<T> {
    pub _id: String,
    #[serde(default)]
    pub _source: Option<T>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse<T> {
    pub hits: HitsWrapper<T>,
}

#[derive(Debug, Deserialize)]
pub struct HitsWrapper<T> {
    pub hits: Vec<SearchHit<T>>,
}

#[doc = "Body of the document get api."]
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct GetDocResponse<T> {
    pub _id: String,
    pub found: bool,
    #[serde(default)]
    pub _source: Option<T>,
}

#[doc = "Body of the count api."]
#[derive(Debug, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_search_response_parsing() {
        let raw: Value = json!({
            "took": 3,
            "timed_out": false,
            "hits": {
                "total": { "value": 2, "relation": "eq" },
                "hits": [
                    { "_index": "news", "_id": "11", "_score": null, "_source": { "id": 11, "title": "first" } },
                    { "_index": "news", "_id": "12", "_score": null }
                ]
            }
        });

        let parsed: SearchResponse<Value> = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.hits.hits.len(), 2);
        assert_eq!(parsed.hits.hits[0]._id, "11");
        assert_eq!(
            parsed.hits.hits[0]._source.as_ref().and_then(|s| s.get("title").cloned()),
            Some(json!("first"))
        );
        assert!(parsed.hits.hits[1]._source.is_none());
    }

    #[test]
    fn test_get_doc_response_parsing() {
        let found: GetDocResponse<Value> = serde_json::from_value(json!({
            "_index": "news",
            "_id": "7",
            "found": true,
            "_source": { "id": 7 }
        }))
        .unwrap();
        assert!(found.found);
        assert_eq!(found._source, Some(json!({ "id": 7 })));

        let missing: GetDocResponse<Value> = serde_json::from_value(json!({
            "_index": "news",
            "_id": "8",
            "found": false
        }))
        .unwrap();
        assert!(!missing.found);
        assert!(missing._source.is_none());
    }

    #[test]
    fn test_count_response_parsing() {
        let parsed: CountResponse =
            serde_json::from_value(json!({ "count": 42, "_shards": { "total": 1 } })).unwrap();
        assert_eq!(parsed.count, 42);
    }
}
