use httpmock::Method::{DELETE, GET, HEAD, POST, PUT};
use httpmock::MockServer;
use pretty_assertions::assert_eq;
use serde::Deserialize;
use serde_json::{json, Value};

use elastic_utils_rust::{
    DocWriteResult, ElasticConfig, ElasticConfigBuilder, ElasticCredentials, ElasticHost,
    ElasticScheme, EsClientError, EsRepository, EsRepositoryImpl, IndexCreateStatus, SyncStatus,
};

fn repository_for(server: &MockServer) -> EsRepositoryImpl {
    EsRepositoryImpl::new(ElasticConfig::single_node("127.0.0.1", server.port())).unwrap()
}

/// Nothing listens on port 1, so every request fails before reaching a cluster.
fn unreachable_repository() -> EsRepositoryImpl {
    EsRepositoryImpl::new(ElasticConfig::single_node("127.0.0.1", 1)).unwrap()
}

#[tokio::test]
async fn test_ping_success() {
    let server = MockServer::start();
    let ping_mock = server.mock(|when, then| {
        when.method(HEAD).path("/");
        then.status(200);
    });

    let repository = repository_for(&server);
    assert!(repository.ping().await.unwrap());
    ping_mock.assert();
}

#[tokio::test]
async fn test_ping_reports_failure_status() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(HEAD).path("/");
        then.status(503);
    });

    let repository = repository_for(&server);
    assert!(!repository.ping().await.unwrap());
}

#[tokio::test]
async fn test_ping_sends_basic_auth() {
    let server = MockServer::start();
    /* "u:p" base64-encoded. */
    let ping_mock = server.mock(|when, then| {
        when.method(HEAD)
            .path("/")
            .header("authorization", "Basic dTpw");
        then.status(200);
    });

    let config = ElasticConfigBuilder::default()
        .hosts(vec![ElasticHost::new(
            "127.0.0.1".to_string(),
            server.port(),
            ElasticScheme::Http,
        )])
        .credentials(ElasticCredentials::new("u".to_string(), "p".to_string()))
        .build()
        .unwrap();
    let repository = EsRepositoryImpl::new(config).unwrap();

    assert!(repository.ping().await.unwrap());
    ping_mock.assert();
}

#[tokio::test]
async fn test_transport_error_surfaces() {
    let repository = unreachable_repository();

    let result = repository.ping().await;
    assert!(matches!(result, Err(EsClientError::Transport(_))));
}

#[tokio::test]
async fn test_create_index_when_missing() {
    let server = MockServer::start();
    let settings: Value = json!({ "settings": { "number_of_shards": 1 } });

    let exists_mock = server.mock(|when, then| {
        when.method(HEAD).path("/news");
        then.status(404);
    });
    let create_mock = server.mock(|when, then| {
        when.method(PUT).path("/news").json_body(settings.clone());
        then.status(200)
            .json_body(json!({ "acknowledged": true, "index": "news" }));
    });

    let repository = repository_for(&server);
    let status = repository.create_index("news", &settings).await.unwrap();

    assert_eq!(status, IndexCreateStatus::Created);
    exists_mock.assert();
    create_mock.assert();
}

#[tokio::test]
async fn test_create_index_already_exists() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(HEAD).path("/news");
        then.status(200);
    });
    let create_mock = server.mock(|when, then| {
        when.method(PUT).path("/news");
        then.status(200).json_body(json!({ "acknowledged": true }));
    });

    let repository = repository_for(&server);
    let status = repository
        .create_index("news", &json!({}))
        .await
        .unwrap();

    assert_eq!(status, IndexCreateStatus::AlreadyExists);
    create_mock.assert_hits(0);
}

#[tokio::test]
async fn test_create_index_lost_creation_race() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(HEAD).path("/news");
        then.status(404);
    });
    server.mock(|when, then| {
        when.method(PUT).path("/news");
        then.status(400).json_body(json!({
            "error": {
                "type": "resource_already_exists_exception",
                "reason": "index [news/uuid] already exists"
            },
            "status": 400
        }));
    });

    let repository = repository_for(&server);
    let status = repository
        .create_index("news", &json!({}))
        .await
        .unwrap();

    assert_eq!(status, IndexCreateStatus::AlreadyExists);
}

#[tokio::test]
async fn test_create_index_from_file_missing_file() {
    let repository = unreachable_repository();

    let result = repository
        .create_index_from_file("news", "/nonexistent/settings.json")
        .await;

    assert!(matches!(result, Err(EsClientError::FileLoad { .. })));
}

#[tokio::test]
async fn test_add_document_uses_id_field() {
    let server = MockServer::start();
    let document: Value = json!({ "id": 3, "title": "hello" });

    let index_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/news/_doc/3")
            .json_body(document.clone());
        then.status(201).json_body(json!({
            "_index": "news",
            "_id": "3",
            "result": "created"
        }));
    });

    let repository = repository_for(&server);
    let result = repository.add_document("news", &document).await.unwrap();

    assert_eq!(result, DocWriteResult::Created);
    index_mock.assert();
}

#[tokio::test]
async fn test_add_document_rejects_unusable_id() {
    let repository = unreachable_repository();

    for document in [
        json!({ "title": "no id at all" }),
        json!({ "id": "" }),
        json!({ "id": null }),
    ] {
        let result = repository.add_document("news", &document).await;
        assert!(matches!(result, Err(EsClientError::InvalidDocument(_))));
    }
}

#[tokio::test]
async fn test_get_document_found_and_missing() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct NewsDoc {
        id: i64,
        title: String,
    }

    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/news/_doc/11");
        then.status(200).json_body(json!({
            "_index": "news",
            "_id": "11",
            "found": true,
            "_source": { "id": 11, "title": "first" }
        }));
    });
    server.mock(|when, then| {
        when.method(GET).path("/news/_doc/12");
        then.status(404).json_body(json!({
            "_index": "news",
            "_id": "12",
            "found": false
        }));
    });

    let repository = repository_for(&server);

    let found: Option<NewsDoc> = repository.get_document("news", "11").await.unwrap();
    assert_eq!(
        found,
        Some(NewsDoc {
            id: 11,
            title: "first".to_string()
        })
    );

    let missing: Option<NewsDoc> = repository.get_document("news", "12").await.unwrap();
    assert_eq!(missing, None);
}

#[tokio::test]
async fn test_document_exists() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(HEAD).path("/news/_doc/7");
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(HEAD).path("/news/_doc/8");
        then.status(404);
    });

    let repository = repository_for(&server);
    assert!(repository.document_exists("news", "7").await.unwrap());
    assert!(!repository.document_exists("news", "8").await.unwrap());
}

#[tokio::test]
async fn test_update_document_sends_partial_body() {
    let server = MockServer::start();
    let update_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/news/_update/5")
            .query_param("retry_on_conflict", "3")
            .json_body(json!({ "doc": { "title": "renamed" } }));
        then.status(200).json_body(json!({
            "_index": "news",
            "_id": "5",
            "result": "updated"
        }));
    });

    let repository = repository_for(&server);
    let result = repository
        .update_document("news", "5", &json!({ "title": "renamed" }))
        .await
        .unwrap();

    assert_eq!(result, DocWriteResult::Updated);
    update_mock.assert();
}

#[tokio::test]
async fn test_update_document_missing_is_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/news/_update/404");
        then.status(404).json_body(json!({
            "error": {
                "type": "document_missing_exception",
                "reason": "[404]: document missing"
            },
            "status": 404
        }));
    });

    let repository = repository_for(&server);
    let result = repository
        .update_document("news", "404", &json!({ "title": "x" }))
        .await;

    match result {
        Err(EsClientError::UnexpectedStatus { status, reason }) => {
            assert_eq!(status, 404);
            assert!(reason.contains("document_missing_exception"));
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_document() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/news/_doc/7");
        then.status(200).json_body(json!({
            "_index": "news",
            "_id": "7",
            "result": "deleted"
        }));
    });

    let repository = repository_for(&server);
    let result = repository.delete_document("news", "7").await.unwrap();
    assert_eq!(result, DocWriteResult::Deleted);
}

#[tokio::test]
async fn test_delete_document_already_absent() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(DELETE).path("/news/_doc/9");
        then.status(404).json_body(json!({
            "_index": "news",
            "_id": "9",
            "result": "not_found"
        }));
    });

    let repository = repository_for(&server);
    let result = repository.delete_document("news", "9").await.unwrap();
    assert_eq!(result, DocWriteResult::NotFound);
}

#[tokio::test]
async fn test_count_documents_by_field() {
    let server = MockServer::start();
    let count_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/news/_count")
            .json_body(json!({ "query": { "term": { "category": "sport" } } }));
        then.status(200)
            .json_body(json!({ "count": 12, "_shards": { "total": 1, "failed": 0 } }));
    });

    let repository = repository_for(&server);
    let count = repository
        .count_documents_by_field("news", "category", "sport")
        .await
        .unwrap();

    assert_eq!(count, 12);
    count_mock.assert();
}

#[tokio::test]
async fn test_get_last_doc_id() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/news/_search")
            .json_body(json!({ "size": 1, "sort": [{ "id": { "order": "desc" } }] }));
        then.status(200).json_body(json!({
            "hits": {
                "hits": [
                    { "_index": "news", "_id": "42", "_source": { "id": 42 } }
                ]
            }
        }));
    });

    let repository = repository_for(&server);
    let last_id = repository.get_last_doc_id("news").await.unwrap();
    assert_eq!(last_id, Some("42".to_string()));
}

#[tokio::test]
async fn test_get_last_doc_id_empty_index() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/news/_search");
        then.status(200).json_body(json!({ "hits": { "hits": [] } }));
    });

    let repository = repository_for(&server);
    assert_eq!(repository.get_last_doc_id("news").await.unwrap(), None);
}

#[tokio::test]
async fn test_get_latest_value_resolves_dotted_field() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/biblio/_search").json_body(json!({
            "size": 1,
            "sort": [{ "dokument.DT_WYD": { "order": "desc" } }],
            "_source": ["dokument.DT_WYD"]
        }));
        then.status(200).json_body(json!({
            "hits": {
                "hits": [
                    {
                        "_id": "901",
                        "_source": { "dokument": { "DT_WYD": "2024-06-01" } }
                    }
                ]
            }
        }));
    });

    let repository = repository_for(&server);
    let latest = repository
        .get_latest_value("biblio", "dokument.DT_WYD")
        .await
        .unwrap();

    assert_eq!(latest, Some(json!("2024-06-01")));
}

#[tokio::test]
async fn test_get_latest_doc_info() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/biblio/_search").json_body(json!({
            "size": 1,
            "sort": [{ "id": { "order": "desc" } }],
            "_source": false
        }));
        then.status(200).json_body(json!({
            "hits": { "hits": [{ "_id": "901" }] }
        }));
    });
    server.mock(|when, then| {
        when.method(POST).path("/biblio/_search").json_body(json!({
            "size": 1,
            "sort": [{ "dokument.DT_WYD": { "order": "desc" } }],
            "_source": ["dokument.DT_WYD"]
        }));
        then.status(200).json_body(json!({
            "hits": {
                "hits": [
                    {
                        "_id": "877",
                        "_source": { "dokument": { "DT_WYD": "2024-06-01" } }
                    }
                ]
            }
        }));
    });

    let repository = repository_for(&server);
    let info = repository
        .get_latest_doc_info("biblio", "dokument.DT_WYD")
        .await
        .unwrap();

    assert_eq!(info.last_doc_id(), &Some("901".to_string()));
    assert_eq!(info.latest_date(), &Some(json!("2024-06-01")));
}

#[tokio::test]
async fn test_sync_document_skips_unchanged() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/news/_doc/3");
        then.status(200).json_body(json!({
            "_id": "3",
            "found": true,
            "_source": { "title": "same", "id": 3, "refs": [{ "k": 2 }, { "k": 1 }] }
        }));
    });
    let index_mock = server.mock(|when, then| {
        when.method(PUT).path("/news/_doc/3");
        then.status(200).json_body(json!({ "_id": "3", "result": "updated" }));
    });

    let repository = repository_for(&server);
    let status = repository
        .sync_document(
            "news",
            &json!({ "id": 3, "title": "same", "refs": [{ "k": 1 }, { "k": 2 }] }),
        )
        .await
        .unwrap();

    assert_eq!(status, SyncStatus::Unchanged);
    index_mock.assert_hits(0);
}

#[tokio::test]
async fn test_sync_document_updates_changed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/news/_doc/3");
        then.status(200).json_body(json!({
            "_id": "3",
            "found": true,
            "_source": { "id": 3, "title": "old" }
        }));
    });
    let index_mock = server.mock(|when, then| {
        when.method(PUT)
            .path("/news/_doc/3")
            .json_body(json!({ "id": 3, "title": "new" }));
        then.status(200).json_body(json!({ "_id": "3", "result": "updated" }));
    });

    let repository = repository_for(&server);
    let status = repository
        .sync_document("news", &json!({ "id": 3, "title": "new" }))
        .await
        .unwrap();

    assert_eq!(status, SyncStatus::Updated);
    index_mock.assert();
}

#[tokio::test]
async fn test_sync_document_creates_missing() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/news/_doc/3");
        then.status(404).json_body(json!({ "_id": "3", "found": false }));
    });
    let index_mock = server.mock(|when, then| {
        when.method(PUT).path("/news/_doc/3");
        then.status(201).json_body(json!({ "_id": "3", "result": "created" }));
    });

    let repository = repository_for(&server);
    let status = repository
        .sync_document("news", &json!({ "id": 3, "title": "fresh" }))
        .await
        .unwrap();

    assert_eq!(status, SyncStatus::Created);
    index_mock.assert();
}

#[tokio::test]
async fn test_unexpected_status_carries_code_and_body() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/news/_doc/1");
        then.status(500).body("upstream exploded");
    });

    let repository = repository_for(&server);
    let result = repository.get_document::<Value>("news", "1").await;

    match result {
        Err(EsClientError::UnexpectedStatus { status, reason }) => {
            assert_eq!(status, 500);
            assert!(reason.contains("upstream exploded"));
        }
        other => panic!("expected UnexpectedStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_check_node_connections_mixed() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/");
        then.status(200);
    });

    let config = ElasticConfigBuilder::default()
        .hosts(vec![
            ElasticHost::new("127.0.0.1".to_string(), server.port(), ElasticScheme::Http),
            ElasticHost::new("127.0.0.1".to_string(), 1, ElasticScheme::Http),
        ])
        .build()
        .unwrap();
    let repository = EsRepositoryImpl::new(config).unwrap();

    let mut results = repository.check_node_connections().await;
    results.sort();

    let expected = vec![
        ("http://127.0.0.1:1".to_string(), false),
        (format!("http://127.0.0.1:{}", server.port()), true),
    ];
    assert_eq!(results, expected);
}
