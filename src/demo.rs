use anyhow::{Context, Result};
use chrono::Utc;
use dotenv::dotenv;
use flexi_logger::LoggerHandle;
use log::info;
use serde_json::{json, Value};

use elastic_utils_rust::utils_modules::logger_utils::*;
use elastic_utils_rust::utils_modules::time_utils::*;
use elastic_utils_rust::{
    get_es_client, initialize_es_clients_from_env, test_es_connection, EsRepository,
    EsRepositoryImpl, IndexCreateStatus, SyncStatus,
};

use std::sync::Arc;

const DEMO_INDEX: &str = "elastic-utils-demo";

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let _logger: LoggerHandle = set_global_logger();

    initialize_es_clients_from_env().context("Registering the Elasticsearch clients")?;

    let connected: bool = test_es_connection().await?;
    if !connected {
        info!("Cluster answered with a non-success status; stopping the demo.");
        return Ok(());
    }

    let client: Arc<EsRepositoryImpl> = get_es_client()?;

    let create_status: IndexCreateStatus = client
        .create_index_from_file(DEMO_INDEX, "config/es_settings.json")
        .await?;
    info!("Index {}: {:?}", DEMO_INDEX, create_status);

    let document: Value = json!({
        "id": 1,
        "title": "demo document",
        "updated_at": convert_date_to_str_full(Utc::now(), Utc),
    });

    let sync_status: SyncStatus = client.sync_document(DEMO_INDEX, &document).await?;
    info!("sync_document: {:?}", sync_status);

    let last_doc_id: Option<String> = client.get_last_doc_id(DEMO_INDEX).await?;
    info!("Highest document id: {:?}", last_doc_id);

    let latest_info = client.get_latest_doc_info(DEMO_INDEX, "updated_at").await?;
    info!("Latest document info: {:?}", latest_info);

    for (host, is_connected) in client.check_node_connections().await {
        info!("Node {} reachable: {}", host, is_connected);
    }

    Ok(())
}
