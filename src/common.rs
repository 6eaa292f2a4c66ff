pub use std::io::{ Write, BufReader };
pub use std::fs::File;
pub use std::fmt::Display;
pub use std::sync::{Arc, RwLock};

pub use tokio::time::Duration;
pub use tokio::runtime::{Builder as RuntimeBuilder, Handle, Runtime};

pub use log::{info, warn, error};

pub use flexi_logger::{
    Logger, LoggerHandle, FileSpec, Criterion, Age, Naming, Cleanup, Record, DeferredNow, Duplicate,
};

pub use serde::{Serialize, Deserialize};
pub use serde::de::DeserializeOwned;
pub use serde_json::{json, Value, from_reader};

pub use elasticsearch::{
    Elasticsearch, CountParts, DeleteParts, ExistsParts, GetParts, IndexParts, SearchParts,
    UpdateParts,
};
pub use elasticsearch::auth::Credentials as EsCredentials;
pub use elasticsearch::http::transport::{MultiNodeConnectionPool, TransportBuilder, Transport as EsTransport};
pub use elasticsearch::http::response::Response;
pub use elasticsearch::http::Url;
pub use elasticsearch::indices::{IndicesCreateParts, IndicesExistsParts};

pub use reqwest::Client;

pub use anyhow::{Result, anyhow};

pub use thiserror::Error as ThisError;

pub use chrono::{DateTime, TimeZone, Utc};

pub use getset::Getters;
pub use derive_new::new;
pub use derive_builder::Builder;

pub use futures::stream::{FuturesUnordered, StreamExt};

pub use once_cell::sync::Lazy as once_lazy;

pub use async_trait::async_trait;
