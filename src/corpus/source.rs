//! Article Sources
//!
//! The loader talks to the store through `ArticleSource`, so the memoization and
//! validation logic can run against an in-memory source.

use super::types::StoreError;
use crate::config::DashboardConfig;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::ClientOptions;
use mongodb::Client;
use std::time::Duration;

#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetches every raw document of the article collection.
    async fn fetch_all(&self) -> Result<Vec<Document>, StoreError>;

    /// Human-readable location, used in log lines.
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: ArticleSource + ?Sized> ArticleSource for std::sync::Arc<T> {
    async fn fetch_all(&self) -> Result<Vec<Document>, StoreError> {
        (**self).fetch_all().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}

/// Reads the article collection from MongoDB.
///
/// Every `fetch_all` opens a fresh client, checks liveness with `ping` and drops
/// the client once the cursor is drained.
#[derive(Debug, Clone)]
pub struct MongoArticleSource {
    uri: String,
    database: String,
    collection: String,
    timeout: Duration,
}

impl MongoArticleSource {
    pub fn new(uri: &str, database: &str, collection: &str, timeout: Duration) -> Self {
        Self {
            uri: uri.to_string(),
            database: database.to_string(),
            collection: collection.to_string(),
            timeout,
        }
    }

    pub fn from_config(config: &DashboardConfig) -> Self {
        Self::new(
            &config.mongodb_uri,
            &config.database,
            &config.collection,
            config.connect_timeout,
        )
    }

    async fn connect(&self) -> Result<Client, StoreError> {
        let mut options = ClientOptions::parse(&self.uri)
            .await
            .map_err(|e| StoreError::InvalidUri(e.to_string()))?;
        options.server_selection_timeout = Some(self.timeout);
        options.connect_timeout = Some(self.timeout);
        options.app_name = Some("basket-dashboard".to_string());

        let client =
            Client::with_options(options).map_err(|e| StoreError::InvalidUri(e.to_string()))?;

        client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| StoreError::Unreachable(e.to_string()))?;

        Ok(client)
    }
}

#[async_trait]
impl ArticleSource for MongoArticleSource {
    async fn fetch_all(&self) -> Result<Vec<Document>, StoreError> {
        let client = self.connect().await?;
        tracing::debug!("Connected to {}", self.describe());

        let collection = client
            .database(&self.database)
            .collection::<Document>(&self.collection);

        let cursor = collection
            .find(None, None)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        drop(client);
        Ok(docs)
    }

    fn describe(&self) -> String {
        format!(
            "{} ({}.{})",
            redact_credentials(&self.uri),
            self.database,
            self.collection
        )
    }
}

/// Hides the userinfo part of a connection string, if any.
pub fn redact_credentials(uri: &str) -> String {
    match (uri.find("://"), uri.rfind('@')) {
        (Some(scheme_end), Some(at)) if at > scheme_end => {
            format!("{}://***@{}", &uri[..scheme_end], &uri[at + 1..])
        }
        _ => uri.to_string(),
    }
}

/// Serves a fixed set of documents, or a fixed error. Counts fetches.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct InMemoryArticleSource {
    docs: Vec<Document>,
    failure: Option<StoreError>,
    fetches: std::sync::Arc<std::sync::atomic::AtomicUsize>,
}

#[cfg(test)]
impl InMemoryArticleSource {
    pub fn new(docs: Vec<Document>) -> Self {
        Self {
            docs,
            ..Self::default()
        }
    }

    pub fn failing(error: StoreError) -> Self {
        Self {
            failure: Some(error),
            ..Self::default()
        }
    }

    /// Number of `fetch_all` calls so far, shared across clones.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(test)]
#[async_trait]
impl ArticleSource for InMemoryArticleSource {
    async fn fetch_all(&self) -> Result<Vec<Document>, StoreError> {
        self.fetches
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        match &self.failure {
            Some(e) => Err(e.clone()),
            None => Ok(self.docs.clone()),
        }
    }

    fn describe(&self) -> String {
        format!("in-memory source ({} documents)", self.docs.len())
    }
}
