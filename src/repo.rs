use std::sync::Arc;

use async_trait::async_trait;

use bson::Document;

use serde_json::Value;

use crate::model::Record;
use crate::settings::DatabaseSettings;

mod error;
mod memory;
mod mongo;
mod projection;

pub use error::{PersistenceError, StoreError};
pub use memory::InMemoryStore;
pub use mongo::MongoStore;
pub use projection::project;

/// Store location selecting the in-process backend
pub const MEMORY_LOCATION: &str = "memory://";

/// A schema-flexible store of documents grouped into named collections
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the database holding the collections
    fn name(&self) -> &str;

    /// Insert a new document, returning its generated identifier
    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, StoreError>;

    /// Every document in `collection` whose fields equal those in `filter`
    async fn find_many(&self, collection: &str, filter: Document)
        -> Result<Vec<Document>, StoreError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError>;
}

/// Exact-match equality constraints for a list query
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Filter(Document);

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `field` to equal `value`. Absent or empty values add no constraint.
    pub fn equals(mut self, field: &str, value: Option<String>) -> Self {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.0.insert(field, value);
        }
        self
    }

    pub fn into_document(self) -> Document {
        self.0
    }
}

/// Data access for every resource collection.
///
/// Runs degraded when no store is connected: writes fail with
/// [`PersistenceError::Unavailable`] and reads come back empty.
#[derive(Clone)]
pub struct Repo {
    store: Option<Arc<dyn DocumentStore>>,
    location_configured: bool,
}

impl Repo {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store: Some(store),
            location_configured: true,
        }
    }

    /// A repository with no backing store
    pub fn disconnected(location_configured: bool) -> Self {
        Self {
            store: None,
            location_configured,
        }
    }

    /// Set up the store described by the settings.
    /// Never fails: a missing or unusable location leaves the repository degraded.
    pub async fn connect(settings: &DatabaseSettings) -> Self {
        use secrecy::ExposeSecret;

        let Some(url) = settings.url() else {
            tracing::warn!("No document store location configured, running without a store");
            return Self::disconnected(false);
        };
        let url = url.expose_secret();

        if url.starts_with(MEMORY_LOCATION) {
            tracing::info!("Using in-memory document store {}", settings.name());
            return Self::new(Arc::new(InMemoryStore::new(settings.name())));
        }

        match MongoStore::connect(url, settings.name(), settings.timeout()).await {
            Ok(store) => {
                tracing::info!("Document store client ready for {}", settings.name());
                Self::new(Arc::new(store))
            }
            Err(error) => {
                tracing::error!(
                    error.cause_chain = ?error,
                    "Failed to set up document store client, running without a store"
                );
                Self::disconnected(true)
            }
        }
    }

    pub fn store(&self) -> Option<&dyn DocumentStore> {
        self.store.as_deref()
    }

    /// Whether a store location was configured, regardless of whether it worked
    pub fn location_configured(&self) -> bool {
        self.location_configured
    }

    /// Persist a validated record, stamping its creation time.
    /// Not retried on failure.
    #[tracing::instrument(name = "Insert record", skip(self, record), fields(collection = R::COLLECTION))]
    pub async fn insert<R: Record>(&self, record: &R) -> Result<String, PersistenceError> {
        let store = self.store().ok_or(PersistenceError::Unavailable)?;

        let mut document = bson::to_document(record)?;
        document.insert("created_at", bson::DateTime::now());

        let id = store.insert_one(R::COLLECTION, document).await?;

        Ok(id)
    }

    /// Fetch every matching document, projected for clients.
    /// Store failures are logged and yield an empty list.
    #[tracing::instrument(name = "Query records", skip(self))]
    pub async fn query(&self, collection: &str, filter: Filter) -> Vec<Value> {
        let Some(store) = self.store() else {
            tracing::warn!("Document store not connected, returning no {} records", collection);
            return Vec::new();
        };

        match store.find_many(collection, filter.into_document()).await {
            Ok(documents) => documents.into_iter().map(project).collect(),
            Err(error) => {
                tracing::warn!(
                    error.cause_chain = ?error,
                    "Failed to query {} records, returning none", collection
                );
                Vec::new()
            }
        }
    }
}
