use std::time::Duration;

use async_trait::async_trait;

use bson::Document;

use futures_util::TryStreamExt;

use mongodb::options::ClientOptions;
use mongodb::{Client, Database};

use super::projection::id_string;
use super::{DocumentStore, StoreError};

const APP_NAME: &str = "filmfest";

/// MongoDB-backed document store
#[derive(Debug, Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Create a client for the store at `url`.
    /// The driver connects lazily, so an unreachable server surfaces on first use.
    #[tracing::instrument(name = "Connect to MongoDB", skip(url))]
    pub async fn connect(url: &str, name: &str, timeout: Duration) -> Result<Self, StoreError> {
        let mut options = ClientOptions::parse(url).await?;
        options.app_name = Some(APP_NAME.into());
        options.server_selection_timeout = Some(timeout);
        options.connect_timeout = Some(timeout);

        let client = Client::with_options(options)?;

        Ok(Self {
            database: client.database(name),
        })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn name(&self) -> &str {
        self.database.name()
    }

    async fn insert_one(&self, collection: &str, document: Document) -> Result<String, StoreError> {
        let result = self
            .database
            .collection::<Document>(collection)
            .insert_one(document, None)
            .await?;

        Ok(id_string(&result.inserted_id))
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        let documents = self
            .database
            .collection::<Document>(collection)
            .find(filter, None)
            .await?
            .try_collect()
            .await?;

        Ok(documents)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.database.list_collection_names(None).await?)
    }
}
