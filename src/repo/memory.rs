use std::collections::BTreeMap;

use async_trait::async_trait;

use bson::oid::ObjectId;
use bson::Document;

use tokio::sync::RwLock;

use super::projection::{id_string, NATIVE_ID};
use super::{DocumentStore, StoreError};

/// Document store held in process memory.
/// Collections keep documents in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    name: String,
    collections: RwLock<BTreeMap<String, Vec<Document>>>,
}

impl InMemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::default(),
        }
    }
}

fn matches(document: &Document, filter: &Document) -> bool {
    filter
        .iter()
        .all(|(key, value)| document.get(key) == Some(value))
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> Result<String, StoreError> {
        if !document.contains_key(NATIVE_ID) {
            document.insert(NATIVE_ID, ObjectId::new());
        }
        let id = document
            .get(NATIVE_ID)
            .map(id_string)
            .ok_or_else(|| StoreError::Rejected("Document has no identifier".into()))?;

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(document);

        Ok(id)
    }

    async fn find_many(
        &self,
        collection: &str,
        filter: Document,
    ) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        let documents = collections
            .get(collection)
            .map(|documents| {
                documents
                    .iter()
                    .filter(|document| matches(document, &filter))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        Ok(documents)
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StoreError> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }
}
