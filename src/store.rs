use crate::types::{Document, Fields};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, instrument};
use uuid::Uuid;

/// Failures reported by a document store backend
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("No document to update: {collection}/{id}")]
    NotFound { collection: String, id: String },

    #[error("Document store error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Schema-free document database addressed by collection name and document id.
///
/// Every method is a single round trip to the backend. Implementations own
/// id generation and decide how concurrent writes to one document resolve.
#[async_trait]
pub trait DocumentStore: Send + Sync + 'static {
    /// Insert `fields` as a new document and return its generated id.
    async fn insert(&self, collection: &str, fields: Fields) -> StoreResult<String>;

    /// Every document in the collection. Order is not guaranteed.
    async fn list(&self, collection: &str) -> StoreResult<Vec<Document>>;

    /// Fields of one document, or `None` if it does not exist.
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Fields>>;

    /// Merge `fields` into an existing document.
    ///
    /// Each supplied top-level field overwrites the stored one; fields not
    /// mentioned are left alone. Fails with [`StoreError::NotFound`] when the
    /// document does not exist.
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> StoreResult<()>;

    /// Remove a document. Removing a missing document succeeds.
    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()>;
}

type Collection = HashMap<String, Fields>;

/// Document store held entirely in process memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, Collection>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    #[instrument(skip(self, fields))]
    async fn insert(&self, collection: &str, fields: Fields) -> StoreResult<String> {
        let id = Uuid::new_v4().simple().to_string();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.clone(), fields);
        debug!("Inserted document {}/{}", collection, id);
        Ok(id)
    }

    #[instrument(skip(self))]
    async fn list(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let collections = self.collections.read().await;
        let documents = collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(id, fields)| Document {
                        id: id.clone(),
                        fields: fields.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default();
        Ok(documents)
    }

    #[instrument(skip(self))]
    async fn get(&self, collection: &str, id: &str) -> StoreResult<Option<Fields>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .cloned())
    }

    #[instrument(skip(self, fields))]
    async fn update(&self, collection: &str, id: &str, fields: Fields) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        let existing = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(id))
            .ok_or_else(|| StoreError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;
        existing.extend(fields);
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, collection: &str, id: &str) -> StoreResult<()> {
        let mut collections = self.collections.write().await;
        if let Some(docs) = collections.get_mut(collection) {
            docs.remove(id);
        }
        Ok(())
    }
}
