use async_trait::async_trait;

use crate::{Document, DocumentId, StoreResult};

/// A document as fetched from the store, with its identifier kept apart from the body.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub id: DocumentId,
    pub body: Document,
}

impl StoredDocument {
    /// Flattens into a transport document with the identifier under `_id` as a string.
    pub fn into_transport(self) -> Document {
        let mut doc = self.body;
        doc.insert("_id".to_string(), serde_json::Value::String(self.id.to_string()));
        doc
    }
}

/// Backend trait for document persistence
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<DocumentId>;

    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> StoreResult<Vec<DocumentId>>;

    /// All documents of a collection in insertion order. An unknown collection is empty.
    async fn fetch_all(&self, collection: &str) -> StoreResult<Vec<StoredDocument>>;

    async fn count(&self, collection: &str) -> StoreResult<u64>;

    /// Names of non-empty collections, sorted.
    async fn list_collection_names(&self) -> StoreResult<Vec<String>>;
}
