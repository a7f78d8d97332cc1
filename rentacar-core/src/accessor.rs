use std::sync::Arc;

use crate::{Document, DocumentId, DocumentStore, StoreError, StoreResult, StoredDocument};

/// Handle over an optional document store backend.
///
/// The backend is decided once at startup. When absent, every operation
/// returns [`StoreError::Unavailable`] so callers can take their fallback branch.
#[derive(Clone, Default)]
pub struct StoreAccessor {
    backend: Option<Arc<dyn DocumentStore>>,
}

impl StoreAccessor {
    pub fn new(backend: Arc<dyn DocumentStore>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn absent() -> Self {
        Self { backend: None }
    }

    pub fn is_present(&self) -> bool {
        self.backend.is_some()
    }

    fn backend(&self) -> StoreResult<&dyn DocumentStore> {
        self.backend.as_deref().ok_or_else(StoreError::not_configured)
    }

    pub async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<DocumentId> {
        self.backend()?.insert_one(collection, doc).await
    }

    pub async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> StoreResult<Vec<DocumentId>> {
        self.backend()?.insert_many(collection, docs).await
    }

    pub async fn fetch_all(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        self.backend()?.fetch_all(collection).await
    }

    pub async fn count(&self, collection: &str) -> StoreResult<u64> {
        self.backend()?.count(collection).await
    }

    pub async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        self.backend()?.list_collection_names().await
    }
}

impl std::fmt::Debug for StoreAccessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StoreAccessor")
            .field("present", &self.is_present())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_absent_store_is_unavailable() {
        let store = StoreAccessor::absent();
        assert!(!store.is_present());

        assert_eq!(store.count("car").await, Err(StoreError::not_configured()));
        assert_eq!(store.fetch_all("car").await, Err(StoreError::not_configured()));
        assert_eq!(
            store.insert_one("booking", Document::new()).await,
            Err(StoreError::not_configured())
        );
        assert_eq!(
            store.insert_many("car", vec![Document::new()]).await,
            Err(StoreError::not_configured())
        );
        assert_eq!(
            store.list_collection_names().await,
            Err(StoreError::not_configured())
        );
    }

    #[test]
    fn test_transport_form_stringifies_id() {
        let id = uuid::Uuid::new_v4();
        let mut body = Document::new();
        body.insert("brand".to_string(), serde_json::json!("Toyota"));

        let doc = StoredDocument { id, body }.into_transport();

        assert_eq!(doc["_id"], serde_json::json!(id.to_string()));
        assert_eq!(doc["brand"], serde_json::json!("Toyota"));
    }
}
