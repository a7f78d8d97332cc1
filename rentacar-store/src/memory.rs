use async_trait::async_trait;
use rentacar_core::{Document, DocumentId, DocumentStore, StoreError, StoreResult, StoredDocument};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process document store. Used for local runs and tests; it can be
/// switched into a failing state to simulate an unreachable database.
pub struct MemoryStore {
    collections: RwLock<BTreeMap<String, Vec<StoredDocument>>>,
    failing: AtomicBool,
    failure_reason: String,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            collections: RwLock::default(),
            failing: AtomicBool::new(false),
            failure_reason: "connection refused".to_string(),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails.
    pub fn unreachable() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    /// A failing store reporting `reason` as its error.
    pub fn unreachable_with(reason: impl Into<String>) -> Self {
        let store = Self {
            failure_reason: reason.into(),
            ..Self::default()
        };
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable(&self.failure_reason));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<DocumentId> {
        self.check()?;
        let id = Uuid::new_v4();
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument { id, body: doc });
        Ok(id)
    }

    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> StoreResult<Vec<DocumentId>> {
        self.check()?;
        if docs.is_empty() {
            return Ok(Vec::new());
        }

        let mut collections = self.collections.write().await;
        let stored = collections.entry(collection.to_string()).or_default();
        let ids = docs
            .into_iter()
            .map(|body| {
                let id = Uuid::new_v4();
                stored.push(StoredDocument { id, body });
                id
            })
            .collect();
        Ok(ids)
    }

    async fn fetch_all(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        self.check()?;
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn count(&self, collection: &str) -> StoreResult<u64> {
        self.check()?;
        let collections = self.collections.read().await;
        Ok(collections.get(collection).map_or(0, |docs| docs.len() as u64))
    }

    async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        self.check()?;
        let collections = self.collections.read().await;
        Ok(collections.keys().cloned().collect())
    }
}
