use rentacar_core::{Document, StoreAccessor, StoreError, StoredDocument};
use tracing::{debug, info, warn};

use crate::kind::CatalogKind;

/// Result of a seed check.
#[derive(Debug, Clone, PartialEq)]
pub enum SeedOutcome {
    /// The collection already had documents.
    AlreadySeeded,
    /// The collection was empty and the samples were inserted.
    Seeded(usize),
    /// The store could not be used; nothing was written.
    Skipped(StoreError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingSource {
    Store,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct CatalogListing {
    pub source: ListingSource,
    pub items: Vec<Document>,
}

/// Serves car and excursion listings, seeding empty collections on first
/// read and falling back to the built-in samples when the store fails.
#[derive(Debug, Clone)]
pub struct CatalogReader {
    store: StoreAccessor,
}

impl CatalogReader {
    pub fn new(store: StoreAccessor) -> Self {
        Self { store }
    }

    /// Inserts the sample set when the collection is empty. Never fails.
    pub async fn ensure_seeded(&self, kind: CatalogKind) -> SeedOutcome {
        let collection = kind.collection();

        let count = match self.store.count(collection).await {
            Ok(count) => count,
            Err(e) => return SeedOutcome::Skipped(e),
        };
        if count > 0 {
            return SeedOutcome::AlreadySeeded;
        }

        match self.store.insert_many(collection, kind.samples()).await {
            Ok(ids) => {
                info!("Seeded {} sample documents into {}", ids.len(), collection);
                SeedOutcome::Seeded(ids.len())
            }
            Err(e) => SeedOutcome::Skipped(e),
        }
    }

    pub async fn list(&self, kind: CatalogKind) -> CatalogListing {
        if let SeedOutcome::Skipped(e) = self.ensure_seeded(kind).await {
            debug!("Seeding {} skipped: {}", kind.collection(), e);
        }

        match self.store.fetch_all(kind.collection()).await {
            Ok(docs) => CatalogListing {
                source: ListingSource::Store,
                items: docs.into_iter().map(StoredDocument::into_transport).collect(),
            },
            Err(e) => {
                warn!("Serving sample {} listing: {}", kind.collection(), e);
                CatalogListing {
                    source: ListingSource::Fallback,
                    items: kind.samples(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rentacar_core::DocumentStore;
    use rentacar_store::MemoryStore;
    use serde_json::json;
    use std::sync::Arc;

    fn reader_with(store: Arc<MemoryStore>) -> CatalogReader {
        CatalogReader::new(StoreAccessor::new(store))
    }

    #[tokio::test]
    async fn test_absent_store_serves_samples() {
        let reader = CatalogReader::new(StoreAccessor::absent());

        for kind in [CatalogKind::Car, CatalogKind::Excursion] {
            let listing = reader.list(kind).await;
            assert_eq!(listing.source, ListingSource::Fallback);
            assert_eq!(listing.items, kind.samples());
        }
    }

    #[tokio::test]
    async fn test_unreachable_store_serves_samples() {
        let reader = reader_with(Arc::new(MemoryStore::unreachable()));

        assert!(matches!(
            reader.ensure_seeded(CatalogKind::Car).await,
            SeedOutcome::Skipped(_)
        ));

        let listing = reader.list(CatalogKind::Excursion).await;
        assert_eq!(listing.source, ListingSource::Fallback);
        assert_eq!(listing.items.len(), 3);
    }

    #[tokio::test]
    async fn test_first_read_seeds_and_stringifies_ids() {
        let store = Arc::new(MemoryStore::new());
        let reader = reader_with(store.clone());

        let listing = reader.list(CatalogKind::Car).await;
        assert_eq!(listing.source, ListingSource::Store);
        assert_eq!(listing.items.len(), 3);

        let stored = store.fetch_all("car").await.unwrap();
        for (item, (doc, sample)) in listing
            .items
            .iter()
            .zip(stored.iter().zip(CatalogKind::Car.samples()))
        {
            assert_eq!(item["_id"], json!(doc.id.to_string()));
            let mut without_id = item.clone();
            without_id.remove("_id");
            assert_eq!(without_id, sample);
        }

        // only the requested collection is seeded
        assert_eq!(store.count("excursion").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seeding_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        let reader = reader_with(store.clone());

        assert_eq!(reader.ensure_seeded(CatalogKind::Excursion).await, SeedOutcome::Seeded(3));
        assert_eq!(reader.ensure_seeded(CatalogKind::Excursion).await, SeedOutcome::AlreadySeeded);
        reader.list(CatalogKind::Excursion).await;

        assert_eq!(store.count("excursion").await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_existing_documents_are_not_replaced() {
        let store = Arc::new(MemoryStore::new());
        let mut custom = Document::new();
        custom.insert("brand".to_string(), json!("Dacia"));
        custom.insert("model".to_string(), json!("Logan"));
        custom.insert("extra".to_string(), json!({"kept": true}));
        store.insert_one("car", custom).await.unwrap();

        let listing = reader_with(store).list(CatalogKind::Car).await;

        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0]["brand"], json!("Dacia"));
        assert_eq!(listing.items[0]["extra"], json!({"kept": true}));
    }
}
