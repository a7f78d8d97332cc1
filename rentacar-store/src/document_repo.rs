use async_trait::async_trait;
use rentacar_core::{Document, DocumentId, DocumentStore, StoreError, StoreResult, StoredDocument};
use sqlx::types::Json;
use sqlx::PgPool;
use tokio::sync::OnceCell;
use uuid::Uuid;

use crate::database::ensure_schema;

/// Document collections kept as JSONB rows in a single `documents` table.
///
/// The table is created on first use. A failed attempt leaves the store
/// unprepared, so the next operation tries again.
pub struct PgDocumentStore {
    pool: PgPool,
    schema: OnceCell<()>,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            schema: OnceCell::new(),
        }
    }

    pub async fn prepare(&self) -> StoreResult<()> {
        self.schema
            .get_or_try_init(|| ensure_schema(&self.pool))
            .await
            .map_err(StoreError::unavailable)?;
        Ok(())
    }

    pub fn is_prepared(&self) -> bool {
        self.schema.initialized()
    }
}

#[derive(sqlx::FromRow)]
struct DocumentRow {
    id: Uuid,
    body: Json<Document>,
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<DocumentId> {
        self.prepare().await?;
        let id = Uuid::new_v4();

        sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
            .bind(id)
            .bind(collection)
            .bind(Json(&doc))
            .execute(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        Ok(id)
    }

    async fn insert_many(
        &self,
        collection: &str,
        docs: Vec<Document>,
    ) -> StoreResult<Vec<DocumentId>> {
        self.prepare().await?;
        let mut tx = self.pool.begin().await.map_err(StoreError::unavailable)?;
        let mut ids = Vec::with_capacity(docs.len());

        for doc in &docs {
            let id = Uuid::new_v4();
            sqlx::query("INSERT INTO documents (id, collection, body) VALUES ($1, $2, $3)")
                .bind(id)
                .bind(collection)
                .bind(Json(doc))
                .execute(&mut *tx)
                .await
                .map_err(StoreError::unavailable)?;
            ids.push(id);
        }

        tx.commit().await.map_err(StoreError::unavailable)?;
        Ok(ids)
    }

    async fn fetch_all(&self, collection: &str) -> StoreResult<Vec<StoredDocument>> {
        self.prepare().await?;
        let rows: Vec<DocumentRow> =
            sqlx::query_as("SELECT id, body FROM documents WHERE collection = $1 ORDER BY seq")
                .bind(collection)
                .fetch_all(&self.pool)
                .await
                .map_err(StoreError::unavailable)?;

        Ok(rows
            .into_iter()
            .map(|row| StoredDocument {
                id: row.id,
                body: row.body.0,
            })
            .collect())
    }

    async fn count(&self, collection: &str) -> StoreResult<u64> {
        self.prepare().await?;
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE collection = $1")
            .bind(collection)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::unavailable)?;

        Ok(u64::try_from(count).unwrap_or_default())
    }

    async fn list_collection_names(&self) -> StoreResult<Vec<String>> {
        self.prepare().await?;
        sqlx::query_scalar("SELECT DISTINCT collection FROM documents ORDER BY collection")
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::unavailable)
    }
}
