use std::sync::Arc;

use rentacar_booking::BookingWriter;
use rentacar_catalog::CatalogReader;
use rentacar_core::StoreAccessor;
use rentacar_store::app_config::DatabaseConfig;
use rentacar_store::{DbClient, PgDocumentStore};
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogReader,
    pub bookings: BookingWriter,
    pub store: StoreAccessor,
    pub database: DatabaseConfig,
}

impl AppState {
    pub fn new(store: StoreAccessor, database: DatabaseConfig) -> Self {
        Self {
            catalog: CatalogReader::new(store.clone()),
            bookings: BookingWriter::new(store.clone()),
            store,
            database,
        }
    }
}

/// Builds the store handle once at startup. Missing or unusable configuration
/// yields an absent store; the handle is never rebuilt afterwards.
pub async fn connect_store(database: &DatabaseConfig) -> StoreAccessor {
    let Some((url, name)) = database.connection() else {
        warn!("DATABASE_URL or DATABASE_NAME not set; serving fallback data");
        return StoreAccessor::absent();
    };

    let db = match DbClient::connect_lazy(url, name) {
        Ok(db) => db,
        Err(e) => {
            error!("Invalid database configuration: {}", e);
            return StoreAccessor::absent();
        }
    };

    let documents = PgDocumentStore::new(db.pool);
    if let Err(e) = documents.prepare().await {
        // Retried on the next store operation
        warn!("Could not prepare documents table: {}", e);
    }

    info!("Document store configured for database {}", name);
    StoreAccessor::new(Arc::new(documents))
}
