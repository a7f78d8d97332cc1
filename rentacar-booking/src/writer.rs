use chrono::Utc;
use rentacar_core::{Document, StoreAccessor};
use rentacar_shared::{BookingRequest, BOOKING_COLLECTION};
use serde_json::Value;
use tracing::{info, warn};

use crate::models::BookingOutcome;

/// Best-effort booking persistence. A store failure never rejects the
/// booking; it downgrades the acknowledgment instead.
#[derive(Debug, Clone)]
pub struct BookingWriter {
    store: StoreAccessor,
}

impl BookingWriter {
    pub fn new(store: StoreAccessor) -> Self {
        Self { store }
    }

    /// `request` must already have passed validation.
    pub async fn create(&self, request: &BookingRequest) -> BookingOutcome {
        let doc = match to_document(request) {
            Ok(doc) => doc,
            Err(e) => return BookingOutcome::not_persisted(e),
        };

        match self.store.insert_one(BOOKING_COLLECTION, doc).await {
            Ok(id) => {
                info!("Booking stored: {} ({})", id, request.booking_type);
                BookingOutcome::Persisted {
                    booking_id: id.to_string(),
                }
            }
            Err(e) => {
                warn!("Booking accepted without persistence: {}", e);
                BookingOutcome::not_persisted(e)
            }
        }
    }
}

fn to_document(request: &BookingRequest) -> Result<Document, serde_json::Error> {
    let mut doc = match serde_json::to_value(request)? {
        Value::Object(map) => map,
        other => {
            let mut map = Document::new();
            map.insert("payload".to_string(), other);
            map
        }
    };

    let now = Value::String(Utc::now().to_rfc3339());
    doc.insert("created_at".to_string(), now.clone());
    doc.insert("updated_at".to_string(), now);
    Ok(doc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MAX_MESSAGE_CHARS;
    use rentacar_core::DocumentStore;
    use rentacar_store::MemoryStore;
    use serde_json::json;
    use std::sync::Arc;

    fn request() -> BookingRequest {
        serde_json::from_value(json!({
            "type": "car",
            "pickup_location": "Tunis Airport",
            "pickup_date": "2024-06-01",
            "car_id": "abc123",
            "full_name": "Jane Doe",
            "phone": "+21650000000",
            "email": "jane@example.com"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_persisted_booking() {
        let store = Arc::new(MemoryStore::new());
        let writer = BookingWriter::new(StoreAccessor::new(store.clone()));

        let outcome = writer.create(&request()).await;
        let booking_id = match outcome {
            BookingOutcome::Persisted { booking_id } => booking_id,
            other => panic!("expected persisted booking, got {:?}", other),
        };
        assert!(!booking_id.is_empty());

        let stored = store.fetch_all("booking").await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id.to_string(), booking_id);
        assert_eq!(stored[0].body["type"], json!("car"));
        assert_eq!(stored[0].body["email"], json!("jane@example.com"));
        assert_eq!(stored[0].body["passengers"], json!(1));
        assert!(stored[0].body["dropoff_date"].is_null());
        assert!(stored[0].body["created_at"].is_string());
    }

    #[tokio::test]
    async fn test_unreachable_store_is_accepted() {
        let writer = BookingWriter::new(StoreAccessor::new(Arc::new(MemoryStore::unreachable())));

        match writer.create(&request()).await {
            BookingOutcome::Accepted { persisted, message } => {
                assert!(!persisted);
                assert!(!message.is_empty());
                assert!(message.chars().count() <= MAX_MESSAGE_CHARS);
            }
            other => panic!("expected accepted booking, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_absent_store_is_accepted() {
        let writer = BookingWriter::new(StoreAccessor::absent());

        let outcome = writer.create(&request()).await;
        assert!(matches!(outcome, BookingOutcome::Accepted { persisted: false, .. }));
    }
}
