pub mod accessor;
pub mod repository;

pub use accessor::StoreAccessor;
pub use repository::{DocumentStore, StoredDocument};

/// A schemaless record as held by the document store.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Store-assigned document identifier.
pub type DocumentId = uuid::Uuid;

/// The single failure kind of the store layer. Missing configuration,
/// connection failures and failed operations all map here.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn not_configured() -> Self {
        Self::Unavailable("database not configured".to_string())
    }

    pub fn unavailable(err: impl std::fmt::Display) -> Self {
        Self::Unavailable(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
