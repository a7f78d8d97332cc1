pub mod kind;
pub mod reader;

pub use kind::CatalogKind;
pub use reader::{CatalogListing, CatalogReader, ListingSource, SeedOutcome};
