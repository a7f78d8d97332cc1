pub mod models;
pub mod pii;
pub mod samples;

pub use models::{BookingRequest, Car, Excursion, ValidationError};
pub use pii::{Email, Masked};

/// Collection holding car documents.
pub const CAR_COLLECTION: &str = "car";
/// Collection holding excursion documents.
pub const EXCURSION_COLLECTION: &str = "excursion";
/// Collection holding booking documents.
pub const BOOKING_COLLECTION: &str = "booking";
