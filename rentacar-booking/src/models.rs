use serde::Serialize;

/// Longest error text echoed back when a booking could not be stored.
pub const MAX_MESSAGE_CHARS: usize = 120;

/// Acknowledgment returned for every validated booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum BookingOutcome {
    /// Stored durably under `booking_id`.
    #[serde(rename = "ok")]
    Persisted { booking_id: String },
    /// Taken but not stored; the record may be lost.
    #[serde(rename = "accepted")]
    Accepted { persisted: bool, message: String },
}

impl BookingOutcome {
    pub fn not_persisted(error: impl std::fmt::Display) -> Self {
        BookingOutcome::Accepted {
            persisted: false,
            message: error.to_string().chars().take(MAX_MESSAGE_CHARS).collect(),
        }
    }
}
