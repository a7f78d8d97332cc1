use serde::{Deserialize, Deserializer, Serialize};

use super::{require_range, require_text, ValidationError};
use crate::pii::{Email, Masked};

/// Inbound booking payload.
///
/// Shape and email format are checked while deserializing; the remaining
/// constraints are checked by [`BookingRequest::validate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    /// "car", "excursion" or "combo". Not a closed set.
    #[serde(rename = "type")]
    pub booking_type: String,
    pub pickup_location: String,
    #[serde(default)]
    pub dropoff_location: Option<String>,
    pub pickup_date: String,
    #[serde(default)]
    pub dropoff_date: Option<String>,
    #[serde(default)]
    pub car_id: Option<String>,
    #[serde(default)]
    pub excursion_id: Option<String>,
    pub full_name: String,
    pub phone: Masked<String>,
    pub email: Email,
    /// Missing or `null` means a single passenger.
    #[serde(default = "default_passengers", deserialize_with = "passengers_or_default")]
    pub passengers: u32,
    #[serde(default)]
    pub notes: Option<String>,
}

fn default_passengers() -> u32 {
    1
}

fn passengers_or_default<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_else(default_passengers))
}

impl BookingRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("type", &self.booking_type)?;
        require_text("pickup_location", &self.pickup_location)?;
        require_text("pickup_date", &self.pickup_date)?;
        require_text("full_name", &self.full_name)?;
        require_text("phone", &self.phone.0)?;
        require_range("passengers", i64::from(self.passengers), 1, 50)?;
        Ok(())
    }
}
