use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_range, require_text, ValidationError};

/// A guided excursion. Prices are per person, in TND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Excursion {
    pub title: String,
    /// Region or city, e.g. Tunis or Tozeur.
    pub region: String,
    pub duration_hours: u8,
    pub price_per_person: f64,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Excursion {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("title", &self.title)?;
        require_text("region", &self.region)?;
        require_range("duration_hours", i64::from(self.duration_hours), 1, 72)?;
        require_non_negative("price_per_person", self.price_per_person)?;
        require_text("description", &self.description)?;
        Ok(())
    }
}
