use serde::{Deserialize, Serialize};

use super::{require_non_negative, require_range, require_text, ValidationError};

/// A rental car as listed in the catalog. Prices are in TND.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub brand: String,
    pub model: String,
    /// "Manual" or "Automatic"; not enforced.
    pub transmission: String,
    pub seats: u8,
    /// Petrol, Diesel, Hybrid, EV...
    pub fuel: String,
    pub price_per_day: f64,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
}

impl Car {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("brand", &self.brand)?;
        require_text("model", &self.model)?;
        require_text("transmission", &self.transmission)?;
        require_range("seats", i64::from(self.seats), 1, 9)?;
        require_text("fuel", &self.fuel)?;
        require_non_negative("price_per_day", self.price_per_day)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corolla() -> Car {
        Car {
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            transmission: "Automatic".to_string(),
            seats: 5,
            fuel: "Petrol".to_string(),
            price_per_day: 120.0,
            image: None,
            features: vec!["A/C".to_string()],
        }
    }

    #[test]
    fn test_seat_bounds() {
        let mut car = corolla();
        assert!(car.validate().is_ok());

        car.seats = 0;
        assert_eq!(
            car.validate(),
            Err(ValidationError::OutOfRange { field: "seats", min: 1, max: 9, actual: 0 })
        );

        car.seats = 10;
        assert!(car.validate().is_err());
    }

    #[test]
    fn test_negative_price_rejected() {
        let mut car = corolla();
        car.price_per_day = -1.0;
        assert_eq!(car.validate(), Err(ValidationError::Negative { field: "price_per_day" }));
    }

    #[test]
    fn test_optional_fields_default() {
        let car: Car = serde_json::from_value(serde_json::json!({
            "brand": "Kia",
            "model": "Picanto",
            "transmission": "Manual",
            "seats": 4,
            "fuel": "Petrol",
            "price_per_day": 80.0
        }))
        .unwrap();

        assert_eq!(car.image, None);
        assert!(car.features.is_empty());
    }
}
