//! Fixed catalog served on first run and whenever the store is unreachable.

use crate::models::{Car, Excursion};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn unsplash(photo: &str) -> Option<String> {
    Some(format!(
        "https://images.unsplash.com/{photo}?q=80&w=1200&auto=format&fit=crop"
    ))
}

pub fn sample_cars() -> Vec<Car> {
    vec![
        Car {
            brand: "Toyota".to_string(),
            model: "Corolla".to_string(),
            transmission: "Automatic".to_string(),
            seats: 5,
            fuel: "Petrol".to_string(),
            price_per_day: 120.0,
            image: unsplash("photo-1619767886558-efdc259cde1a"),
            features: tags(&["A/C", "Bluetooth", "USB", "ABS"]),
        },
        Car {
            brand: "Volkswagen".to_string(),
            model: "Golf".to_string(),
            transmission: "Manual".to_string(),
            seats: 5,
            fuel: "Diesel".to_string(),
            price_per_day: 140.0,
            image: unsplash("photo-1555215695-3004980ad54e"),
            features: tags(&["A/C", "CarPlay", "Cruise", "Sensors"]),
        },
        Car {
            brand: "Hyundai".to_string(),
            model: "i10".to_string(),
            transmission: "Automatic".to_string(),
            seats: 4,
            fuel: "Petrol".to_string(),
            price_per_day: 90.0,
            image: unsplash("photo-1549921296-3cce18d7c7c7"),
            features: tags(&["A/C", "Bluetooth", "Eco"]),
        },
    ]
}

pub fn sample_excursions() -> Vec<Excursion> {
    vec![
        Excursion {
            title: "Medina of Tunis & Sidi Bou Said".to_string(),
            region: "Tunis".to_string(),
            duration_hours: 8,
            price_per_person: 180.0,
            description: "Discover the UNESCO-listed medina and the blue-white village by the sea."
                .to_string(),
            image: unsplash("photo-1597248881519-ef9a5b1f407f"),
            highlights: tags(&["Zitouna Mosque", "Souks", "Cafés of Sidi Bou Said"]),
        },
        Excursion {
            title: "Sahara Adventure: Douz & Ksar Ghilane".to_string(),
            region: "Kebili".to_string(),
            duration_hours: 14,
            price_per_person: 350.0,
            description: "Full-day desert tour with dunes, oasis, and optional camel ride."
                .to_string(),
            image: unsplash("photo-1516426122078-c23e76319801"),
            highlights: tags(&["Grand Erg", "Hot Spring Oasis", "Camel ride"]),
        },
        Excursion {
            title: "El Jem Amphitheatre & Monastir".to_string(),
            region: "Mahdia".to_string(),
            duration_hours: 9,
            price_per_person: 220.0,
            description: "Explore the Roman Colosseum of Africa and coastal Monastir.".to_string(),
            image: unsplash("photo-1602854375907-6d8ab9b3138c"),
            highlights: tags(&["El Jem", "Ribat Monastir", "Marina"]),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_samples_are_valid() {
        let cars = sample_cars();
        let excursions = sample_excursions();

        assert_eq!(cars.len(), 3);
        assert_eq!(excursions.len(), 3);
        assert!(cars.iter().all(|c| c.validate().is_ok()));
        assert!(excursions.iter().all(|e| e.validate().is_ok()));
    }

    #[test]
    fn test_image_urls() {
        let cars = sample_cars();
        assert_eq!(
            cars[0].image.as_deref(),
            Some("https://images.unsplash.com/photo-1619767886558-efdc259cde1a?q=80&w=1200&auto=format&fit=crop")
        );
    }
}
