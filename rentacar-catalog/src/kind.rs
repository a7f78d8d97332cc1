use rentacar_core::Document;
use rentacar_shared::samples::{sample_cars, sample_excursions};
use rentacar_shared::{CAR_COLLECTION, EXCURSION_COLLECTION};
use serde::Serialize;
use serde_json::Value;

/// Entity kinds served by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    Car,
    Excursion,
}

impl CatalogKind {
    pub fn collection(self) -> &'static str {
        match self {
            CatalogKind::Car => CAR_COLLECTION,
            CatalogKind::Excursion => EXCURSION_COLLECTION,
        }
    }

    /// The fixed sample set for this kind, as documents without identifiers.
    /// Samples that fail validation are left out.
    pub fn samples(self) -> Vec<Document> {
        match self {
            CatalogKind::Car => sample_cars()
                .iter()
                .filter(|car| car.validate().is_ok())
                .filter_map(to_document)
                .collect(),
            CatalogKind::Excursion => sample_excursions()
                .iter()
                .filter(|excursion| excursion.validate().is_ok())
                .filter_map(to_document)
                .collect(),
        }
    }
}

fn to_document<T: Serialize>(value: &T) -> Option<Document> {
    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Some(map),
        _ => None,
    }
}
