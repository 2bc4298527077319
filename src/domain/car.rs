//! Car domain model.
//!
//! This module defines the core `CarRecord` type: one listing in the inventory
//! returned by the data endpoint. Records are created once per session from
//! the fetch response and treated as immutable afterwards; nothing in the
//! crate mutates a record in place.

use serde::{Deserialize, Serialize};

/// One car listing from the inventory endpoint.
///
/// The wire format is a JSON object with an `id`, descriptive text fields,
/// and an integer price in currency-agnostic units. The body style travels
/// as `type` on the wire, which is a keyword in Rust, so it is renamed to
/// `body` here.
///
/// # Fields
///
/// - `id`: unique, stable identifier within one fetch snapshot
/// - `name`: display name (e.g. "Nexon EV")
/// - `brand`: manufacturer name
/// - `fuel`: fuel type facet value (e.g. "petrol", "diesel", "electric")
/// - `body`: body style facet value (e.g. "SUV", "sedan")
/// - `seats`: seat count
/// - `price`: non-negative price in integer units
/// - `image`: image URI, unused by the terminal UI but preserved round-trip
/// - `description`: optional free text shown in the detail overlay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarRecord {
    pub id: u64,
    pub name: String,
    pub brand: String,
    pub fuel: String,
    #[serde(rename = "type")]
    pub body: String,
    #[serde(default)]
    pub seats: u32,
    pub price: u64,
    #[serde(default)]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CarRecord {
    /// Returns the detail-overlay description, falling back to a fixed
    /// placeholder when the record carries none.
    #[must_use]
    pub fn description_or_default(&self) -> &str {
        self.description
            .as_deref()
            .unwrap_or("No description available.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_wire_record_with_type_field() {
        let json = r#"{
            "id": 3,
            "name": "Nexon EV",
            "brand": "Tata",
            "fuel": "electric",
            "type": "SUV",
            "seats": 5,
            "price": 1500000,
            "image": "https://example.com/nexon-ev.jpg",
            "description": "Electric compact SUV"
        }"#;

        let car: CarRecord = serde_json::from_str(json).unwrap();
        assert_eq!(car.id, 3);
        assert_eq!(car.body, "SUV");
        assert_eq!(car.description.as_deref(), Some("Electric compact SUV"));
    }

    #[test]
    fn missing_optional_fields_default() {
        let json = r#"{"id":1,"name":"Alto","brand":"Maruti","fuel":"petrol","type":"hatchback","price":500000}"#;

        let car: CarRecord = serde_json::from_str(json).unwrap();
        assert_eq!(car.seats, 0);
        assert_eq!(car.image, "");
        assert!(car.description.is_none());
        assert_eq!(car.description_or_default(), "No description available.");
    }

    #[test]
    fn reencodes_body_as_type() {
        let json = r#"{"id":1,"name":"Alto","brand":"Maruti","fuel":"petrol","type":"hatchback","price":500000}"#;
        let car: CarRecord = serde_json::from_str(json).unwrap();
        let encoded = serde_json::to_value(&car).unwrap();
        assert_eq!(encoded["type"], "hatchback");
        assert!(encoded.get("body").is_none());
    }
}
