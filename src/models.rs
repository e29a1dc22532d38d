//! Domain types shared across the store, fake-data, and HTTP layers.
//!
//! All types serialize with camelCase field names so the JSON surface matches
//! the documented API (`firstName`, `capitalCity`, ...).

use serde::{Deserialize, Serialize};

/// A person record held by the in-memory store.
///
/// The `id` is the lookup key for update and remove operations. The store
/// does not enforce id uniqueness; callers that need unique ids must supply
/// them (the add flow generates a fresh UUID when the caller does not).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }
}

/// A randomly generated nation record. Ephemeral: generated per request,
/// never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Nation {
    pub nationality: String,
    pub capital_city: String,
    pub flag: String,
    pub language: String,
}

/// A randomly generated currency record. Ephemeral, like [`Nation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Currency {
    pub name: String,
    pub code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_serializes_with_camel_case_fields() {
        let person = Person::new("12345", "Mark", "Zuckerberg");
        let json = serde_json::to_value(&person).unwrap();
        assert_eq!(json["id"], "12345");
        assert_eq!(json["firstName"], "Mark");
        assert_eq!(json["lastName"], "Zuckerberg");
    }

    #[test]
    fn nation_serializes_with_camel_case_fields() {
        let nation = Nation {
            nationality: "French".to_string(),
            capital_city: "Paris".to_string(),
            flag: "\u{1F1EB}\u{1F1F7}".to_string(),
            language: "French".to_string(),
        };
        let json = serde_json::to_value(&nation).unwrap();
        assert_eq!(json["capitalCity"], "Paris");
        assert_eq!(json["nationality"], "French");
    }

    #[test]
    fn person_round_trips_through_json() {
        let person = Person::new("1", "Steve", "Jobs");
        let json = serde_json::to_string(&person).unwrap();
        let back: Person = serde_json::from_str(&json).unwrap();
        assert_eq!(back, person);
    }
}
