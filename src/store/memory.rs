//! In-memory implementation of the person store.

use async_trait::async_trait;
use parking_lot::RwLock;

use super::repository::{PersonStore, StoreError, StoreResult};
use crate::models::Person;

/// In-memory person store for the process lifetime.
///
/// Backed by a `Vec` in insertion order behind a single `RwLock`. All records
/// vanish when the process exits; there is no persistence.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    persons: RwLock<Vec<Person>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given records, preserving order.
    pub fn with_persons(persons: Vec<Person>) -> Self {
        Self {
            persons: RwLock::new(persons),
        }
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.persons.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.read().is_empty()
    }
}

#[async_trait]
impl PersonStore for InMemoryStore {
    async fn list(&self) -> StoreResult<Vec<Person>> {
        Ok(self.persons.read().clone())
    }

    async fn add(&self, person: Person) -> StoreResult<Person> {
        let mut persons = self.persons.write();
        persons.push(person.clone());
        Ok(person)
    }

    async fn update(&self, person: Person) -> StoreResult<Person> {
        let mut persons = self.persons.write();
        // Duplicate ids are tolerated; the first match in insertion order wins.
        match persons.iter_mut().find(|p| p.id == person.id) {
            Some(existing) => {
                existing.first_name = person.first_name;
                existing.last_name = person.last_name;
                Ok(existing.clone())
            }
            None => Err(StoreError::not_found(person.id)),
        }
    }

    async fn remove(&self, id: &str) -> StoreResult<Person> {
        let mut persons = self.persons.write();
        match persons.iter().position(|p| p.id == id) {
            Some(index) => Ok(persons.remove(index)),
            None => Err(StoreError::not_found(id)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_appends_in_order() {
        let store = InMemoryStore::new();
        store.add(Person::new("1", "Mark", "Zuckerberg")).await.unwrap();
        store.add(Person::new("2", "Elon", "Musk")).await.unwrap();

        let persons = store.list().await.unwrap();
        assert_eq!(persons.len(), 2);
        assert_eq!(persons[0].first_name, "Mark");
        assert_eq!(persons[1].first_name, "Elon");
    }

    #[tokio::test]
    async fn update_replaces_names_in_place() {
        let store = InMemoryStore::with_persons(vec![Person::new("12345", "Mark", "Zuckerberg")]);

        let updated = store
            .update(Person::new("12345", "NewName", "NewLastName"))
            .await
            .unwrap();
        assert_eq!(updated.id, "12345");
        assert_eq!(updated.first_name, "NewName");

        let persons = store.list().await.unwrap();
        assert_eq!(persons.len(), 1);
        assert_eq!(persons[0].last_name, "NewLastName");
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let store = InMemoryStore::new();
        let err = store
            .update(Person::new("missing", "A", "B"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id } if id == "missing"));
    }

    #[tokio::test]
    async fn remove_drops_the_record() {
        let store = InMemoryStore::with_persons(vec![
            Person::new("12345", "Mark", "Zuckerberg"),
            Person::new("67890", "Elon", "Musk"),
        ]);

        let removed = store.remove("12345").await.unwrap();
        assert_eq!(removed.first_name, "Mark");

        let persons = store.list().await.unwrap();
        assert_eq!(persons.len(), 1);
        assert!(persons.iter().all(|p| p.id != "12345"));
    }

    #[tokio::test]
    async fn remove_missing_id_is_not_found() {
        let store = InMemoryStore::new();
        let err = store.remove("nope").await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn duplicate_ids_update_first_match_only() {
        let store = InMemoryStore::with_persons(vec![
            Person::new("dup", "First", "Copy"),
            Person::new("dup", "Second", "Copy"),
        ]);

        store
            .update(Person::new("dup", "Changed", "Copy"))
            .await
            .unwrap();

        let persons = store.list().await.unwrap();
        assert_eq!(persons[0].first_name, "Changed");
        assert_eq!(persons[1].first_name, "Second");
    }

    #[tokio::test]
    async fn list_returns_a_snapshot() {
        let store = InMemoryStore::new();
        let before = store.list().await.unwrap();
        store.add(Person::new("1", "Steve", "Jobs")).await.unwrap();
        // The earlier snapshot is unaffected by the mutation.
        assert!(before.is_empty());
        assert_eq!(store.len(), 1);
    }
}
