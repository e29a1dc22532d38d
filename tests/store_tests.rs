//! Behavioral tests for the in-memory person store.

use person_registry::models::Person;
use person_registry::store::{InMemoryStore, PersonStore, StoreError};

#[tokio::test]
async fn new_store_is_empty() {
    let store = InMemoryStore::new();
    assert!(store.list().await.unwrap().is_empty());
    assert!(store.is_empty());
}

#[tokio::test]
async fn add_grows_the_store_by_one() {
    let store = InMemoryStore::new();
    let before = store.list().await.unwrap().len();

    store
        .add(Person::new("1", "Steve", "Jobs"))
        .await
        .unwrap();

    let after = store.list().await.unwrap();
    assert_eq!(after.len(), before + 1);
    assert_eq!(after[0].first_name, "Steve");
    assert_eq!(after[0].last_name, "Jobs");
}

#[tokio::test]
async fn update_keeps_id_and_replaces_names() {
    let store = InMemoryStore::with_persons(vec![
        Person::new("12345", "Mark", "Zuckerberg"),
        Person::new("67890", "Elon", "Musk"),
    ]);

    store
        .update(Person::new("12345", "NewName", "NewLastName"))
        .await
        .unwrap();

    let persons = store.list().await.unwrap();
    let updated = persons.iter().find(|p| p.id == "12345").unwrap();
    assert_eq!(updated.first_name, "NewName");
    assert_eq!(updated.last_name, "NewLastName");
    // The other record is untouched
    assert_eq!(persons.iter().find(|p| p.id == "67890").unwrap().first_name, "Elon");
}

#[tokio::test]
async fn remove_shrinks_the_store_by_one() {
    let store = InMemoryStore::with_persons(vec![
        Person::new("12345", "Mark", "Zuckerberg"),
        Person::new("67890", "Elon", "Musk"),
    ]);

    store.remove("12345").await.unwrap();

    let persons = store.list().await.unwrap();
    assert_eq!(persons.len(), 1);
    assert!(persons.iter().all(|p| p.id != "12345"));
}

#[tokio::test]
async fn add_list_remove_round_trips_the_size() {
    let store = InMemoryStore::with_persons(vec![Person::new("seed", "A", "B")]);
    let before = store.list().await.unwrap().len();

    let added = store
        .add(Person::new("temp", "Round", "Trip"))
        .await
        .unwrap();
    assert_eq!(store.list().await.unwrap().len(), before + 1);

    store.remove(&added.id).await.unwrap();
    assert_eq!(store.list().await.unwrap().len(), before);
}

#[tokio::test]
async fn missing_ids_surface_not_found() {
    let store = InMemoryStore::new();

    let update_err = store
        .update(Person::new("ghost", "No", "One"))
        .await
        .unwrap_err();
    assert!(matches!(update_err, StoreError::NotFound { ref id } if id == "ghost"));

    let remove_err = store.remove("ghost").await.unwrap_err();
    assert!(matches!(remove_err, StoreError::NotFound { .. }));
}

#[tokio::test]
async fn concurrent_adds_are_all_recorded() {
    use std::sync::Arc;

    let store = Arc::new(InMemoryStore::new());
    let mut handles = Vec::new();
    for i in 0..16 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            store
                .add(Person::new(format!("id-{i}"), "Worker", format!("{i}")))
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(store.list().await.unwrap().len(), 16);
}
