//! Random demonstration-data generation.
//!
//! The nations and currencies endpoints synthesize their payloads from a
//! [`FakeDataSource`] instead of reaching into a concrete generator, so the
//! production randomized source can be swapped for a deterministic one in
//! tests. The source is injected into the application state as
//! `Arc<dyn FakeDataSource>` by the composition root.

pub mod faker;

pub use faker::Faker;

use crate::models::{Currency, Nation};

/// Source of randomly generated demonstration data.
pub trait FakeDataSource: Send + Sync {
    /// Produce the next nation record. Every field is non-empty.
    fn next_nation(&self) -> Nation;

    /// Produce the next currency record. Both fields are non-empty.
    fn next_currency(&self) -> Currency;
}
