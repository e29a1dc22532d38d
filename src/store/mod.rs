//! Person storage behind the repository pattern.
//!
//! The store is the single authoritative, in-memory collection of person
//! records for the process lifetime. It is deliberately abstracted behind the
//! [`PersonStore`] trait so alternative backends can be swapped in without
//! touching the HTTP layer:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                 │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  PersonStore trait (repository.rs)          │
//! └───────────────────┬─────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────┐
//! │  InMemoryStore (memory.rs)                  │
//! │  RwLock<Vec<Person>>, process lifetime only │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The store instance is constructed once by the composition root and passed
//! to handlers as `Arc<dyn PersonStore>` through the application state; there
//! is no process-global singleton.

pub mod memory;
pub mod repository;

pub use memory::InMemoryStore;
pub use repository::{PersonStore, StoreError, StoreResult};
