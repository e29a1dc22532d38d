//! HTTP server module.
//!
//! This module provides an axum-based HTTP server exposing the demonstration
//! endpoints and the person CRUD flow.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                              │
//! │  - Request parsing and validation                        │
//! │  - JSON serialization / view rendering / redirects       │
//! │  - CORS, compression, tracing, error handling            │
//! └───────────────┬─────────────────────┬────────────────────┘
//!                 │                     │
//! ┌───────────────▼─────────┐ ┌─────────▼────────────────────┐
//! │  Person store           │ │  Fake-data source            │
//! │  (store::PersonStore)   │ │  (fakedata::FakeDataSource)  │
//! └─────────────────────────┘ └──────────────────────────────┘
//! ```
//!
//! Routes that render pages hand the view layer a view identifier and a named
//! attribute map (see [`views`]); the JSON endpoints serialize domain types
//! directly.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
pub mod views;

pub use router::create_router;
pub use state::AppState;
