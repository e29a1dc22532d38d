//! # Person Registry
//!
//! A small demonstration web service built on axum. It exposes a handful of
//! REST/MVC endpoints: a health check, a version string, two endpoints
//! returning freshly generated fake data (nations, currencies), and a full
//! CRUD flow over an in-memory collection of person records rendered through
//! server-side views.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`models`]: Domain types (Person, Nation, Currency)
//! - [`store`]: Person storage behind the repository pattern
//! - [`fakedata`]: Random demonstration-data generation
//! - [`http`]: Axum-based HTTP server, handlers, and view rendering
//! - [`config`]: Server configuration from environment variables
//!
//! The binary (`registry-server`) is the composition root: it constructs the
//! store and the fake-data source, injects them into the shared application
//! state, and serves the router.

pub mod config;
pub mod fakedata;
pub mod http;
pub mod models;
pub mod store;
