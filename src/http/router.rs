//! Router configuration for the HTTP server.
//!
//! This module sets up all routes and middleware (CORS, compression,
//! tracing) and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Person CRUD pages and JSON endpoints
    let person = Router::new()
        .route("/", get(handlers::index))
        .route("/home", get(handlers::index))
        .route("/index", get(handlers::index))
        .route("/testRetrieve", get(handlers::retrieve_persons))
        .route("/personList", get(handlers::person_list))
        .route(
            "/addPerson",
            get(handlers::show_add_person).post(handlers::save_person),
        )
        .route("/personToEdit", post(handlers::person_to_edit))
        .route("/personEdit", post(handlers::person_edit))
        .route("/personDelete", post(handlers::person_delete));

    // Combine all routes
    Router::new()
        .route("/", get(handlers::health_check))
        .route("/version", get(handlers::version))
        .route("/nations", get(handlers::nations))
        .route("/currencies", get(handlers::currencies))
        .nest("/person", person)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakedata::Faker;
    use crate::store::InMemoryStore;
    use std::sync::Arc;

    #[test]
    fn router_builds_with_fresh_state() {
        let state = AppState::new(Arc::new(InMemoryStore::new()), Arc::new(Faker::seeded(0)));
        let _router = create_router(state);
        // If we got here, the router wired up successfully
    }
}
