//! Web server for the Task Management System
//!
//! Thin presentation layer over `taskman-core`: translates form submissions
//! and query-string actions into repository calls and renders the single-page
//! HTML UI. Exposed as a library so integration tests can build the router.

pub mod routes;
pub mod state;

use axum::Router;

use crate::state::AppState;

/// Build the application router with all routes attached.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::tasks::router())
        .merge(routes::health::router())
        .with_state(state)
}
