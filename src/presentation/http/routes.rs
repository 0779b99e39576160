// src/presentation/http/routes.rs
use crate::presentation::http::{middleware::enforce_access_policy, state::HttpState};
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

/// Wrap an application router so every request passes the access policy
/// before reaching a handler.
pub fn protect(router: Router, state: HttpState) -> Router {
    router
        .layer(middleware::from_fn_with_state(state, enforce_access_policy))
        .layer(TraceLayer::new_for_http())
}
