// src/presentation/http/middleware/access_policy.rs
use crate::application::error::ApplicationError;
use crate::domain::access::{AccessDecision, Principal};
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

/// Middleware that applies the configured `AccessPolicy` to every request.
///
/// The caller is whatever `Principal` an upstream authentication layer put in
/// the request extensions; no principal means an anonymous request.
///
/// Usage: `axum::middleware::from_fn_with_state(state, enforce_access_policy)`
pub async fn enforce_access_policy(
    State(state): State<HttpState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let path = req.uri().path().to_owned();
    let decision = {
        let principal = req.extensions().get::<Principal>();
        let decision = state.security.access_policy().evaluate(&path, principal);
        tracing::debug!(
            path = %path,
            decision = %decision,
            authenticated = principal.is_some(),
            "access policy evaluated"
        );
        decision
    };

    match decision {
        AccessDecision::Granted => next.run(req).await,
        AccessDecision::LoginRequired => Redirect::to(state.security.login_url()).into_response(),
        AccessDecision::Denied => {
            HttpError::from_error(ApplicationError::forbidden(format!("access to {path} denied")))
                .into_response()
        }
    }
}
