// tests/support/helpers.rs
use super::mocks;
use axum::{
    Router,
    body::{self, Body},
    extract::Request,
    http::StatusCode,
    middleware::{self, Next},
    response::Response,
    routing::get,
};
use bakery_core::application::ports::security::PasswordEncoder;
use bakery_core::application::services::SecurityServices;
use bakery_core::config::PasswordHashSettings;
use bakery_core::domain::access::{AccessPolicy, Principal};
use bakery_core::infrastructure::security::password::Argon2PasswordEncoder;
use bakery_core::presentation::http::{routes::protect, state::HttpState};
use serde_json::Value;
use std::sync::Arc;

/// Header the test-only authentication layer turns into a `Principal`.
pub const TEST_ROLE_HEADER: &str = "x-test-role";

pub const LOGIN_URL: &str = "/login";

/// Argon2 with the smallest cost it accepts.
pub fn cheap_argon2() -> Argon2PasswordEncoder {
    Argon2PasswordEncoder::new(PasswordHashSettings {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .expect("valid argon2 parameters")
}

pub fn build_test_state(policy: AccessPolicy) -> HttpState {
    let encoder: Arc<dyn PasswordEncoder> = Arc::new(mocks::PlainTextEncoder);
    HttpState {
        security: SecurityServices::new(encoder, Arc::new(policy), LOGIN_URL),
    }
}

pub fn make_test_router() -> Router {
    make_test_router_with_policy(AccessPolicy::bakery_default().expect("default policy"))
}

pub fn make_test_router_with_policy(policy: AccessPolicy) -> Router {
    let app = Router::new()
        .route("/login", get(|| async { "login" }))
        .route("/VAADIN/build/bundle.js", get(|| async { "bundle" }))
        .route("/storefront", get(|| async { "storefront" }))
        .route("/dashboard", get(|| async { "dashboard" }))
        .route("/users", get(|| async { "users" }))
        .route("/products/{id}", get(|| async { "product" }));

    protect(app, build_test_state(policy)).layer(middleware::from_fn(authenticate_from_header))
}

/// Stand-in for the real login/session layer.
async fn authenticate_from_header(mut req: Request, next: Next) -> Response {
    let role = req
        .headers()
        .get(TEST_ROLE_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    if let Some(role) = role {
        req.extensions_mut()
            .insert(Principal::new(format!("{role}@vaadin.com"), role));
    }
    next.run(req).await
}

pub async fn body_text(resp: Response) -> String {
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

/// Assert that the access middleware refused `path` with a 403 JSON body.
pub async fn assert_forbidden(resp: Response, path: &str) {
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    assert!(
        content_type.starts_with("application/json"),
        "unexpected content-type: {content_type}"
    );

    let json: Value = serde_json::from_str(&body_text(resp).await).expect("json error body");
    assert_eq!(json["error"], "Forbidden");
    let message = json["message"].as_str().unwrap_or_default();
    assert_eq!(message, format!("access to {path} denied"));
}

pub fn get_request(uri: &str, role: Option<&str>) -> axum::http::Request<Body> {
    let mut builder = axum::http::Request::builder().uri(uri);
    if let Some(role) = role {
        builder = builder.header(TEST_ROLE_HEADER, role);
    }
    builder.body(Body::empty()).expect("request")
}
