use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};

use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    util::jwt::JwtKeys,
};
use test_utils::{builder::TestBuilder, factory};

mod authenticate;
mod require_band_leader;
mod require_band_member;

fn keys() -> JwtKeys {
    JwtKeys::new("guard-test-secret")
}

fn bearer(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
