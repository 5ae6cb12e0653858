//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - JWT keys for issuing and verifying tokens
//! - Mailer for password reset and reminder emails
//! - Realtime hub for band room notifications
//! - Application URL for generating links

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use super::{
    service::{mail::Mailer, realtime::RealtimeHub},
    util::jwt::JwtKeys,
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: the connection is a pool, the keys and hub are
/// reference counted internally and the mailer sits behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Signing and verification keys for session and password reset tokens.
    pub jwt: JwtKeys,

    /// Outgoing mail, either SMTP or a logging stand-in.
    pub mailer: Arc<dyn Mailer>,

    /// Band room event fan-out used by handlers and the realtime socket.
    pub realtime: RealtimeHub,

    /// Application base URL, used for links in emails and as the CORS origin.
    pub app_url: String,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `jwt` - Token keys derived from `JWT_SECRET`
    /// - `mailer` - Mail transport
    /// - `realtime` - Realtime hub, shared with the reminder scheduler
    /// - `app_url` - Application base URL
    pub fn new(
        db: DatabaseConnection,
        jwt: JwtKeys,
        mailer: Arc<dyn Mailer>,
        realtime: RealtimeHub,
        app_url: String,
    ) -> Self {
        Self {
            db,
            jwt,
            mailer,
            realtime,
            app_url,
        }
    }
}
