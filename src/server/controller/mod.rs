//! HTTP request handlers.
//!
//! One module per resource. Each handler authenticates through
//! [`AuthGuard`](crate::server::middleware::auth::AuthGuard), converts DTOs to service
//! parameters, calls the service and converts the result back to a DTO. Handlers that
//! change band data also publish the change to the band's realtime room.

pub mod auth;
pub mod band;
pub mod equipment;
pub mod health;
pub mod realtime;
pub mod rehearsal;
pub mod setlist;
pub mod song;
pub mod user;
