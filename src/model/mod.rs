//! Data transfer objects shared by the server API and the web client.
//!
//! Every type here crosses the wire as JSON with camelCase field names. Types are
//! annotated with `ToSchema` when the `server` feature is enabled so they appear in
//! the generated OpenAPI document.

pub mod api;
pub mod auth;
pub mod band;
pub mod equipment;
pub mod realtime;
pub mod rehearsal;
pub mod setlist;
pub mod song;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Distinguishes an omitted field (`None`) from an explicit `null` (`Some(None)`).
///
/// Use with `#[serde(default, deserialize_with = "crate::model::double_option")]` on
/// partial update payloads where a nullable column can be cleared.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
