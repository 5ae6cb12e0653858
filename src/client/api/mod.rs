//! REST API client.
//!
//! Every call attaches the stored session token as a bearer header. Requests are only
//! sent from the browser; during server rendering they fail with status 503.

pub mod auth;
pub mod band;
pub mod helper;
pub mod rehearsal;
pub mod setlist;
pub mod song;
pub mod token;
pub mod user;
