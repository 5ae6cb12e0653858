//! REST backend: accounts, bands, rehearsals, setlists, songs and equipment.
//!
//! Requests enter through [`router`], which mounts one [`controller`] module per
//! resource. Controllers authenticate the bearer token and check band membership through
//! [`middleware::auth`], hand typed parameters to a [`service`], and the service works
//! against the SeaORM repositories in [`data`]. Repositories return the domain types in
//! [`model`]; controllers turn those into the shared DTOs before responding and publish
//! band changes to the realtime hub.
//!
//! Alongside the request path, [`scheduler`] runs the rehearsal reminder job and
//! [`startup`] opens the database and applies migrations. Only compiled with the `server`
//! feature.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
