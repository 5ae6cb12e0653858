//! Server-side domain models and operation parameters.
//!
//! Repositories convert SeaORM entities into these types at the data layer boundary,
//! services operate on them, and controllers convert them into DTOs with `into_dto()`.
//! `*Params` types carry the validated input of a single write operation.

pub mod band;
pub mod equipment;
pub mod rehearsal;
pub mod setlist;
pub mod song;
pub mod user;
