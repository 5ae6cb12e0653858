//! SeaORM entity definitions for the rehearsal scheduler schema.

pub mod prelude;

pub mod band;
pub mod band_member;
pub mod equipment;
pub mod rehearsal;
pub mod rehearsal_attendance;
pub mod setlist;
pub mod setlist_song;
pub mod song;
pub mod user;
