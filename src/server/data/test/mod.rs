mod attendance;
mod band;
mod band_member;
mod equipment;
mod rehearsal;
mod setlist;
mod song;
mod user;
