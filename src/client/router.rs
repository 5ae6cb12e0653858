use dioxus::prelude::*;

use crate::client::component::{Layout, ProtectedLayout};
use crate::client::route::{
    band::{BandCreate, BandDetail, BandEdit, BandList},
    rehearsal::{RehearsalCreate, RehearsalDetail, RehearsalEdit, RehearsalList},
    setlist::{SetlistCreate, SetlistDetail, SetlistEdit, SetlistList},
    song::{SongCreate, SongEdit, SongList},
    ForgotPassword, Home, Login, NotFound, Profile, ProfileEdit, Register, ResetPassword,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/login")]
    Login {},

    #[route("/register")]
    Register {},

    #[route("/forgot-password")]
    ForgotPassword {},

    #[route("/reset-password/:token")]
    ResetPassword { token: String },
    #[end_layout]

    #[layout(ProtectedLayout)]
    #[route("/")]
    Home {},

    #[route("/profile")]
    Profile {},

    #[route("/profile/edit")]
    ProfileEdit {},

    #[nest("/bands")]
        #[route("/")]
        BandList {},

        #[route("/create")]
        BandCreate {},

        #[route("/:band_id")]
        BandDetail { band_id: i32 },

        #[route("/:band_id/edit")]
        BandEdit { band_id: i32 },

        #[route("/:band_id/rehearsals")]
        RehearsalList { band_id: i32 },

        #[route("/:band_id/rehearsals/create")]
        RehearsalCreate { band_id: i32 },

        #[route("/:band_id/setlists")]
        SetlistList { band_id: i32 },

        #[route("/:band_id/setlists/create")]
        SetlistCreate { band_id: i32 },

        #[route("/:band_id/songs")]
        SongList { band_id: i32 },

        #[route("/:band_id/songs/create")]
        SongCreate { band_id: i32 },
    #[end_nest]

    #[route("/rehearsals/:rehearsal_id")]
    RehearsalDetail { rehearsal_id: i32 },

    #[route("/rehearsals/:rehearsal_id/edit")]
    RehearsalEdit { rehearsal_id: i32 },

    #[route("/setlists/:setlist_id")]
    SetlistDetail { setlist_id: i32 },

    #[route("/setlists/:setlist_id/edit")]
    SetlistEdit { setlist_id: i32 },

    #[route("/songs/:song_id/edit")]
    SongEdit { song_id: i32 },
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
