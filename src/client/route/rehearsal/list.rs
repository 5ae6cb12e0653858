use chrono::Utc;
use dioxus::prelude::*;

use crate::{
    client::{
        api::{band::get_band, rehearsal::get_band_rehearsals},
        component::page::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::{
            auth::AuthContext,
            cache::{use_fetch, Cache},
            form::format_datetime,
        },
        router::Route,
    },
    model::{band::BandDetailDto, rehearsal::RehearsalDto},
};

#[component]
pub fn RehearsalList(band_id: i32) -> Element {
    let band = use_fetch(move || async move { get_band(band_id).await });
    let rehearsals = use_fetch(move || async move { get_band_rehearsals(band_id).await });

    let band = band.read();
    let rehearsals = rehearsals.read();

    rsx! {
        Title { "Rehearsals | {SITE_NAME}" }
        match (&*band, &*rehearsals) {
            (Cache::Error(err), _) | (_, Cache::Error(err)) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            (Cache::Fetched(band), Cache::Fetched(rehearsals)) => rsx! {
                RehearsalTable { band: band.clone(), rehearsals: rehearsals.clone() }
            },
            _ => rsx! { LoadingPage {} },
        }
    }
}

#[component]
fn RehearsalTable(band: BandDetailDto, rehearsals: Vec<RehearsalDto>) -> Element {
    let auth = use_context::<AuthContext>();
    let band_id = band.id;
    let is_leader = auth.read().is_leader_of(&band);

    let now = Utc::now();
    let (upcoming, past): (Vec<_>, Vec<_>) =
        rehearsals.into_iter().partition(|r| r.end_time >= now);

    rsx! {
        Page {
            class: "flex flex-col gap-6 max-w-4xl mx-auto",
            div {
                class: "flex justify-between items-center",
                div {
                    Link { to: Route::BandDetail { band_id }, class: "link text-sm opacity-70", "{band.name}" }
                    h1 { class: "text-3xl font-bold", "Rehearsals" }
                }
                if is_leader {
                    Link {
                        to: Route::RehearsalCreate { band_id },
                        class: "btn btn-primary",
                        "Schedule rehearsal"
                    }
                }
            }
            RehearsalRows { title: "Upcoming", rehearsals: upcoming }
            if !past.is_empty() {
                RehearsalRows { title: "Past", rehearsals: past }
            }
        }
    }
}

#[component]
fn RehearsalRows(title: String, rehearsals: Vec<RehearsalDto>) -> Element {
    rsx! {
        div {
            class: "flex flex-col gap-2",
            h2 { class: "text-xl", "{title}" }
            if rehearsals.is_empty() {
                p { class: "opacity-50", "Nothing scheduled" }
            } else {
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra",
                        thead {
                            tr {
                                th { "Title" }
                                th { "Starts" }
                                th { "Location" }
                            }
                        }
                        tbody {
                            for rehearsal in rehearsals.iter() {
                                tr {
                                    key: "{rehearsal.id}",
                                    td {
                                        Link {
                                            to: Route::RehearsalDetail { rehearsal_id: rehearsal.id },
                                            class: "link",
                                            "{rehearsal.title}"
                                        }
                                        if rehearsal.series_id.is_some() {
                                            span { class: "badge badge-ghost badge-sm ml-2", "recurring" }
                                        }
                                    }
                                    td { {format_datetime(rehearsal.start_time)} }
                                    td { {rehearsal.location.clone().unwrap_or_default()} }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
