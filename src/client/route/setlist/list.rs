use dioxus::prelude::*;

use crate::client::{
    api::setlist::get_band_setlists,
    component::page::{ErrorPage, LoadingPage, Page},
    constant::SITE_NAME,
    model::cache::{use_fetch, Cache},
    router::Route,
};

#[component]
pub fn SetlistList(band_id: i32) -> Element {
    let setlists = use_fetch(move || async move { get_band_setlists(band_id).await });

    rsx! {
        Title { "Setlists | {SITE_NAME}" }
        match &*setlists.read() {
            Cache::NotFetched => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::Fetched(setlists) => rsx! {
                Page {
                    class: "flex flex-col gap-6 max-w-4xl mx-auto",
                    div {
                        class: "flex justify-between items-center",
                        div {
                            Link { to: Route::BandDetail { band_id }, class: "link text-sm opacity-70", "Back to band" }
                            h1 { class: "text-3xl font-bold", "Setlists" }
                        }
                        Link { to: Route::SetlistCreate { band_id }, class: "btn btn-primary", "New setlist" }
                    }
                    if setlists.is_empty() {
                        p { class: "text-center py-16 text-lg opacity-50", "No setlists yet" }
                    } else {
                        table {
                            class: "table table-zebra",
                            thead {
                                tr {
                                    th { "Name" }
                                    th { "Songs" }
                                    th { "Updated" }
                                }
                            }
                            tbody {
                                for setlist in setlists.iter() {
                                    tr {
                                        key: "{setlist.id}",
                                        td {
                                            Link {
                                                to: Route::SetlistDetail { setlist_id: setlist.id },
                                                class: "link",
                                                "{setlist.name}"
                                            }
                                        }
                                        td { "{setlist.song_count}" }
                                        td { {setlist.updated_at.format("%d %b %Y").to_string()} }
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
