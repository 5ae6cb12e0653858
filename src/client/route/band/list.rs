use dioxus::prelude::*;

use crate::client::{
    api::band::get_bands,
    component::page::{ErrorPage, LoadingPage, Page},
    constant::SITE_NAME,
    model::cache::{use_fetch, Cache},
    router::Route,
};

#[component]
pub fn BandList() -> Element {
    let bands = use_fetch(|| async move { get_bands().await });

    rsx! {
        Title { "Bands | {SITE_NAME}" }
        match &*bands.read() {
            Cache::NotFetched => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::Fetched(bands) => rsx! {
                Page {
                    class: "flex flex-col gap-6 max-w-4xl mx-auto",
                    div {
                        class: "flex justify-between items-center",
                        h1 { class: "text-3xl font-bold", "My bands" }
                        Link { to: Route::BandCreate {}, class: "btn btn-primary", "New band" }
                    }
                    if bands.is_empty() {
                        div {
                            class: "text-center py-16",
                            p { class: "text-lg opacity-50", "You're not in any bands yet" }
                            p {
                                class: "text-sm opacity-30 mt-2",
                                "Create one, or ask a band leader to add you"
                            }
                        }
                    } else {
                        div {
                            class: "grid md:grid-cols-2 gap-4",
                            for band in bands.iter() {
                                Link {
                                    key: "{band.id}",
                                    to: Route::BandDetail { band_id: band.id },
                                    div {
                                        class: "card bg-base-200 hover:bg-base-300 h-full",
                                        div {
                                            class: "card-body",
                                            div {
                                                class: "flex justify-between items-start",
                                                h2 { class: "card-title", "{band.name}" }
                                                span { class: "badge badge-outline", {band.role.label()} }
                                            }
                                            if let Some(description) = &band.description {
                                                p { class: "opacity-70", "{description}" }
                                            }
                                            p {
                                                class: "text-sm opacity-50",
                                                if band.member_count == 1 { "1 member" } else { "{band.member_count} members" }
                                            }
                                        }
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
