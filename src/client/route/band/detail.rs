use dioxus::prelude::*;

use crate::{
    client::{
        api::band::{delete_band, get_band},
        component::{
            form::FormAlert,
            page::{ErrorPage, LoadingPage, Page},
            ConfirmationModal,
        },
        constant::SITE_NAME,
        model::{
            auth::AuthContext,
            cache::{use_fetch, Cache},
        },
        route::band::members::MemberSection,
        router::Route,
    },
    model::band::BandDetailDto,
};

#[component]
pub fn BandDetail(band_id: i32) -> Element {
    let refetch = use_signal(|| 0u32);
    let band = use_fetch(move || async move {
        let _ = refetch();
        get_band(band_id).await
    });

    rsx! {
        match &*band.read() {
            Cache::NotFetched => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::Fetched(band) => rsx! {
                Title { "{band.name} | {SITE_NAME}" }
                BandOverview { band: band.clone(), refetch }
            },
        }
    }
}

#[component]
fn BandOverview(band: BandDetailDto, refetch: Signal<u32>) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();
    let band_id = band.id;

    let mut show_delete = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);

    let user_id = auth.read().user_id();
    let is_leader = auth.read().is_leader_of(&band);

    let on_delete = move |_| {
        is_deleting.set(true);
        spawn(async move {
            match delete_band(band_id).await {
                Ok(()) => {
                    show_delete.set(false);
                    nav.push(Route::BandList {});
                }
                Err(err) => {
                    show_delete.set(false);
                    delete_error.set(Some(err.message));
                }
            }
            is_deleting.set(false);
        });
    };

    rsx! {
        Page {
            class: "flex flex-col gap-6 max-w-4xl mx-auto",
            div {
                class: "flex justify-between items-start gap-4",
                div {
                    h1 { class: "text-3xl font-bold", "{band.name}" }
                    if let Some(description) = &band.description {
                        p { class: "opacity-70 mt-2", "{description}" }
                    }
                }
                if is_leader {
                    div {
                        class: "flex gap-2",
                        Link { to: Route::BandEdit { band_id }, class: "btn btn-outline btn-sm", "Edit" }
                        button {
                            class: "btn btn-error btn-outline btn-sm",
                            onclick: move |_| show_delete.set(true),
                            "Delete"
                        }
                    }
                }
            }
            FormAlert { message: delete_error() }
            div {
                class: "grid md:grid-cols-3 gap-4",
                Link {
                    to: Route::RehearsalList { band_id },
                    class: "btn btn-lg",
                    "Rehearsals"
                }
                Link {
                    to: Route::SetlistList { band_id },
                    class: "btn btn-lg",
                    "Setlists"
                }
                Link {
                    to: Route::SongList { band_id },
                    class: "btn btn-lg",
                    "Songs"
                }
            }
            MemberSection {
                band_id,
                members: band.members.clone(),
                is_leader,
                current_user_id: user_id.unwrap_or_default(),
                refetch,
            }
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete band",
            message: "This deletes the band along with its rehearsals, setlists and songs.",
            confirm_text: "Delete band",
            is_processing: is_deleting(),
            on_confirm: on_delete,
        }
    }
}
