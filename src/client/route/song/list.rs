use dioxus::prelude::*;

use crate::{
    client::{
        api::{
            band::get_band,
            song::{delete_song, get_band_songs},
        },
        component::{
            form::FormAlert,
            page::{ErrorPage, LoadingPage, Page},
            ConfirmationModal, Markdown,
        },
        constant::SITE_NAME,
        model::{
            auth::AuthContext,
            cache::{use_fetch, Cache},
        },
        router::Route,
    },
    model::song::SongDto,
};

#[component]
pub fn SongList(band_id: i32) -> Element {
    let auth = use_context::<AuthContext>();

    let refetch = use_signal(|| 0u32);
    let band = use_fetch(move || async move { get_band(band_id).await });
    let songs = use_fetch(move || async move {
        let _ = refetch();
        get_band_songs(band_id).await
    });

    let is_leader = band
        .read()
        .data()
        .is_some_and(|band| auth.read().is_leader_of(band));

    rsx! {
        Title { "Songs | {SITE_NAME}" }
        match &*songs.read() {
            Cache::NotFetched => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::Fetched(songs) => rsx! {
                SongTable { band_id, songs: songs.clone(), is_leader, refetch }
            },
        }
    }
}

#[component]
fn SongTable(band_id: i32, songs: Vec<SongDto>, is_leader: bool, mut refetch: Signal<u32>) -> Element {
    let mut song_to_delete = use_signal(|| None::<SongDto>);
    let mut show_delete = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);
    let mut expanded = use_signal(|| None::<i32>);

    let on_delete = move |_| {
        let Some(song) = song_to_delete() else {
            return;
        };
        is_deleting.set(true);
        spawn(async move {
            let result = delete_song(song.id).await;
            show_delete.set(false);
            is_deleting.set(false);
            match result {
                Ok(()) => refetch += 1,
                Err(err) => delete_error.set(Some(err.message)),
            }
        });
    };

    let delete_message = song_to_delete()
        .map(|s| format!("Delete \"{}\"? It is also removed from every setlist.", s.title))
        .unwrap_or_default();

    rsx! {
        Page {
            class: "flex flex-col gap-6 max-w-4xl mx-auto",
            div {
                class: "flex justify-between items-center",
                div {
                    Link { to: Route::BandDetail { band_id }, class: "link text-sm opacity-70", "Back to band" }
                    h1 { class: "text-3xl font-bold", "Songs" }
                }
                Link { to: Route::SongCreate { band_id }, class: "btn btn-primary", "New song" }
            }
            FormAlert { message: delete_error() }
            if songs.is_empty() {
                p { class: "text-center py-16 text-lg opacity-50", "No songs yet" }
            } else {
                table {
                    class: "table table-zebra",
                    thead {
                        tr {
                            th { "Title" }
                            th { "Artist" }
                            th { "Length" }
                            th { "Key" }
                            th { "BPM" }
                            th {}
                        }
                    }
                    tbody {
                        for song in songs.iter().cloned() {
                            tr {
                                key: "{song.id}",
                                td {
                                    button {
                                        class: "link",
                                        disabled: song.notes.is_none(),
                                        onclick: move |_| {
                                            let next = if expanded() == Some(song.id) { None } else { Some(song.id) };
                                            expanded.set(next);
                                        },
                                        "{song.title}"
                                    }
                                    if expanded() == Some(song.id) {
                                        if let Some(notes) = &song.notes {
                                            div { class: "mt-2", Markdown { source: notes.clone() } }
                                        }
                                    }
                                }
                                td { {song.artist.clone().unwrap_or_default()} }
                                td { class: "font-mono", {song.duration_label()} }
                                td { {song.key.clone().unwrap_or_default()} }
                                td { {song.tempo.map(|t| t.to_string()).unwrap_or_default()} }
                                td {
                                    class: "text-right whitespace-nowrap",
                                    Link { to: Route::SongEdit { song_id: song.id }, class: "btn btn-ghost btn-xs", "Edit" }
                                    if is_leader {
                                        button {
                                            class: "btn btn-ghost btn-xs text-error",
                                            onclick: {
                                                let song = song.clone();
                                                move |_| {
                                                    song_to_delete.set(Some(song.clone()));
                                                    show_delete.set(true);
                                                }
                                            },
                                            "Delete"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete song",
            message: delete_message,
            confirm_text: "Delete",
            is_processing: is_deleting(),
            on_confirm: on_delete,
        }
    }
}
