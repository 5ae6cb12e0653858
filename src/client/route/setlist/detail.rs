use dioxus::prelude::*;

use crate::{
    client::{
        api::{
            band::get_band,
            setlist::{delete_setlist, get_setlist, update_setlist_songs},
            song::get_band_songs,
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
    model::{
        setlist::{SetlistDetailDto, UpdateSetlistSongsDto},
        song::{format_duration, SongDto},
    },
};

#[component]
pub fn SetlistDetail(setlist_id: i32) -> Element {
    let refetch = use_signal(|| 0u32);
    let setlist = use_fetch(move || async move {
        let _ = refetch();
        get_setlist(setlist_id).await
    });

    rsx! {
        match &*setlist.read() {
            Cache::NotFetched => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::Fetched(setlist) => rsx! {
                Title { "{setlist.name} | {SITE_NAME}" }
                SetlistView { setlist: setlist.clone(), refetch }
            },
        }
    }
}

/// Swaps the song at `index` with its neighbour `offset` places away, if there is one.
fn move_song(song_ids: &mut [i32], index: usize, offset: isize) {
    if let Some(target) = index.checked_add_signed(offset) {
        if target < song_ids.len() && index < song_ids.len() {
            song_ids.swap(index, target);
        }
    }
}

#[component]
fn SetlistView(setlist: SetlistDetailDto, mut refetch: Signal<u32>) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let setlist_id = setlist.id;
    let band_id = setlist.band_id;
    let band = use_fetch(move || async move { get_band(band_id).await });
    let catalogue = use_fetch(move || async move { get_band_songs(band_id).await });

    let mut show_delete = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    let mut action_error = use_signal(|| None::<String>);
    let mut is_saving = use_signal(|| false);

    let is_leader = band
        .read()
        .data()
        .is_some_and(|band| auth.read().is_leader_of(band));

    let current_ids: Vec<i32> = setlist.songs.iter().map(|s| s.id).collect();

    // Every order change is saved straight away
    let mut save_order = move |song_ids: Vec<i32>| {
        is_saving.set(true);
        action_error.set(None);
        spawn(async move {
            match update_setlist_songs(setlist_id, &UpdateSetlistSongsDto { song_ids }).await {
                Ok(_) => refetch += 1,
                Err(err) => action_error.set(Some(err.message)),
            }
            is_saving.set(false);
        });
    };

    let on_delete = move |_| {
        is_deleting.set(true);
        spawn(async move {
            let result = delete_setlist(setlist_id).await;
            show_delete.set(false);
            is_deleting.set(false);
            match result {
                Ok(()) => {
                    nav.push(Route::SetlistList { band_id });
                }
                Err(err) => action_error.set(Some(err.message)),
            }
        });
    };

    let available: Vec<SongDto> = catalogue
        .read()
        .data()
        .map(|songs| {
            songs
                .iter()
                .filter(|s| !current_ids.contains(&s.id))
                .cloned()
                .collect()
        })
        .unwrap_or_default();

    let song_count = setlist.songs.len();

    rsx! {
        Page {
            class: "flex flex-col gap-6 max-w-3xl mx-auto",
            div {
                class: "flex justify-between items-start gap-4",
                div {
                    Link { to: Route::SetlistList { band_id }, class: "link text-sm opacity-70", "All setlists" }
                    h1 { class: "text-3xl font-bold", "{setlist.name}" }
                    p {
                        class: "opacity-60",
                        "{song_count} songs, "
                        {format_duration(setlist.total_duration_seconds)}
                    }
                }
                div {
                    class: "flex gap-2",
                    Link { to: Route::SetlistEdit { setlist_id }, class: "btn btn-outline btn-sm", "Edit" }
                    if is_leader {
                        button {
                            class: "btn btn-error btn-outline btn-sm",
                            onclick: move |_| show_delete.set(true),
                            "Delete"
                        }
                    }
                }
            }
            if let Some(description) = &setlist.description {
                Markdown { source: description.clone() }
            }
            FormAlert { message: action_error() }
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body",
                    if setlist.songs.is_empty() {
                        p { class: "opacity-50", "No songs in this setlist" }
                    } else {
                        table {
                            class: "table",
                            tbody {
                                for (index, song) in setlist.songs.iter().enumerate() {
                                    tr {
                                        key: "{song.id}",
                                        td { class: "w-8 opacity-50", "{index + 1}" }
                                        td {
                                            p { class: "font-bold", "{song.title}" }
                                            if let Some(artist) = &song.artist {
                                                p { class: "text-sm opacity-60", "{artist}" }
                                            }
                                        }
                                        td { class: "font-mono", {song.duration_label()} }
                                        td {
                                            class: "text-right whitespace-nowrap",
                                            button {
                                                class: "btn btn-ghost btn-xs",
                                                disabled: index == 0 || is_saving(),
                                                onclick: {
                                                    let ids = current_ids.clone();
                                                    move |_| {
                                                        let mut ids = ids.clone();
                                                        move_song(&mut ids, index, -1);
                                                        save_order(ids);
                                                    }
                                                },
                                                "▲"
                                            }
                                            button {
                                                class: "btn btn-ghost btn-xs",
                                                disabled: index + 1 == song_count || is_saving(),
                                                onclick: {
                                                    let ids = current_ids.clone();
                                                    move |_| {
                                                        let mut ids = ids.clone();
                                                        move_song(&mut ids, index, 1);
                                                        save_order(ids);
                                                    }
                                                },
                                                "▼"
                                            }
                                            button {
                                                class: "btn btn-ghost btn-xs text-error",
                                                disabled: is_saving(),
                                                onclick: {
                                                    let ids = current_ids.clone();
                                                    move |_| {
                                                        let mut ids = ids.clone();
                                                        ids.remove(index);
                                                        save_order(ids);
                                                    }
                                                },
                                                "Remove"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    if !available.is_empty() {
                        div {
                            class: "border-t border-base-300 pt-4 flex flex-col gap-2",
                            h3 { class: "font-bold", "Add songs" }
                            div {
                                class: "flex flex-wrap gap-2",
                                for song in available.iter() {
                                    button {
                                        key: "{song.id}",
                                        class: "btn btn-outline btn-sm",
                                        disabled: is_saving(),
                                        onclick: {
                                            let mut ids = current_ids.clone();
                                            ids.push(song.id);
                                            move |_| save_order(ids.clone())
                                        },
                                        "+ {song.title}"
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
            title: "Delete setlist",
            message: "Delete this setlist? Rehearsals using it will no longer reference it.",
            confirm_text: "Delete",
            is_processing: is_deleting(),
            on_confirm: on_delete,
        }
    }
}
