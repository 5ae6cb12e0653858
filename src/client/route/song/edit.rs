use dioxus::prelude::*;

use crate::{
    client::{
        api::song::{get_song, update_song},
        component::{
            form::{FormAlert, SubmitButton},
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::{
            cache::{use_fetch, Cache},
            form::FormErrors,
        },
        route::song::form::{SongFields, SongInputs},
        router::Route,
    },
    model::song::{format_duration, SongDto, UpdateSongDto},
};

#[component]
pub fn SongEdit(song_id: i32) -> Element {
    let song = use_fetch(move || async move { get_song(song_id).await });

    rsx! {
        Title { "Edit Song | {SITE_NAME}" }
        match &*song.read() {
            Cache::NotFetched => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::Fetched(song) => rsx! {
                SongEditForm { song: song.clone() }
            },
        }
    }
}

#[component]
fn SongEditForm(song: SongDto) -> Element {
    let nav = navigator();
    let song_id = song.id;
    let band_id = song.band_id;

    let inputs = SongInputs {
        title: use_signal(|| song.title.clone()),
        artist: use_signal(|| song.artist.clone().unwrap_or_default()),
        duration: use_signal(|| song.duration_seconds.map(format_duration).unwrap_or_default()),
        key: use_signal(|| song.key.clone().unwrap_or_default()),
        tempo: use_signal(|| song.tempo.map(|t| t.to_string()).unwrap_or_default()),
        notes: use_signal(|| song.notes.clone().unwrap_or_default()),
    };
    let mut errors = use_signal(FormErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let checked = inputs.validate();
        let valid = checked.is_empty();
        errors.set(checked);
        if !valid {
            return;
        }

        is_submitting.set(true);
        submit_error.set(None);

        spawn(async move {
            // Blank text clears a field; numbers left blank stay unchanged
            let payload = UpdateSongDto {
                title: Some((inputs.title)().trim().to_string()),
                artist: Some((inputs.artist)().trim().to_string()),
                duration_seconds: inputs.duration_seconds(),
                key: Some((inputs.key)().trim().to_string()),
                tempo: inputs.tempo(),
                notes: Some((inputs.notes)().trim().to_string()),
            };

            match update_song(song_id, &payload).await {
                Ok(_) => {
                    nav.push(Route::SongList { band_id });
                }
                Err(err) => submit_error.set(Some(err.message)),
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        Page {
            class: "flex justify-center",
            div {
                class: "card bg-base-200 w-full max-w-2xl",
                form {
                    class: "card-body flex flex-col gap-4",
                    onsubmit: on_submit,
                    h2 { class: "card-title text-2xl", "Edit song" }
                    FormAlert { message: submit_error() }
                    SongFields { inputs, errors }
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::SongList { band_id }, class: "btn", "Cancel" }
                        SubmitButton { label: "Save", is_submitting: is_submitting() }
                    }
                }
            }
        }
    }
}
