use dioxus::prelude::*;

use crate::{
    client::{
        api::{setlist::create_setlist, song::get_band_songs},
        component::{
            form::{FormAlert, SubmitButton, TextAreaField, TextField},
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::{
            cache::{use_fetch, Cache},
            form::{optional_text, FormErrors},
        },
        router::Route,
    },
    model::{setlist::CreateSetlistDto, song::SongDto},
};

#[component]
pub fn SetlistCreate(band_id: i32) -> Element {
    let songs = use_fetch(move || async move { get_band_songs(band_id).await });

    rsx! {
        Title { "New Setlist | {SITE_NAME}" }
        match &*songs.read() {
            Cache::NotFetched => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::Fetched(songs) => rsx! {
                SetlistCreateForm { band_id, songs: songs.clone() }
            },
        }
    }
}

#[component]
fn SetlistCreateForm(band_id: i32, songs: Vec<SongDto>) -> Element {
    let nav = navigator();

    let name = use_signal(String::new);
    let description = use_signal(String::new);
    // Selection order becomes the setlist order
    let mut selected = use_signal(Vec::<i32>::new);
    let mut errors = use_signal(FormErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let checked = FormErrors::new().required("name", "Setlist name", &name());
        let valid = checked.is_empty();
        errors.set(checked);
        if !valid {
            return;
        }

        is_submitting.set(true);
        submit_error.set(None);

        spawn(async move {
            let payload = CreateSetlistDto {
                name: name().trim().to_string(),
                description: optional_text(&description()),
                song_ids: Some(selected()),
            };

            match create_setlist(band_id, &payload).await {
                Ok(setlist) => {
                    nav.push(Route::SetlistDetail { setlist_id: setlist.id });
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
                    h2 { class: "card-title text-2xl", "New setlist" }
                    FormAlert { message: submit_error() }
                    TextField {
                        label: "Name",
                        value: name,
                        error: errors.read().get("name").map(String::from),
                    }
                    TextAreaField { label: "Description", value: description, error: None }
                    div {
                        class: "flex flex-col gap-2",
                        span { class: "label-text", "Songs" }
                        if songs.is_empty() {
                            p {
                                class: "text-sm opacity-50",
                                "This band has no songs yet. You can add them to the setlist later."
                            }
                        }
                        for song in songs.iter() {
                            label {
                                key: "{song.id}",
                                class: "label cursor-pointer justify-start gap-3",
                                input {
                                    r#type: "checkbox",
                                    class: "checkbox",
                                    checked: selected.read().contains(&song.id),
                                    onchange: {
                                        let song_id = song.id;
                                        move |evt: FormEvent| {
                                            if evt.checked() {
                                                selected.write().push(song_id);
                                            } else {
                                                selected.write().retain(|id| *id != song_id);
                                            }
                                        }
                                    },
                                }
                                span { "{song.title}" }
                                if let Some(position) = selected.read().iter().position(|id| *id == song.id) {
                                    span { class: "badge badge-primary badge-sm", "#{position + 1}" }
                                }
                            }
                        }
                    }
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::SetlistList { band_id }, class: "btn", "Cancel" }
                        SubmitButton { label: "Create setlist", is_submitting: is_submitting() }
                    }
                }
            }
        }
    }
}
