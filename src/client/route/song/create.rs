use dioxus::prelude::*;

use crate::{
    client::{
        api::song::create_song,
        component::{
            form::{FormAlert, SubmitButton},
            Page,
        },
        constant::SITE_NAME,
        model::form::{optional_text, FormErrors},
        route::song::form::{SongFields, SongInputs},
        router::Route,
    },
    model::song::CreateSongDto,
};

#[component]
pub fn SongCreate(band_id: i32) -> Element {
    let nav = navigator();

    let inputs = SongInputs {
        title: use_signal(String::new),
        artist: use_signal(String::new),
        duration: use_signal(String::new),
        key: use_signal(String::new),
        tempo: use_signal(String::new),
        notes: use_signal(String::new),
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
            let payload = CreateSongDto {
                title: (inputs.title)().trim().to_string(),
                artist: optional_text(&(inputs.artist)()),
                duration_seconds: inputs.duration_seconds(),
                key: optional_text(&(inputs.key)()),
                tempo: inputs.tempo(),
                notes: optional_text(&(inputs.notes)()),
            };

            match create_song(band_id, &payload).await {
                Ok(_) => {
                    nav.push(Route::SongList { band_id });
                }
                Err(err) => submit_error.set(Some(err.message)),
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        Title { "New Song | {SITE_NAME}" }
        Page {
            class: "flex justify-center",
            div {
                class: "card bg-base-200 w-full max-w-2xl",
                form {
                    class: "card-body flex flex-col gap-4",
                    onsubmit: on_submit,
                    h2 { class: "card-title text-2xl", "New song" }
                    FormAlert { message: submit_error() }
                    SongFields { inputs, errors }
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::SongList { band_id }, class: "btn", "Cancel" }
                        SubmitButton { label: "Add song", is_submitting: is_submitting() }
                    }
                }
            }
        }
    }
}
