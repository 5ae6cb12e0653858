use dioxus::prelude::*;

use crate::{
    client::{
        api::band::{get_band, update_band},
        component::{
            form::{FormAlert, SubmitButton, TextAreaField, TextField},
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::{
            cache::{use_fetch, Cache},
            form::FormErrors,
        },
        router::Route,
    },
    model::band::{BandDetailDto, UpdateBandDto},
};

#[component]
pub fn BandEdit(band_id: i32) -> Element {
    let band = use_fetch(move || async move { get_band(band_id).await });

    rsx! {
        Title { "Edit Band | {SITE_NAME}" }
        match &*band.read() {
            Cache::NotFetched => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::Fetched(band) => rsx! {
                BandEditForm { band: band.clone() }
            },
        }
    }
}

#[component]
fn BandEditForm(band: BandDetailDto) -> Element {
    let nav = navigator();
    let band_id = band.id;

    let name = use_signal(|| band.name.clone());
    let description = use_signal(|| band.description.clone().unwrap_or_default());
    let mut errors = use_signal(FormErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let checked = FormErrors::new().required("name", "Band name", &name());
        let valid = checked.is_empty();
        errors.set(checked);
        if !valid {
            return;
        }

        is_submitting.set(true);
        submit_error.set(None);

        spawn(async move {
            let payload = UpdateBandDto {
                name: Some(name().trim().to_string()),
                description: Some(description().trim().to_string()),
            };

            match update_band(band_id, &payload).await {
                Ok(_) => {
                    nav.push(Route::BandDetail { band_id });
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
                class: "card bg-base-200 w-full max-w-lg",
                form {
                    class: "card-body flex flex-col gap-4",
                    onsubmit: on_submit,
                    h2 { class: "card-title text-2xl", "Edit band" }
                    FormAlert { message: submit_error() }
                    TextField {
                        label: "Name",
                        value: name,
                        error: errors.read().get("name").map(String::from),
                    }
                    TextAreaField { label: "Description", value: description, error: None }
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::BandDetail { band_id }, class: "btn", "Cancel" }
                        SubmitButton { label: "Save", is_submitting: is_submitting() }
                    }
                }
            }
        }
    }
}
