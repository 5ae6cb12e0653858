use dioxus::prelude::*;

use crate::{
    client::{
        api::band::create_band,
        component::{
            form::{FormAlert, SubmitButton, TextAreaField, TextField},
            Page,
        },
        constant::SITE_NAME,
        model::form::{optional_text, FormErrors},
        router::Route,
    },
    model::band::CreateBandDto,
};

#[component]
pub fn BandCreate() -> Element {
    let nav = navigator();

    let name = use_signal(String::new);
    let description = use_signal(String::new);
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
            let payload = CreateBandDto {
                name: name().trim().to_string(),
                description: optional_text(&description()),
            };

            match create_band(&payload).await {
                Ok(band) => {
                    nav.push(Route::BandDetail { band_id: band.id });
                }
                Err(err) => submit_error.set(Some(err.message)),
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        Title { "New Band | {SITE_NAME}" }
        Page {
            class: "flex justify-center",
            div {
                class: "card bg-base-200 w-full max-w-lg",
                form {
                    class: "card-body flex flex-col gap-4",
                    onsubmit: on_submit,
                    h2 { class: "card-title text-2xl", "New band" }
                    FormAlert { message: submit_error() }
                    TextField {
                        label: "Name",
                        value: name,
                        error: errors.read().get("name").map(String::from),
                    }
                    TextAreaField { label: "Description", value: description, error: None }
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::BandList {}, class: "btn", "Cancel" }
                        SubmitButton { label: "Create band", is_submitting: is_submitting() }
                    }
                }
            }
        }
    }
}
