use dioxus::prelude::*;

use crate::{
    client::{
        api::setlist::{get_setlist, update_setlist},
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
    model::setlist::{SetlistDetailDto, UpdateSetlistDto},
};

#[component]
pub fn SetlistEdit(setlist_id: i32) -> Element {
    let setlist = use_fetch(move || async move { get_setlist(setlist_id).await });

    rsx! {
        Title { "Edit Setlist | {SITE_NAME}" }
        match &*setlist.read() {
            Cache::NotFetched => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::Fetched(setlist) => rsx! {
                SetlistEditForm { setlist: setlist.clone() }
            },
        }
    }
}

#[component]
fn SetlistEditForm(setlist: SetlistDetailDto) -> Element {
    let nav = navigator();
    let setlist_id = setlist.id;

    let name = use_signal(|| setlist.name.clone());
    let description = use_signal(|| setlist.description.clone().unwrap_or_default());
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
            let payload = UpdateSetlistDto {
                name: Some(name().trim().to_string()),
                description: Some(description().trim().to_string()),
            };

            match update_setlist(setlist_id, &payload).await {
                Ok(_) => {
                    nav.push(Route::SetlistDetail { setlist_id });
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
                    h2 { class: "card-title text-2xl", "Edit setlist" }
                    FormAlert { message: submit_error() }
                    TextField {
                        label: "Name",
                        value: name,
                        error: errors.read().get("name").map(String::from),
                    }
                    TextAreaField { label: "Description", value: description, error: None }
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::SetlistDetail { setlist_id }, class: "btn", "Cancel" }
                        SubmitButton { label: "Save", is_submitting: is_submitting() }
                    }
                }
            }
        }
    }
}
