use dioxus::prelude::*;

use crate::{
    client::{
        api::{
            rehearsal::{get_rehearsal, update_rehearsal},
            setlist::get_band_setlists,
        },
        component::{
            form::{FormAlert, SubmitButton},
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::{
            cache::{use_fetch, Cache},
            form::{format_datetime_local, FormErrors},
        },
        route::rehearsal::form::{RehearsalFields, RehearsalInputs},
        router::Route,
    },
    model::{
        rehearsal::{RehearsalDto, UpdateRehearsalDto},
        setlist::SetlistDto,
    },
};

#[component]
pub fn RehearsalEdit(rehearsal_id: i32) -> Element {
    // Setlists depend on the band, so both load in one go
    let data = use_fetch(move || async move {
        let detail = get_rehearsal(rehearsal_id).await?;
        let setlists = get_band_setlists(detail.rehearsal.band_id).await?;
        Ok((detail.rehearsal, setlists))
    });

    rsx! {
        Title { "Edit Rehearsal | {SITE_NAME}" }
        match &*data.read() {
            Cache::NotFetched => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::Fetched((rehearsal, setlists)) => rsx! {
                RehearsalEditForm { rehearsal: rehearsal.clone(), setlists: setlists.clone() }
            },
        }
    }
}

#[component]
fn RehearsalEditForm(rehearsal: RehearsalDto, setlists: Vec<SetlistDto>) -> Element {
    let nav = navigator();
    let rehearsal_id = rehearsal.id;

    let inputs = RehearsalInputs {
        title: use_signal(|| rehearsal.title.clone()),
        description: use_signal(|| rehearsal.description.clone().unwrap_or_default()),
        location: use_signal(|| rehearsal.location.clone().unwrap_or_default()),
        start_time: use_signal(|| format_datetime_local(rehearsal.start_time)),
        end_time: use_signal(|| format_datetime_local(rehearsal.end_time)),
        setlist_id: use_signal(|| {
            rehearsal
                .setlist_id
                .map(|id| id.to_string())
                .unwrap_or_default()
        }),
    };
    let mut errors = use_signal(FormErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let (checked, times) = inputs.validate();
        errors.set(checked);
        let Some((start_time, end_time)) = times.filter(|_| errors.read().is_empty()) else {
            return;
        };

        is_submitting.set(true);
        submit_error.set(None);

        spawn(async move {
            // Blank text clears the field, an empty setlist choice detaches the setlist
            let payload = UpdateRehearsalDto {
                title: Some((inputs.title)().trim().to_string()),
                description: Some((inputs.description)().trim().to_string()),
                location: Some((inputs.location)().trim().to_string()),
                start_time: Some(start_time),
                end_time: Some(end_time),
                setlist_id: Some(inputs.setlist()),
            };

            match update_rehearsal(rehearsal_id, &payload).await {
                Ok(_) => {
                    nav.push(Route::RehearsalDetail { rehearsal_id });
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
                    h2 { class: "card-title text-2xl", "Edit rehearsal" }
                    FormAlert { message: submit_error() }
                    RehearsalFields { inputs, errors, setlists }
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::RehearsalDetail { rehearsal_id }, class: "btn", "Cancel" }
                        SubmitButton { label: "Save", is_submitting: is_submitting() }
                    }
                }
            }
        }
    }
}
