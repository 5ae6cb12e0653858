use dioxus::prelude::*;

use crate::{
    client::{
        api::{rehearsal::create_rehearsal, setlist::get_band_setlists},
        component::{
            form::{FormAlert, SubmitButton},
            page::{ErrorPage, LoadingPage},
            Page,
        },
        constant::SITE_NAME,
        model::{
            cache::{use_fetch, Cache},
            form::{optional_text, FormErrors},
        },
        route::rehearsal::form::{RehearsalFields, RehearsalInputs},
        router::Route,
    },
    model::{
        rehearsal::{
            CreateRehearsalDto, RecurrenceDto, RecurrenceFrequency, MAX_OCCURRENCES,
        },
        setlist::SetlistDto,
    },
};

#[component]
pub fn RehearsalCreate(band_id: i32) -> Element {
    let setlists = use_fetch(move || async move { get_band_setlists(band_id).await });

    rsx! {
        Title { "Schedule Rehearsal | {SITE_NAME}" }
        match &*setlists.read() {
            Cache::NotFetched => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::Fetched(setlists) => rsx! {
                RehearsalCreateForm { band_id, setlists: setlists.clone() }
            },
        }
    }
}

fn parse_frequency(value: &str) -> Option<RecurrenceFrequency> {
    match value {
        "DAILY" => Some(RecurrenceFrequency::Daily),
        "WEEKLY" => Some(RecurrenceFrequency::Weekly),
        "BIWEEKLY" => Some(RecurrenceFrequency::Biweekly),
        "MONTHLY" => Some(RecurrenceFrequency::Monthly),
        _ => None,
    }
}

#[component]
fn RehearsalCreateForm(band_id: i32, setlists: Vec<SetlistDto>) -> Element {
    let nav = navigator();

    let inputs = RehearsalInputs {
        title: use_signal(String::new),
        description: use_signal(String::new),
        location: use_signal(String::new),
        start_time: use_signal(String::new),
        end_time: use_signal(String::new),
        setlist_id: use_signal(String::new),
    };
    let mut frequency = use_signal(String::new);
    let mut occurrences = use_signal(|| "4".to_string());
    let mut errors = use_signal(FormErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let (checked, times) = inputs.validate();
        let recurrence = parse_frequency(&frequency());
        let count = occurrences().trim().parse::<u32>().ok();
        let checked = checked.check(
            recurrence.is_none() || count.is_some_and(|c| (1..=MAX_OCCURRENCES).contains(&c)),
            "occurrences",
            &format!("Occurrences must be between 1 and {}", MAX_OCCURRENCES),
        );

        let valid = checked.is_empty();
        errors.set(checked);
        let Some((start_time, end_time)) = times.filter(|_| valid) else {
            return;
        };

        is_submitting.set(true);
        submit_error.set(None);

        spawn(async move {
            let payload = CreateRehearsalDto {
                title: (inputs.title)().trim().to_string(),
                description: optional_text(&(inputs.description)()),
                location: optional_text(&(inputs.location)()),
                start_time,
                end_time,
                setlist_id: inputs.setlist(),
                recurrence: recurrence.map(|frequency| RecurrenceDto {
                    frequency,
                    occurrences: count.unwrap_or(1),
                }),
            };

            match create_rehearsal(band_id, &payload).await {
                Ok(_) => {
                    nav.push(Route::RehearsalList { band_id });
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
                    h2 { class: "card-title text-2xl", "Schedule rehearsal" }
                    FormAlert { message: submit_error() }
                    RehearsalFields { inputs, errors, setlists }
                    div {
                        class: "grid md:grid-cols-2 gap-4",
                        div {
                            class: "flex flex-col gap-1",
                            label {
                                class: "label",
                                span { class: "label-text", "Repeat" }
                            }
                            select {
                                class: "select select-bordered w-full",
                                value: "{frequency}",
                                onchange: move |evt| frequency.set(evt.value()),
                                option { value: "", "Does not repeat" }
                                option { value: "DAILY", "Daily" }
                                option { value: "WEEKLY", "Weekly" }
                                option { value: "BIWEEKLY", "Every two weeks" }
                                option { value: "MONTHLY", "Monthly" }
                            }
                        }
                        if !frequency().is_empty() {
                            div {
                                class: "flex flex-col gap-1",
                                label {
                                    class: "label",
                                    span { class: "label-text", "Occurrences" }
                                }
                                input {
                                    r#type: "number",
                                    class: "input input-bordered w-full",
                                    min: "1",
                                    max: "{MAX_OCCURRENCES}",
                                    value: "{occurrences}",
                                    oninput: move |evt| occurrences.set(evt.value()),
                                }
                                if let Some(error) = errors.read().get("occurrences") {
                                    span { class: "text-error text-sm", "{error}" }
                                }
                            }
                        }
                    }
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::RehearsalList { band_id }, class: "btn", "Cancel" }
                        SubmitButton { label: "Schedule", is_submitting: is_submitting() }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeat_options() {
        assert_eq!(parse_frequency("BIWEEKLY"), Some(RecurrenceFrequency::Biweekly));
        assert_eq!(parse_frequency(""), None);
    }
}
