use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        component::form::{TextAreaField, TextField},
        model::form::{parse_datetime_local, FormErrors},
    },
    model::setlist::SetlistDto,
};

/// Field values shared by the create and edit forms.
#[derive(Clone, Copy, PartialEq)]
pub struct RehearsalInputs {
    pub title: Signal<String>,
    pub description: Signal<String>,
    pub location: Signal<String>,
    pub start_time: Signal<String>,
    pub end_time: Signal<String>,
    pub setlist_id: Signal<String>,
}

impl RehearsalInputs {
    /// Checks required fields and that the rehearsal ends after it starts.
    ///
    /// Returns the parsed start and end times when valid.
    pub fn validate(&self) -> (FormErrors, Option<(DateTime<Utc>, DateTime<Utc>)>) {
        let start = parse_datetime_local(&(self.start_time)());
        let end = parse_datetime_local(&(self.end_time)());

        let mut errors = FormErrors::new()
            .required("title", "Title", &(self.title)())
            .check(start.is_some(), "startTime", "Start time is required")
            .check(end.is_some(), "endTime", "End time is required");

        let times = match (start, end) {
            (Some(start), Some(end)) => {
                errors = errors.check(end > start, "endTime", "End time must be after start time");
                (end > start).then_some((start, end))
            }
            _ => None,
        };

        (errors, times)
    }

    pub fn setlist(&self) -> Option<i32> {
        (self.setlist_id)().parse::<i32>().ok()
    }
}

#[component]
pub fn RehearsalFields(
    inputs: RehearsalInputs,
    errors: Signal<FormErrors>,
    setlists: Vec<SetlistDto>,
) -> Element {
    let mut setlist_id = inputs.setlist_id;
    let field_error = move |field: &str| errors.read().get(field).map(String::from);

    rsx! {
        TextField { label: "Title", value: inputs.title, error: field_error("title") }
        TextField { label: "Location", value: inputs.location, error: None }
        div {
            class: "grid md:grid-cols-2 gap-4",
            TextField {
                label: "Starts (UTC)",
                value: inputs.start_time,
                input_type: "datetime-local",
                error: field_error("startTime"),
            }
            TextField {
                label: "Ends (UTC)",
                value: inputs.end_time,
                input_type: "datetime-local",
                error: field_error("endTime"),
            }
        }
        div {
            class: "flex flex-col gap-1",
            label {
                class: "label",
                span { class: "label-text", "Setlist" }
            }
            select {
                class: "select select-bordered w-full",
                value: "{setlist_id}",
                onchange: move |evt| setlist_id.set(evt.value()),
                option { value: "", "No setlist" }
                for setlist in setlists.iter() {
                    option {
                        key: "{setlist.id}",
                        value: "{setlist.id}",
                        selected: setlist_id() == setlist.id.to_string(),
                        "{setlist.name}"
                    }
                }
            }
        }
        TextAreaField {
            label: "Description",
            value: inputs.description,
            placeholder: "Markdown is supported",
            error: None,
        }
    }
}
