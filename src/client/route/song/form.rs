use dioxus::prelude::*;

use crate::client::{
    component::form::{TextAreaField, TextField},
    model::form::{parse_duration, parse_optional_positive, FormErrors},
};

#[derive(Clone, Copy, PartialEq)]
pub struct SongInputs {
    pub title: Signal<String>,
    pub artist: Signal<String>,
    pub duration: Signal<String>,
    pub key: Signal<String>,
    pub tempo: Signal<String>,
    pub notes: Signal<String>,
}

impl SongInputs {
    pub fn validate(&self) -> FormErrors {
        let duration = (self.duration)();
        FormErrors::new()
            .required("title", "Title", &(self.title)())
            .check(
                duration.trim().is_empty() || parse_duration(&duration).is_some(),
                "duration",
                "Duration must look like 3:45 or a number of seconds",
            )
            .optional_positive("tempo", "Tempo", &(self.tempo)())
    }

    pub fn duration_seconds(&self) -> Option<i32> {
        parse_duration(&(self.duration)())
    }

    pub fn tempo(&self) -> Option<i32> {
        parse_optional_positive(&(self.tempo)())
    }
}

#[component]
pub fn SongFields(inputs: SongInputs, errors: Signal<FormErrors>) -> Element {
    let field_error = move |field: &str| errors.read().get(field).map(String::from);

    rsx! {
        TextField { label: "Title", value: inputs.title, error: field_error("title") }
        TextField { label: "Artist", value: inputs.artist, error: None }
        div {
            class: "grid grid-cols-3 gap-4",
            TextField {
                label: "Duration",
                value: inputs.duration,
                placeholder: "3:45",
                error: field_error("duration"),
            }
            TextField { label: "Key", value: inputs.key, placeholder: "E minor", error: None }
            TextField {
                label: "Tempo (BPM)",
                value: inputs.tempo,
                input_type: "number",
                error: field_error("tempo"),
            }
        }
        TextAreaField {
            label: "Notes",
            value: inputs.notes,
            placeholder: "Markdown is supported",
            error: None,
        }
    }
}
