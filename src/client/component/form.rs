use dioxus::prelude::*;

/// Labelled input with an inline validation message.
#[component]
pub fn TextField(
    label: String,
    mut value: Signal<String>,
    #[props(!optional)] error: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default)] disabled: bool,
) -> Element {
    let input_class = if error.is_some() {
        "input input-bordered input-error w-full"
    } else {
        "input input-bordered w-full"
    };

    rsx!(
        div {
            class: "flex flex-col gap-1",
            label {
                class: "label",
                span { class: "label-text", "{label}" }
            }
            input {
                r#type: "{input_type}",
                class: input_class,
                placeholder: "{placeholder}",
                value: "{value}",
                disabled,
                oninput: move |evt| value.set(evt.value()),
            }
            if let Some(error) = error {
                span { class: "text-error text-sm", "{error}" }
            }
        }
    )
}

#[component]
pub fn TextAreaField(
    label: String,
    mut value: Signal<String>,
    #[props(!optional)] error: Option<String>,
    #[props(default)] placeholder: String,
) -> Element {

    rsx!(
        div {
            class: "flex flex-col gap-1",
            label {
                class: "label",
                span { class: "label-text", "{label}" }
            }
            textarea {
                class: "textarea textarea-bordered w-full min-h-24",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |evt| value.set(evt.value()),
            }
            if let Some(error) = error {
                span { class: "text-error text-sm", "{error}" }
            }
        }
    )
}

/// Error banner for a failed submission.
#[component]
pub fn FormAlert(#[props(!optional)] message: Option<String>) -> Element {
    rsx!(
        if let Some(message) = message {
            div {
                class: "alert alert-error",
                span { "{message}" }
            }
        }
    )
}

#[component]
pub fn SubmitButton(label: String, is_submitting: bool) -> Element {
    rsx!(
        button {
            r#type: "submit",
            class: "btn btn-primary",
            disabled: is_submitting,
            if is_submitting {
                span { class: "loading loading-spinner loading-sm mr-2" }
            }
            "{label}"
        }
    )
}
