use dioxus::prelude::*;

use super::Modal;

/// Asks before a delete, leave or other change that cannot be undone.
#[component]
pub fn ConfirmationModal(
    mut show: Signal<bool>,
    title: String,
    message: String,
    confirm_text: String,
    is_processing: bool,
    on_confirm: EventHandler<()>,
) -> Element {
    rsx!(
        Modal {
            show,
            title,
            busy: is_processing,
            p { class: "opacity-80", "{message}" }
            div {
                class: "modal-action",
                button {
                    class: "btn btn-ghost",
                    disabled: is_processing,
                    onclick: move |_| show.set(false),
                    "Cancel"
                }
                button {
                    class: "btn btn-error",
                    disabled: is_processing,
                    onclick: move |_| on_confirm.call(()),
                    if is_processing {
                        span { class: "loading loading-spinner loading-sm" }
                    }
                    "{confirm_text}"
                }
            }
        }
    )
}
