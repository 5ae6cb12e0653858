pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

/// Dialog shown while `show` is true.
///
/// `busy` locks the dialog open while a request it started is in flight.
#[component]
pub fn Modal(mut show: Signal<bool>, title: String, busy: bool, children: Element) -> Element {
    let mut close = move || {
        if !busy {
            show.set(false);
        }
    };

    if !show() {
        return rsx! {};
    }

    rsx!(
        div {
            class: "modal modal-open",
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: "modal-box bg-base-200 w-11/12 max-w-lg",
                h3 { class: "font-bold text-lg mb-4", "{title}" }
                {children}
            }
            div {
                class: "modal-backdrop bg-black/40",
                onclick: move |_| close(),
            }
        }
    )
}
