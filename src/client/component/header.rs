use dioxus::prelude::*;
use dioxus_free_icons::{
    icons::fa_solid_icons::{FaMusic, FaRightFromBracket},
    Icon,
};

use crate::client::{constant::SITE_NAME, model::auth::AuthContext, router::Route};

#[component]
pub fn Header() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let (resolved, user) = {
        let state = auth.read();
        (state.is_resolved(), state.user().cloned())
    };

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    Icon {
                        width: 28,
                        height: 28,
                        icon: FaMusic
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        {SITE_NAME}
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            if let Some(user) = user {
                Link {
                    to: Route::BandList {},
                    class: "btn btn-ghost",
                    "Bands"
                }
                Link {
                    to: Route::Profile {},
                    class: "btn btn-ghost",
                    "{user.first_name}"
                }
                button {
                    class: "btn btn-outline flex gap-2 items-center",
                    onclick: move |_| {
                        auth.log_out();
                        nav.push(Route::Login {});
                    },
                    Icon {
                        width: 18,
                        height: 18,
                        icon: FaRightFromBracket
                    }
                    p { "Logout" }
                }
            } else if resolved {
                Link {
                    to: Route::Login {},
                    class: "btn btn-outline",
                    "Login"
                }
                Link {
                    to: Route::Register {},
                    class: "btn btn-primary",
                    "Register"
                }
            }
        }
    })
}
