use dioxus::prelude::*;

use crate::client::{
    component::{
        page::{ErrorPage, LoadingPage},
        Header,
    },
    model::auth::{AuthContext, AuthState},
    router::Route,
};

/// Renders child routes only for a logged-in user, redirecting everyone else to login.
#[component]
pub fn ProtectedLayout() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    use_effect(move || {
        if matches!(&*auth.read(), AuthState::NotLoggedIn) {
            nav.push(Route::Login {});
        }
    });

    let state = auth.read();

    rsx! {
        Header {  }
        match &*state {
            AuthState::Authenticated(_) => rsx! {
                Outlet::<Route> {}
            },
            AuthState::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            // Nothing to show while the token check runs or the redirect happens
            AuthState::Initializing | AuthState::NotLoggedIn => rsx! {
                LoadingPage {}
            },
        }
    }
}
