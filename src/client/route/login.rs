use dioxus::prelude::*;

use crate::{
    client::{
        api::auth::login,
        component::{
            form::{FormAlert, SubmitButton, TextField},
            page::LoadingPage,
            Page,
        },
        constant::SITE_NAME,
        model::{
            auth::{AuthContext, AuthState},
            form::FormErrors,
        },
        router::Route,
    },
    model::auth::LoginDto,
};

#[component]
pub fn Login() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    // Already logged in, nothing to do here
    use_effect(move || {
        if auth.read().is_authenticated() {
            nav.push(Route::Home {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let checked = FormErrors::new()
            .email("email", &email())
            .required("password", "Password", &password());
        let valid = checked.is_empty();
        errors.set(checked);
        if !valid {
            return;
        }

        is_submitting.set(true);
        submit_error.set(None);

        spawn(async move {
            let payload = LoginDto {
                email: email().trim().to_string(),
                password: password(),
            };

            match login(&payload).await {
                Ok(response) => {
                    auth.log_in(response.token, response.user);
                    nav.push(Route::Home {});
                }
                Err(err) => submit_error.set(Some(err.message)),
            }

            is_submitting.set(false);
        });
    };

    let state = auth.read();

    rsx! {
        Title { "Login | {SITE_NAME}" }
        match &*state {
            AuthState::Initializing | AuthState::Authenticated(_) => rsx! {
                LoadingPage {}
            },
            AuthState::NotLoggedIn | AuthState::Error(_) => rsx! {
                Page {
                    class: "flex items-center justify-center",
                    div {
                        class: "card bg-base-200 w-full max-w-md",
                        form {
                            class: "card-body flex flex-col gap-4",
                            onsubmit: on_submit,
                            h2 { class: "card-title text-2xl", "Sign in" }
                            FormAlert { message: submit_error() }
                            TextField {
                                label: "Email",
                                value: email,
                                input_type: "email",
                                error: errors.read().get("email").map(String::from),
                            }
                            TextField {
                                label: "Password",
                                value: password,
                                input_type: "password",
                                error: errors.read().get("password").map(String::from),
                            }
                            SubmitButton { label: "Login", is_submitting: is_submitting() }
                            div {
                                class: "flex justify-between text-sm",
                                Link { to: Route::Register {}, class: "link", "Create an account" }
                                Link { to: Route::ForgotPassword {}, class: "link", "Forgot password?" }
                            }
                        }
                    }
                }
            },
        }
    }
}
