use dioxus::prelude::*;

use crate::{
    client::{
        api::auth::reset_password,
        component::{
            form::{FormAlert, SubmitButton, TextField},
            Page,
        },
        constant::SITE_NAME,
        model::form::{FormErrors, MIN_PASSWORD_LEN},
        router::Route,
    },
    model::auth::ResetPasswordDto,
};

#[component]
pub fn ResetPassword(token: String) -> Element {
    let nav = navigator();

    let password = use_signal(String::new);
    let confirm_password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let checked = FormErrors::new()
            .min_len("password", "Password", &password(), MIN_PASSWORD_LEN)
            .check(
                password() == confirm_password(),
                "confirmPassword",
                "Passwords do not match",
            );
        let valid = checked.is_empty();
        errors.set(checked);
        if !valid {
            return;
        }

        is_submitting.set(true);
        submit_error.set(None);

        let token = token.clone();
        spawn(async move {
            let payload = ResetPasswordDto {
                token,
                password: password(),
            };

            match reset_password(&payload).await {
                Ok(_) => {
                    nav.push(Route::Login {});
                }
                Err(err) => submit_error.set(Some(err.message)),
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        Title { "Reset Password | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center",
            div {
                class: "card bg-base-200 w-full max-w-md",
                form {
                    class: "card-body flex flex-col gap-4",
                    onsubmit: on_submit,
                    h2 { class: "card-title text-2xl", "Choose a new password" }
                    FormAlert { message: submit_error() }
                    TextField {
                        label: "New password",
                        value: password,
                        input_type: "password",
                        error: errors.read().get("password").map(String::from),
                    }
                    TextField {
                        label: "Confirm password",
                        value: confirm_password,
                        input_type: "password",
                        error: errors.read().get("confirmPassword").map(String::from),
                    }
                    SubmitButton { label: "Reset password", is_submitting: is_submitting() }
                }
            }
        }
    }
}
