use dioxus::prelude::*;

use crate::{
    client::{
        api::auth::forgot_password,
        component::{
            form::{FormAlert, SubmitButton, TextField},
            Page,
        },
        constant::SITE_NAME,
        model::form::FormErrors,
        router::Route,
    },
    model::auth::ForgotPasswordDto,
};

#[component]
pub fn ForgotPassword() -> Element {
    let email = use_signal(String::new);
    let mut errors = use_signal(FormErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut sent_message = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let checked = FormErrors::new().email("email", &email());
        let valid = checked.is_empty();
        errors.set(checked);
        if !valid {
            return;
        }

        is_submitting.set(true);
        submit_error.set(None);

        spawn(async move {
            let payload = ForgotPasswordDto {
                email: email().trim().to_string(),
            };

            match forgot_password(&payload).await {
                Ok(response) => sent_message.set(Some(response.message)),
                Err(err) => submit_error.set(Some(err.message)),
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        Title { "Forgot Password | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center",
            div {
                class: "card bg-base-200 w-full max-w-md",
                form {
                    class: "card-body flex flex-col gap-4",
                    onsubmit: on_submit,
                    h2 { class: "card-title text-2xl", "Reset your password" }
                    if let Some(message) = sent_message() {
                        div {
                            class: "alert alert-success",
                            span { "{message}" }
                        }
                    }
                    FormAlert { message: submit_error() }
                    TextField {
                        label: "Email",
                        value: email,
                        input_type: "email",
                        error: errors.read().get("email").map(String::from),
                    }
                    SubmitButton { label: "Send reset link", is_submitting: is_submitting() }
                    Link { to: Route::Login {}, class: "link text-sm", "Back to login" }
                }
            }
        }
    }
}
