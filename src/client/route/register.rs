use dioxus::prelude::*;

use crate::{
    client::{
        api::auth::register,
        component::{
            form::{FormAlert, SubmitButton, TextField},
            Page,
        },
        constant::SITE_NAME,
        model::{
            auth::AuthContext,
            form::{optional_text, FormErrors, MIN_PASSWORD_LEN},
        },
        router::Route,
    },
    model::auth::RegisterDto,
};

#[component]
pub fn Register() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let first_name = use_signal(String::new);
    let last_name = use_signal(String::new);
    let email = use_signal(String::new);
    let phone_number = use_signal(String::new);
    let password = use_signal(String::new);
    let confirm_password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    use_effect(move || {
        if auth.read().is_authenticated() {
            nav.push(Route::Home {});
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let checked = FormErrors::new()
            .required("firstName", "First name", &first_name())
            .required("lastName", "Last name", &last_name())
            .email("email", &email())
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

        spawn(async move {
            let payload = RegisterDto {
                email: email().trim().to_string(),
                password: password(),
                first_name: first_name().trim().to_string(),
                last_name: last_name().trim().to_string(),
                phone_number: optional_text(&phone_number()),
            };

            match register(&payload).await {
                Ok(response) => {
                    auth.log_in(response.token, response.user);
                    nav.push(Route::Home {});
                }
                Err(err) => submit_error.set(Some(err.message)),
            }

            is_submitting.set(false);
        });
    };

    let field_error = move |field: &str| errors.read().get(field).map(String::from);

    rsx! {
        Title { "Register | {SITE_NAME}" }
        Page {
            class: "flex items-center justify-center",
            div {
                class: "card bg-base-200 w-full max-w-md",
                form {
                    class: "card-body flex flex-col gap-4",
                    onsubmit: on_submit,
                    h2 { class: "card-title text-2xl", "Create an account" }
                    FormAlert { message: submit_error() }
                    div {
                        class: "grid grid-cols-2 gap-4",
                        TextField { label: "First name", value: first_name, error: field_error("firstName") }
                        TextField { label: "Last name", value: last_name, error: field_error("lastName") }
                    }
                    TextField { label: "Email", value: email, input_type: "email", error: field_error("email") }
                    TextField { label: "Phone (optional)", value: phone_number, input_type: "tel", error: None }
                    TextField { label: "Password", value: password, input_type: "password", error: field_error("password") }
                    TextField {
                        label: "Confirm password",
                        value: confirm_password,
                        input_type: "password",
                        error: field_error("confirmPassword"),
                    }
                    SubmitButton { label: "Register", is_submitting: is_submitting() }
                    p {
                        class: "text-sm",
                        "Already have an account? "
                        Link { to: Route::Login {}, class: "link", "Sign in" }
                    }
                }
            }
        }
    }
}
