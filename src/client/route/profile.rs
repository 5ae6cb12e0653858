use dioxus::prelude::*;

use crate::{
    client::{
        api::user::{change_password, delete_account, update_profile},
        component::{
            form::{FormAlert, SubmitButton, TextField},
            page::LoadingPage,
            ConfirmationModal, Page,
        },
        constant::SITE_NAME,
        model::{
            auth::AuthContext,
            form::{FormErrors, MIN_PASSWORD_LEN},
        },
        router::Route,
    },
    model::user::{ChangePasswordDto, NotificationPreferencesDto, UpdateUserDto},
};

#[component]
pub fn Profile() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let mut show_delete = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    let mut delete_error = use_signal(|| None::<String>);

    let Some(user) = auth.read().user().cloned() else {
        return rsx! { LoadingPage {} };
    };

    let on_delete = move |_| {
        is_deleting.set(true);
        spawn(async move {
            match delete_account().await {
                Ok(()) => {
                    show_delete.set(false);
                    auth.log_out();
                    nav.push(Route::Login {});
                }
                Err(err) => {
                    show_delete.set(false);
                    delete_error.set(Some(err.message));
                }
            }
            is_deleting.set(false);
        });
    };

    let prefs = user.notification_preferences;

    rsx! {
        Title { "Profile | {SITE_NAME}" }
        Page {
            class: "flex flex-col gap-6 max-w-2xl mx-auto",
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body",
                    div {
                        class: "flex justify-between items-center",
                        h1 { class: "card-title text-2xl", {user.full_name()} }
                        Link { to: Route::ProfileEdit {}, class: "btn btn-outline btn-sm", "Edit" }
                    }
                    table {
                        class: "table",
                        tbody {
                            tr { th { "Email" } td { "{user.email}" } }
                            tr {
                                th { "Phone" }
                                td { {user.phone_number.clone().unwrap_or_else(|| "-".to_string())} }
                            }
                            tr {
                                th { "Notifications" }
                                td { {notification_summary(prefs)} }
                            }
                            tr {
                                th { "Member since" }
                                td { {user.created_at.format("%d %b %Y").to_string()} }
                            }
                        }
                    }
                }
            }
            ChangePasswordCard {}
            div {
                class: "card bg-base-200 border border-error",
                div {
                    class: "card-body",
                    h2 { class: "card-title", "Delete account" }
                    p {
                        class: "opacity-70",
                        "Removes your account and your band memberships. Bands where you are the only member are deleted too."
                    }
                    FormAlert { message: delete_error() }
                    div {
                        class: "card-actions justify-end",
                        button {
                            class: "btn btn-error",
                            onclick: move |_| show_delete.set(true),
                            "Delete account"
                        }
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete account",
            message: "This cannot be undone. Delete your account?",
            confirm_text: "Delete",
            is_processing: is_deleting(),
            on_confirm: on_delete,
        }
    }
}

fn notification_summary(prefs: NotificationPreferencesDto) -> &'static str {
    match (prefs.email, prefs.sms) {
        (true, true) => "Email and SMS",
        (true, false) => "Email",
        (false, true) => "SMS",
        (false, false) => "Off",
    }
}

#[component]
fn ChangePasswordCard() -> Element {
    let mut current_password = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut errors = use_signal(FormErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut success = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let checked = FormErrors::new()
            .required("currentPassword", "Current password", &current_password())
            .min_len("newPassword", "New password", &new_password(), MIN_PASSWORD_LEN);
        let valid = checked.is_empty();
        errors.set(checked);
        if !valid {
            return;
        }

        is_submitting.set(true);
        submit_error.set(None);
        success.set(None);

        spawn(async move {
            let payload = ChangePasswordDto {
                current_password: current_password(),
                new_password: new_password(),
            };

            match change_password(&payload).await {
                Ok(response) => {
                    current_password.set(String::new());
                    new_password.set(String::new());
                    success.set(Some(response.message));
                }
                Err(err) => submit_error.set(Some(err.message)),
            }

            is_submitting.set(false);
        });
    };

    rsx!(
        div {
            class: "card bg-base-200",
            form {
                class: "card-body flex flex-col gap-4",
                onsubmit: on_submit,
                h2 { class: "card-title", "Change password" }
                if let Some(message) = success() {
                    div { class: "alert alert-success", span { "{message}" } }
                }
                FormAlert { message: submit_error() }
                TextField {
                    label: "Current password",
                    value: current_password,
                    input_type: "password",
                    error: errors.read().get("currentPassword").map(String::from),
                }
                TextField {
                    label: "New password",
                    value: new_password,
                    input_type: "password",
                    error: errors.read().get("newPassword").map(String::from),
                }
                div {
                    class: "card-actions justify-end",
                    SubmitButton { label: "Update password", is_submitting: is_submitting() }
                }
            }
        }
    )
}

#[component]
pub fn ProfileEdit() -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let initial = auth.read().user().cloned();

    let first_name = use_signal(|| initial.as_ref().map(|u| u.first_name.clone()).unwrap_or_default());
    let last_name = use_signal(|| initial.as_ref().map(|u| u.last_name.clone()).unwrap_or_default());
    let phone_number = use_signal(|| {
        initial
            .as_ref()
            .and_then(|u| u.phone_number.clone())
            .unwrap_or_default()
    });
    let mut prefs = use_signal(|| {
        initial
            .as_ref()
            .map(|u| u.notification_preferences)
            .unwrap_or_default()
    });
    let mut errors = use_signal(FormErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
    let mut is_submitting = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let checked = FormErrors::new()
            .required("firstName", "First name", &first_name())
            .required("lastName", "Last name", &last_name());
        let valid = checked.is_empty();
        errors.set(checked);
        if !valid {
            return;
        }

        is_submitting.set(true);
        submit_error.set(None);

        spawn(async move {
            // Blank phone clears the stored number
            let payload = UpdateUserDto {
                first_name: Some(first_name().trim().to_string()),
                last_name: Some(last_name().trim().to_string()),
                phone_number: Some(phone_number().trim().to_string()),
                notification_preferences: Some(prefs()),
            };

            match update_profile(&payload).await {
                Ok(user) => {
                    auth.update_user(user);
                    nav.push(Route::Profile {});
                }
                Err(err) => submit_error.set(Some(err.message)),
            }

            is_submitting.set(false);
        });
    };

    rsx! {
        Title { "Edit Profile | {SITE_NAME}" }
        Page {
            class: "flex justify-center",
            div {
                class: "card bg-base-200 w-full max-w-lg",
                form {
                    class: "card-body flex flex-col gap-4",
                    onsubmit: on_submit,
                    h2 { class: "card-title text-2xl", "Edit profile" }
                    FormAlert { message: submit_error() }
                    TextField {
                        label: "First name",
                        value: first_name,
                        error: errors.read().get("firstName").map(String::from),
                    }
                    TextField {
                        label: "Last name",
                        value: last_name,
                        error: errors.read().get("lastName").map(String::from),
                    }
                    TextField { label: "Phone", value: phone_number, input_type: "tel", error: None }
                    div {
                        class: "flex flex-col gap-2",
                        span { class: "label-text", "Rehearsal reminders" }
                        label {
                            class: "label cursor-pointer justify-start gap-3",
                            input {
                                r#type: "checkbox",
                                class: "checkbox",
                                checked: prefs().email,
                                onchange: move |evt| prefs.write().email = evt.checked(),
                            }
                            span { "Email" }
                        }
                        label {
                            class: "label cursor-pointer justify-start gap-3",
                            input {
                                r#type: "checkbox",
                                class: "checkbox",
                                checked: prefs().sms,
                                onchange: move |evt| prefs.write().sms = evt.checked(),
                            }
                            span { "SMS" }
                        }
                    }
                    div {
                        class: "card-actions justify-end",
                        Link { to: Route::Profile {}, class: "btn", "Cancel" }
                        SubmitButton { label: "Save", is_submitting: is_submitting() }
                    }
                }
            }
        }
    }
}
