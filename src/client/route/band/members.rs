use dioxus::prelude::*;

use crate::{
    client::{
        api::band::{add_member, remove_member, update_member_role},
        component::{
            form::{FormAlert, SubmitButton, TextField},
            ConfirmationModal,
        },
        model::form::FormErrors,
        router::Route,
    },
    model::band::{AddMemberDto, BandMemberDto, BandRole, UpdateMemberRoleDto},
};

/// Member table with leader-only management and a leave button for the caller.
#[component]
pub fn MemberSection(
    band_id: i32,
    members: Vec<BandMemberDto>,
    is_leader: bool,
    current_user_id: i32,
    mut refetch: Signal<u32>,
) -> Element {
    let nav = navigator();

    let mut member_to_remove = use_signal(|| None::<BandMemberDto>);
    let mut show_remove = use_signal(|| false);
    let mut is_removing = use_signal(|| false);
    let mut action_error = use_signal(|| None::<String>);

    let mut on_role_change = move |(user_id, role): (i32, BandRole)| {
        action_error.set(None);
        spawn(async move {
            match update_member_role(band_id, user_id, &UpdateMemberRoleDto { role }).await {
                Ok(_) => refetch += 1,
                Err(err) => action_error.set(Some(err.message)),
            }
        });
    };

    let on_remove = move |_| {
        let Some(member) = member_to_remove() else {
            return;
        };
        is_removing.set(true);
        spawn(async move {
            let result = remove_member(band_id, member.user_id).await;
            show_remove.set(false);
            is_removing.set(false);
            match result {
                // Leaving takes the caller out of the band entirely
                Ok(()) if member.user_id == current_user_id => {
                    nav.push(Route::BandList {});
                }
                Ok(()) => refetch += 1,
                Err(err) => action_error.set(Some(err.message)),
            }
        });
    };

    let remove_message = member_to_remove()
        .map(|m| {
            if m.user_id == current_user_id {
                "Leave this band?".to_string()
            } else {
                format!("Remove {} {} from the band?", m.first_name, m.last_name)
            }
        })
        .unwrap_or_default();

    rsx! {
        div {
            class: "card bg-base-200",
            div {
                class: "card-body flex flex-col gap-4",
                h2 { class: "card-title", "Members" }
                FormAlert { message: action_error() }
                div {
                    class: "overflow-x-auto",
                    table {
                        class: "table table-zebra",
                        thead {
                            tr {
                                th { "Name" }
                                th { "Email" }
                                th { "Role" }
                                th {}
                            }
                        }
                        tbody {
                            for member in members.iter().cloned() {
                                tr {
                                    key: "{member.user_id}",
                                    td { "{member.first_name} {member.last_name}" }
                                    td { "{member.email}" }
                                    td {
                                        if is_leader {
                                            select {
                                                class: "select select-bordered select-sm",
                                                value: member.role.as_str(),
                                                onchange: move |evt| {
                                                    if let Some(role) = BandRole::parse(&evt.value()) {
                                                        on_role_change((member.user_id, role));
                                                    }
                                                },
                                                option { value: "LEADER", "Leader" }
                                                option { value: "MEMBER", "Member" }
                                            }
                                        } else {
                                            {member.role.label()}
                                        }
                                    }
                                    td {
                                        class: "text-right",
                                        if is_leader || member.user_id == current_user_id {
                                            button {
                                                class: "btn btn-ghost btn-xs text-error",
                                                onclick: {
                                                    let member = member.clone();
                                                    move |_| {
                                                        member_to_remove.set(Some(member.clone()));
                                                        show_remove.set(true);
                                                    }
                                                },
                                                if member.user_id == current_user_id { "Leave" } else { "Remove" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                if is_leader {
                    AddMemberForm { band_id, refetch }
                }
            }
        }
        ConfirmationModal {
            show: show_remove,
            title: "Remove member",
            message: remove_message,
            confirm_text: "Confirm",
            is_processing: is_removing(),
            on_confirm: on_remove,
        }
    }
}

#[component]
fn AddMemberForm(band_id: i32, mut refetch: Signal<u32>) -> Element {
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| BandRole::Member);
    let mut errors = use_signal(FormErrors::new);
    let mut submit_error = use_signal(|| None::<String>);
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
            let payload = AddMemberDto {
                email: email().trim().to_string(),
                role: Some(role()),
            };

            match add_member(band_id, &payload).await {
                Ok(_) => {
                    email.set(String::new());
                    refetch += 1;
                }
                Err(err) => submit_error.set(Some(err.message)),
            }

            is_submitting.set(false);
        });
    };

    rsx!(
        form {
            class: "flex flex-col gap-2 border-t border-base-300 pt-4",
            onsubmit: on_submit,
            h3 { class: "font-bold", "Add member" }
            FormAlert { message: submit_error() }
            div {
                class: "flex flex-col md:flex-row gap-2 md:items-end",
                div {
                    class: "grow",
                    TextField {
                        label: "Email",
                        value: email,
                        input_type: "email",
                        placeholder: "bandmate@example.com",
                        error: errors.read().get("email").map(String::from),
                    }
                }
                select {
                    class: "select select-bordered",
                    value: role().as_str(),
                    onchange: move |evt| {
                        if let Some(parsed) = BandRole::parse(&evt.value()) {
                            role.set(parsed);
                        }
                    },
                    option { value: "MEMBER", "Member" }
                    option { value: "LEADER", "Leader" }
                }
                SubmitButton { label: "Add", is_submitting: is_submitting() }
            }
        }
    )
}
