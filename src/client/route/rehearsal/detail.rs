use dioxus::prelude::*;

use crate::{
    client::{
        api::{
            band::get_band,
            rehearsal::{delete_rehearsal, get_rehearsal, update_attendance},
        },
        component::{
            form::FormAlert,
            page::{ErrorPage, LoadingPage, Page},
            ConfirmationModal, Markdown,
        },
        constant::SITE_NAME,
        model::{
            auth::AuthContext,
            cache::{use_fetch, Cache},
            form::format_datetime,
        },
        router::Route,
    },
    model::rehearsal::{AttendanceDto, AttendanceStatus, RehearsalDetailDto, UpdateAttendanceDto},
};

#[component]
pub fn RehearsalDetail(rehearsal_id: i32) -> Element {
    let refetch = use_signal(|| 0u32);
    let detail = use_fetch(move || async move {
        let _ = refetch();
        get_rehearsal(rehearsal_id).await
    });

    rsx! {
        match &*detail.read() {
            Cache::NotFetched => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::Fetched(detail) => rsx! {
                Title { "{detail.rehearsal.title} | {SITE_NAME}" }
                RehearsalView { detail: detail.clone(), refetch }
            },
        }
    }
}

#[component]
fn RehearsalView(detail: RehearsalDetailDto, mut refetch: Signal<u32>) -> Element {
    let auth = use_context::<AuthContext>();
    let nav = navigator();

    let rehearsal = detail.rehearsal.clone();
    let rehearsal_id = rehearsal.id;
    let band_id = rehearsal.band_id;
    let band = use_fetch(move || async move { get_band(band_id).await });

    let mut show_delete = use_signal(|| false);
    let mut is_deleting = use_signal(|| false);
    let mut action_error = use_signal(|| None::<String>);

    let user_id = auth.read().user_id();
    let is_leader = band
        .read()
        .data()
        .is_some_and(|band| auth.read().is_leader_of(band));
    let my_status = user_id.and_then(|id| {
        detail
            .attendance
            .iter()
            .find(|a| a.user_id == id)
            .map(|a| a.status)
    });

    let mut on_respond = move |status: AttendanceStatus| {
        action_error.set(None);
        spawn(async move {
            match update_attendance(rehearsal_id, &UpdateAttendanceDto { status }).await {
                Ok(_) => refetch += 1,
                Err(err) => action_error.set(Some(err.message)),
            }
        });
    };

    let on_delete = move |_| {
        is_deleting.set(true);
        spawn(async move {
            let result = delete_rehearsal(rehearsal_id).await;
            show_delete.set(false);
            is_deleting.set(false);
            match result {
                Ok(()) => {
                    nav.push(Route::RehearsalList { band_id });
                }
                Err(err) => action_error.set(Some(err.message)),
            }
        });
    };

    rsx! {
        Page {
            class: "flex flex-col gap-6 max-w-3xl mx-auto",
            div {
                class: "flex justify-between items-start gap-4",
                div {
                    Link {
                        to: Route::RehearsalList { band_id },
                        class: "link text-sm opacity-70",
                        "All rehearsals"
                    }
                    h1 { class: "text-3xl font-bold", "{rehearsal.title}" }
                }
                if is_leader {
                    div {
                        class: "flex gap-2",
                        Link { to: Route::RehearsalEdit { rehearsal_id }, class: "btn btn-outline btn-sm", "Edit" }
                        button {
                            class: "btn btn-error btn-outline btn-sm",
                            onclick: move |_| show_delete.set(true),
                            "Delete"
                        }
                    }
                }
            }
            FormAlert { message: action_error() }
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body",
                    table {
                        class: "table",
                        tbody {
                            tr { th { "Starts" } td { {format_datetime(rehearsal.start_time)} } }
                            tr { th { "Ends" } td { {format_datetime(rehearsal.end_time)} } }
                            if let Some(location) = &rehearsal.location {
                                tr { th { "Location" } td { "{location}" } }
                            }
                            if let (Some(setlist_id), Some(name)) = (rehearsal.setlist_id, &detail.setlist_name) {
                                tr {
                                    th { "Setlist" }
                                    td {
                                        Link { to: Route::SetlistDetail { setlist_id }, class: "link", "{name}" }
                                    }
                                }
                            }
                        }
                    }
                    if let Some(description) = &rehearsal.description {
                        div {
                            class: "border-t border-base-300 pt-4",
                            Markdown { source: description.clone() }
                        }
                    }
                }
            }
            div {
                class: "card bg-base-200",
                div {
                    class: "card-body flex flex-col gap-4",
                    h2 { class: "card-title", "Attendance" }
                    div {
                        class: "flex flex-wrap gap-2",
                        span { class: "self-center mr-2", "Your response:" }
                        for status in [AttendanceStatus::Attending, AttendanceStatus::Maybe, AttendanceStatus::NotAttending] {
                            button {
                                key: "{status.as_str()}",
                                class: if my_status == Some(status) { "btn btn-primary btn-sm" } else { "btn btn-outline btn-sm" },
                                onclick: move |_| on_respond(status),
                                {status.label()}
                            }
                        }
                    }
                    AttendanceTable { attendance: detail.attendance.clone() }
                }
            }
        }
        ConfirmationModal {
            show: show_delete,
            title: "Delete rehearsal",
            message: "Delete this rehearsal and its attendance responses?",
            confirm_text: "Delete",
            is_processing: is_deleting(),
            on_confirm: on_delete,
        }
    }
}

#[component]
fn AttendanceTable(attendance: Vec<AttendanceDto>) -> Element {
    if attendance.is_empty() {
        return rsx! {
            p { class: "opacity-50", "No responses yet" }
        };
    }

    rsx! {
        table {
            class: "table table-zebra",
            thead {
                tr {
                    th { "Member" }
                    th { "Response" }
                }
            }
            tbody {
                for entry in attendance.iter() {
                    tr {
                        key: "{entry.user_id}",
                        td { "{entry.first_name} {entry.last_name}" }
                        td {
                            span {
                                class: match entry.status {
                                    AttendanceStatus::Attending => "badge badge-success",
                                    AttendanceStatus::Maybe => "badge badge-warning",
                                    AttendanceStatus::NotAttending => "badge badge-error",
                                },
                                {entry.status.label()}
                            }
                        }
                    }
                }
            }
        }
    }
}
