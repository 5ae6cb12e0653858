use chrono::{DateTime, Utc};
use dioxus::prelude::*;

use crate::{
    client::{
        api::rehearsal::get_upcoming,
        component::page::{ErrorPage, LoadingPage, Page},
        constant::SITE_NAME,
        model::{
            auth::AuthContext,
            cache::{use_fetch, Cache},
            form::format_datetime,
        },
        router::Route,
    },
    model::rehearsal::UpcomingRehearsalDto,
};

#[component]
pub fn Home() -> Element {
    let auth = use_context::<AuthContext>();
    let upcoming = use_fetch(|| async move { get_upcoming().await });

    // Shared clock for the countdowns, ticks once a minute
    #[allow(unused_mut)]
    let mut now = use_signal(Utc::now);

    #[cfg(feature = "web")]
    use_future(move || async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(60_000).await;
            now.set(Utc::now());
        }
    });

    let first_name = auth
        .read()
        .user()
        .map(|u| u.first_name.clone())
        .unwrap_or_default();

    rsx! {
        Title { "{SITE_NAME}" }
        match &*upcoming.read() {
            Cache::NotFetched => rsx! { LoadingPage {} },
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::Fetched(rehearsals) => rsx! {
                Page {
                    class: "flex flex-col gap-6 max-w-4xl mx-auto",
                    div {
                        class: "flex justify-between items-center",
                        h1 { class: "text-3xl font-bold", "Welcome back, {first_name}" }
                        Link { to: Route::BandList {}, class: "btn btn-primary", "My bands" }
                    }
                    h2 { class: "text-xl", "Upcoming rehearsals" }
                    if rehearsals.is_empty() {
                        div {
                            class: "text-center py-16",
                            p { class: "text-lg opacity-50", "No rehearsals scheduled" }
                            p {
                                class: "text-sm opacity-30 mt-2",
                                "Rehearsals from all of your bands show up here"
                            }
                        }
                    } else {
                        div {
                            class: "flex flex-col gap-3",
                            for item in rehearsals.iter().cloned() {
                                UpcomingCard { key: "{item.rehearsal.id}", item: item.clone(), now: now() }
                            }
                        }
                    }
                }
            },
        }
    }
}

#[component]
fn UpcomingCard(item: UpcomingRehearsalDto, now: DateTime<Utc>) -> Element {
    let rehearsal = &item.rehearsal;

    rsx!(
        Link {
            to: Route::RehearsalDetail { rehearsal_id: rehearsal.id },
            div {
                class: "card bg-base-200 hover:bg-base-300",
                div {
                    class: "card-body flex-row justify-between items-center",
                    div {
                        h3 { class: "card-title", "{rehearsal.title}" }
                        p { class: "opacity-70", "{item.band_name}" }
                        if let Some(location) = &rehearsal.location {
                            p { class: "text-sm opacity-60", "{location}" }
                        }
                    }
                    div {
                        class: "text-right",
                        p { class: "font-mono", {format_datetime(rehearsal.start_time)} }
                        p { class: "badge badge-primary mt-1", {countdown(now, rehearsal.start_time)} }
                    }
                }
            }
        }
    )
}

/// Short "starts in" label, e.g. `in 2d 4h` or `in 35m`.
fn countdown(now: DateTime<Utc>, start: DateTime<Utc>) -> String {
    let remaining = start - now;
    if remaining.num_minutes() <= 0 {
        return "now".to_string();
    }

    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    let minutes = remaining.num_minutes() % 60;

    if days > 0 {
        format!("in {}d {}h", days, hours)
    } else if hours > 0 {
        format!("in {}h {}m", hours, minutes)
    } else {
        format!("in {}m", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn countdown_picks_largest_units() {
        let now = Utc::now();

        assert_eq!(countdown(now, now + Duration::minutes(35)), "in 35m");
        assert_eq!(countdown(now, now + Duration::minutes(125)), "in 2h 5m");
        assert_eq!(countdown(now, now + Duration::hours(52)), "in 2d 4h");
        assert_eq!(countdown(now, now - Duration::minutes(5)), "now");
    }
}
