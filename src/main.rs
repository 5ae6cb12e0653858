mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, scheduler::rehearsal_reminders, service::mail::build_mailer,
            service::realtime::RealtimeHub, startup, state::AppState, util::jwt::JwtKeys,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let mailer = build_mailer(&config)?;
        let realtime = RealtimeHub::new();
        let jwt = JwtKeys::new(&config.jwt_secret);

        tracing::info!("Starting server");

        // Start rehearsal reminder scheduler
        let scheduler_db = db.clone();
        let scheduler_mailer = mailer.clone();
        let scheduler_realtime = realtime.clone();
        let schedule = config.reminder_schedule.clone();
        let window_hours = config.reminder_window_hours;
        tokio::spawn(async move {
            if let Err(e) = rehearsal_reminders::start_scheduler(
                scheduler_db,
                scheduler_mailer,
                scheduler_realtime,
                schedule,
                window_hours,
            )
            .await
            {
                tracing::error!("Rehearsal reminder scheduler error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(&config.app_url)?.with_state(AppState::new(
            db,
            jwt,
            mailer,
            realtime,
            config.app_url.clone(),
        ));
        router = router.merge(server_routes);

        Ok(router)
    })
}
