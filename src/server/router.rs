use axum::{
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{
        auth::{self, AUTH_TAG},
        band::{self, BAND_TAG},
        equipment::{self, EQUIPMENT_TAG},
        health::{self, HEALTH_TAG},
        realtime,
        rehearsal::{self, REHEARSAL_TAG},
        setlist::{self, SETLIST_TAG},
        song::{self, SONG_TAG},
        user::{self, USER_TAG},
    },
    error::{config::ConfigError, AppError},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Band Rehearsal Scheduler API"),
    modifiers(&BearerAuth),
    tags(
        (name = AUTH_TAG, description = "Registration, login and password reset"),
        (name = USER_TAG, description = "User profiles"),
        (name = BAND_TAG, description = "Bands and membership"),
        (name = REHEARSAL_TAG, description = "Rehearsal scheduling and attendance"),
        (name = SETLIST_TAG, description = "Setlists"),
        (name = SONG_TAG, description = "Band song catalogues"),
        (name = EQUIPMENT_TAG, description = "Member equipment"),
        (name = HEALTH_TAG, description = "Liveness"),
    )
)]
struct ApiDoc;

/// Registers the `bearer` JWT scheme referenced by protected endpoints.
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the API router with OpenAPI docs, CORS for `app_url` and request tracing.
pub fn router(app_url: &str) -> Result<Router<AppState>, AppError> {
    let (api_router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        // Auth
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(auth::me))
        .routes(routes!(auth::forgot_password))
        .routes(routes!(auth::reset_password))
        // Users
        .routes(routes!(user::get_user))
        .routes(routes!(user::update_me, user::delete_me))
        .routes(routes!(user::change_password))
        // Bands
        .routes(routes!(band::get_bands, band::create_band))
        .routes(routes!(
            band::get_band,
            band::update_band,
            band::delete_band
        ))
        .routes(routes!(band::get_members, band::add_member))
        .routes(routes!(band::update_member, band::remove_member))
        // Rehearsals
        .routes(routes!(rehearsal::get_upcoming))
        .routes(routes!(
            rehearsal::get_band_rehearsals,
            rehearsal::create_rehearsal
        ))
        .routes(routes!(
            rehearsal::get_rehearsal,
            rehearsal::update_rehearsal,
            rehearsal::delete_rehearsal
        ))
        .routes(routes!(rehearsal::update_attendance))
        // Setlists
        .routes(routes!(
            setlist::get_band_setlists,
            setlist::create_setlist
        ))
        .routes(routes!(
            setlist::get_setlist,
            setlist::update_setlist,
            setlist::delete_setlist
        ))
        .routes(routes!(setlist::update_setlist_songs))
        // Songs
        .routes(routes!(song::get_band_songs, song::create_song))
        .routes(routes!(
            song::get_song,
            song::update_song,
            song::delete_song
        ))
        // Equipment
        .routes(routes!(
            equipment::get_my_equipment,
            equipment::create_equipment
        ))
        .routes(routes!(equipment::get_band_equipment))
        .routes(routes!(
            equipment::get_equipment,
            equipment::update_equipment,
            equipment::delete_equipment
        ))
        .routes(routes!(health::health))
        .split_for_parts();

    let origin = app_url
        .parse::<HeaderValue>()
        .map_err(|_| ConfigError::InvalidEnvVar {
            name: "APP_URL".to_string(),
            value: app_url.to_string(),
        })?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    let router = api_router
        .route("/api/realtime", get(realtime::connect))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    Ok(router)
}
