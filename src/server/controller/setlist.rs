use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        realtime::RealtimeEvent,
        setlist::{
            CreateSetlistDto, SetlistDetailDto, SetlistDto, UpdateSetlistDto,
            UpdateSetlistSongsDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::setlist::{CreateSetlistParams, UpdateSetlistParams},
        service::setlist::SetlistService,
        state::AppState,
    },
};

/// Tag for grouping setlist endpoints in OpenAPI documentation
pub static SETLIST_TAG: &str = "setlist";

/// List a band's setlists with song counts.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the band
#[utoipa::path(
    get,
    path = "/api/setlists/band/{band_id}",
    tag = SETLIST_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    responses(
        (status = 200, description = "Band setlists", body = Vec<SetlistDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_band_setlists(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(band_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::BandMember(band_id)])
        .await?;

    let setlists = SetlistService::new(&state.db).list(band_id).await?;

    let setlists: Vec<SetlistDto> = setlists.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(setlists)))
}

/// Create a setlist, optionally with an initial song order.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the band
///
/// # Returns
/// - `201 Created` - The setlist with its songs
/// - `400 Bad Request` - Blank name, or songs repeated or from another band
#[utoipa::path(
    post,
    path = "/api/setlists/band/{band_id}",
    tag = SETLIST_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    request_body = CreateSetlistDto,
    responses(
        (status = 201, description = "Setlist created", body = SetlistDetailDto),
        (status = 400, description = "Invalid setlist data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_setlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(band_id): Path<i32>,
    Json(payload): Json<CreateSetlistDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::BandMember(band_id)])
        .await?;

    let song_ids = payload.song_ids.clone().unwrap_or_default();
    let params = CreateSetlistParams::from_dto(band_id, payload);

    let setlist = SetlistService::new(&state.db)
        .create(params, song_ids)
        .await?
        .into_dto();

    state
        .realtime
        .publish(band_id, RealtimeEvent::SetlistUpdated, &setlist);

    Ok((StatusCode::CREATED, Json(setlist)))
}

/// Get a setlist with its songs in order.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the setlist's band
#[utoipa::path(
    get,
    path = "/api/setlists/{id}",
    tag = SETLIST_TAG,
    params(
        ("id" = i32, Path, description = "Setlist ID")
    ),
    responses(
        (status = 200, description = "Setlist details", body = SetlistDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 404, description = "Setlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_setlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt, &headers);
    let user = guard.require(&[]).await?;

    let service = SetlistService::new(&state.db);
    let setlist = service.get(id).await?;

    guard
        .check(user.id, &[Permission::BandMember(setlist.setlist.band_id)])
        .await?;

    Ok((StatusCode::OK, Json(setlist.into_dto())))
}

/// Rename a setlist or change its description.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the setlist's band
#[utoipa::path(
    put,
    path = "/api/setlists/{id}",
    tag = SETLIST_TAG,
    params(
        ("id" = i32, Path, description = "Setlist ID")
    ),
    request_body = UpdateSetlistDto,
    responses(
        (status = 200, description = "Setlist updated", body = SetlistDetailDto),
        (status = 400, description = "Invalid setlist data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 404, description = "Setlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_setlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSetlistDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt, &headers);
    let user = guard.require(&[]).await?;

    let service = SetlistService::new(&state.db);
    let existing = service.find(id).await?;

    guard
        .check(user.id, &[Permission::BandMember(existing.band_id)])
        .await?;

    let params = UpdateSetlistParams::from_dto(id, payload);
    let setlist = service.update(params).await?.into_dto();

    state
        .realtime
        .publish(existing.band_id, RealtimeEvent::SetlistUpdated, &setlist);

    Ok((StatusCode::OK, Json(setlist)))
}

/// Replace the ordered song list of a setlist.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the setlist's band
///
/// # Returns
/// - `200 OK` - The setlist with its new song order
/// - `400 Bad Request` - A song is repeated or belongs to another band
#[utoipa::path(
    put,
    path = "/api/setlists/{id}/songs",
    tag = SETLIST_TAG,
    params(
        ("id" = i32, Path, description = "Setlist ID")
    ),
    request_body = UpdateSetlistSongsDto,
    responses(
        (status = 200, description = "Songs replaced", body = SetlistDetailDto),
        (status = 400, description = "Invalid song list", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 404, description = "Setlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_setlist_songs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSetlistSongsDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt, &headers);
    let user = guard.require(&[]).await?;

    let service = SetlistService::new(&state.db);
    let existing = service.find(id).await?;

    guard
        .check(user.id, &[Permission::BandMember(existing.band_id)])
        .await?;

    let setlist = service
        .replace_songs(&existing, payload.song_ids)
        .await?
        .into_dto();

    state
        .realtime
        .publish(existing.band_id, RealtimeEvent::SetlistUpdated, &setlist);

    Ok((StatusCode::OK, Json(setlist)))
}

/// Delete a setlist.
///
/// Rehearsals that used it keep their date and lose the setlist.
///
/// # Access Control
/// - `BandLeader` - Caller must lead the setlist's band
#[utoipa::path(
    delete,
    path = "/api/setlists/{id}",
    tag = SETLIST_TAG,
    params(
        ("id" = i32, Path, description = "Setlist ID")
    ),
    responses(
        (status = 204, description = "Setlist deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of this band", body = ErrorDto),
        (status = 404, description = "Setlist not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_setlist(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt, &headers);
    let user = guard.require(&[]).await?;

    let service = SetlistService::new(&state.db);
    let existing = service.find(id).await?;

    guard
        .check(user.id, &[Permission::BandLeader(existing.band_id)])
        .await?;

    service.delete(id).await?;

    state.realtime.publish(
        existing.band_id,
        RealtimeEvent::SetlistUpdated,
        &json!({ "id": id, "deleted": true }),
    );

    Ok(StatusCode::NO_CONTENT)
}
