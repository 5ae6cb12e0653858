use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde_json::json;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        realtime::RealtimeEvent,
        rehearsal::{
            AttendanceDto, CreateRehearsalDto, RehearsalDetailDto, RehearsalDto,
            UpcomingRehearsalDto, UpdateAttendanceDto, UpdateRehearsalDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::rehearsal::{CreateRehearsalParams, UpdateRehearsalParams},
        service::rehearsal::RehearsalService,
        state::AppState,
    },
};

/// Tag for grouping rehearsal endpoints in OpenAPI documentation
pub static REHEARSAL_TAG: &str = "rehearsal";

/// Upcoming rehearsals across all of the caller's bands.
///
/// # Returns
/// - `200 OK` - Rehearsals starting after now, soonest first, with band names
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/rehearsals/upcoming",
    tag = REHEARSAL_TAG,
    responses(
        (status = 200, description = "Upcoming rehearsals", body = Vec<UpcomingRehearsalDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_upcoming(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let rehearsals = RehearsalService::new(&state.db)
        .upcoming(user.id, Utc::now())
        .await?;

    let rehearsals: Vec<UpcomingRehearsalDto> =
        rehearsals.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(rehearsals)))
}

/// List a band's rehearsals ordered by start time.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the band
#[utoipa::path(
    get,
    path = "/api/rehearsals/band/{band_id}",
    tag = REHEARSAL_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    responses(
        (status = 200, description = "Band rehearsals", body = Vec<RehearsalDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_band_rehearsals(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(band_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::BandMember(band_id)])
        .await?;

    let rehearsals = RehearsalService::new(&state.db).list(band_id).await?;

    let rehearsals: Vec<RehearsalDto> = rehearsals.into_iter().map(|r| r.into_dto()).collect();

    Ok((StatusCode::OK, Json(rehearsals)))
}

/// Schedule a rehearsal.
///
/// With a `recurrence`, the whole series is created under one `seriesId` and the first
/// occurrence is returned. Every created rehearsal is pushed to the band room.
///
/// # Access Control
/// - `BandLeader` - Caller must lead the band
///
/// # Returns
/// - `201 Created` - The (first) rehearsal
/// - `400 Bad Request` - Missing title, end not after start, bad recurrence or a setlist
///   from another band
/// - `403 Forbidden` - Caller is not a leader of the band
#[utoipa::path(
    post,
    path = "/api/rehearsals/band/{band_id}",
    tag = REHEARSAL_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    request_body = CreateRehearsalDto,
    responses(
        (status = 201, description = "Rehearsal scheduled", body = RehearsalDto),
        (status = 400, description = "Invalid rehearsal data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of this band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_rehearsal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(band_id): Path<i32>,
    Json(payload): Json<CreateRehearsalDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::BandLeader(band_id)])
        .await?;

    let recurrence = payload.recurrence;
    let params = CreateRehearsalParams::from_dto(band_id, payload);

    let rehearsals = RehearsalService::new(&state.db)
        .create(params, recurrence)
        .await?;

    let rehearsals: Vec<RehearsalDto> = rehearsals.into_iter().map(|r| r.into_dto()).collect();
    for rehearsal in &rehearsals {
        state
            .realtime
            .publish(band_id, RealtimeEvent::RehearsalCreated, rehearsal);
    }

    let Some(first) = rehearsals.into_iter().next() else {
        return Err(AppError::InternalError(
            "Rehearsal creation returned no rows".to_string(),
        ));
    };

    Ok((StatusCode::CREATED, Json(first)))
}

/// Get a rehearsal with its setlist name and attendance.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the rehearsal's band
#[utoipa::path(
    get,
    path = "/api/rehearsals/{id}",
    tag = REHEARSAL_TAG,
    params(
        ("id" = i32, Path, description = "Rehearsal ID")
    ),
    responses(
        (status = 200, description = "Rehearsal details", body = RehearsalDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 404, description = "Rehearsal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_rehearsal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt, &headers);
    let user = guard.require(&[]).await?;

    let service = RehearsalService::new(&state.db);
    let rehearsal = service.find(id).await?;

    guard
        .check(user.id, &[Permission::BandMember(rehearsal.band_id)])
        .await?;

    let detail = service.detail(rehearsal).await?;

    Ok((StatusCode::OK, Json(detail.into_dto())))
}

/// Update a rehearsal.
///
/// Omitted fields stay as they are. Moving the start time re-arms the reminder.
///
/// # Access Control
/// - `BandLeader` - Caller must lead the rehearsal's band
#[utoipa::path(
    put,
    path = "/api/rehearsals/{id}",
    tag = REHEARSAL_TAG,
    params(
        ("id" = i32, Path, description = "Rehearsal ID")
    ),
    request_body = UpdateRehearsalDto,
    responses(
        (status = 200, description = "Rehearsal updated", body = RehearsalDto),
        (status = 400, description = "Invalid rehearsal data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of this band", body = ErrorDto),
        (status = 404, description = "Rehearsal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_rehearsal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateRehearsalDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt, &headers);
    let user = guard.require(&[]).await?;

    let service = RehearsalService::new(&state.db);
    let existing = service.find(id).await?;

    guard
        .check(user.id, &[Permission::BandLeader(existing.band_id)])
        .await?;

    let params = UpdateRehearsalParams::from_dto(id, payload);
    let rehearsal = service.update(&existing, params).await?.into_dto();

    state
        .realtime
        .publish(rehearsal.band_id, RealtimeEvent::RehearsalUpdated, &rehearsal);

    Ok((StatusCode::OK, Json(rehearsal)))
}

/// Delete a rehearsal.
///
/// # Access Control
/// - `BandLeader` - Caller must lead the rehearsal's band
#[utoipa::path(
    delete,
    path = "/api/rehearsals/{id}",
    tag = REHEARSAL_TAG,
    params(
        ("id" = i32, Path, description = "Rehearsal ID")
    ),
    responses(
        (status = 204, description = "Rehearsal deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of this band", body = ErrorDto),
        (status = 404, description = "Rehearsal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_rehearsal(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt, &headers);
    let user = guard.require(&[]).await?;

    let service = RehearsalService::new(&state.db);
    let existing = service.find(id).await?;

    guard
        .check(user.id, &[Permission::BandLeader(existing.band_id)])
        .await?;

    service.delete(id).await?;

    state.realtime.publish(
        existing.band_id,
        RealtimeEvent::RehearsalDeleted,
        &json!({ "id": id }),
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Set the caller's attendance for a rehearsal.
///
/// Replaces any earlier response from the same user.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the rehearsal's band
#[utoipa::path(
    put,
    path = "/api/rehearsals/{id}/attendance",
    tag = REHEARSAL_TAG,
    params(
        ("id" = i32, Path, description = "Rehearsal ID")
    ),
    request_body = UpdateAttendanceDto,
    responses(
        (status = 200, description = "Attendance recorded", body = AttendanceDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 404, description = "Rehearsal not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_attendance(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAttendanceDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt, &headers);
    let user = guard.require(&[]).await?;

    let service = RehearsalService::new(&state.db);
    let rehearsal = service.find(id).await?;

    guard
        .check(user.id, &[Permission::BandMember(rehearsal.band_id)])
        .await?;

    let attendance = service
        .set_attendance(id, user.id, payload.status)
        .await?
        .into_dto();

    state.realtime.publish(
        rehearsal.band_id,
        RealtimeEvent::AttendanceUpdated,
        &json!({ "rehearsalId": id, "attendance": attendance }),
    );

    Ok((StatusCode::OK, Json(attendance)))
}
