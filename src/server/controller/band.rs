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
        band::{
            AddMemberDto, BandDetailDto, BandDto, BandMemberDto, CreateBandDto, UpdateBandDto,
            UpdateMemberRoleDto, UserBandDto,
        },
        realtime::RealtimeEvent,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::band::{CreateBandParams, UpdateBandParams},
        service::band::{BandService, MemberRemoval},
        state::AppState,
    },
};

/// Tag for grouping band endpoints in OpenAPI documentation
pub static BAND_TAG: &str = "band";

/// List the caller's bands.
///
/// # Returns
/// - `200 OK` - Bands the caller belongs to, with the caller's role and member counts
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    get,
    path = "/api/bands",
    tag = BAND_TAG,
    responses(
        (status = 200, description = "Caller's bands", body = Vec<UserBandDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_bands(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let bands = BandService::new(&state.db).list_for_user(user.id).await?;

    let bands: Vec<UserBandDto> = bands.into_iter().map(|b| b.into_dto()).collect();

    Ok((StatusCode::OK, Json(bands)))
}

/// Create a band.
///
/// The caller becomes the band's first leader.
///
/// # Returns
/// - `201 Created` - The band with its member list
/// - `400 Bad Request` - Blank name
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    post,
    path = "/api/bands",
    tag = BAND_TAG,
    request_body = CreateBandDto,
    responses(
        (status = 201, description = "Band created", body = BandDetailDto),
        (status = 400, description = "Invalid band data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_band(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateBandDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = CreateBandParams::from_dto(payload);
    let band = BandService::new(&state.db).create(user.id, params).await?;

    Ok((StatusCode::CREATED, Json(band.into_dto())))
}

/// Get a band with its members.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the band
///
/// # Returns
/// - `200 OK` - The band and its members
/// - `401 Unauthorized` - User not authenticated
/// - `403 Forbidden` - Caller is not a member
/// - `404 Not Found` - No such band
#[utoipa::path(
    get,
    path = "/api/bands/{band_id}",
    tag = BAND_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    responses(
        (status = 200, description = "Band details", body = BandDetailDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 404, description = "Band not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_band(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(band_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::BandMember(band_id)])
        .await?;

    let band = BandService::new(&state.db).get(band_id).await?;

    Ok((StatusCode::OK, Json(band.into_dto())))
}

/// Update a band's name or description.
///
/// # Access Control
/// - `BandLeader` - Caller must lead the band
///
/// # Returns
/// - `200 OK` - The updated band
/// - `400 Bad Request` - Blank name
/// - `403 Forbidden` - Caller is not a leader of the band
#[utoipa::path(
    put,
    path = "/api/bands/{band_id}",
    tag = BAND_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    request_body = UpdateBandDto,
    responses(
        (status = 200, description = "Band updated", body = BandDto),
        (status = 400, description = "Invalid band data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of this band", body = ErrorDto),
        (status = 404, description = "Band not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_band(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(band_id): Path<i32>,
    Json(payload): Json<UpdateBandDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::BandLeader(band_id)])
        .await?;

    let params = UpdateBandParams::from_dto(band_id, payload);
    let band = BandService::new(&state.db).update(params).await?;

    Ok((StatusCode::OK, Json(band.into_dto())))
}

/// Delete a band.
///
/// Rehearsals, setlists, songs and memberships go with it. Shared equipment stays
/// with its owners.
///
/// # Access Control
/// - `BandLeader` - Caller must lead the band
#[utoipa::path(
    delete,
    path = "/api/bands/{band_id}",
    tag = BAND_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    responses(
        (status = 204, description = "Band deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of this band", body = ErrorDto),
        (status = 404, description = "Band not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_band(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(band_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::BandLeader(band_id)])
        .await?;

    BandService::new(&state.db).delete(band_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List a band's members.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the band
#[utoipa::path(
    get,
    path = "/api/bands/{band_id}/members",
    tag = BAND_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    responses(
        (status = 200, description = "Band members", body = Vec<BandMemberDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_members(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(band_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::BandMember(band_id)])
        .await?;

    let members = BandService::new(&state.db).members(band_id).await?;

    let members: Vec<BandMemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Add an existing user to the band by email.
///
/// # Access Control
/// - `BandLeader` - Caller must lead the band
///
/// # Returns
/// - `201 Created` - The new member
/// - `404 Not Found` - No account uses that email
/// - `409 Conflict` - Already a member
#[utoipa::path(
    post,
    path = "/api/bands/{band_id}/members",
    tag = BAND_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    request_body = AddMemberDto,
    responses(
        (status = 201, description = "Member added", body = BandMemberDto),
        (status = 400, description = "Invalid email", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of this band", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "User is already a member", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn add_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(band_id): Path<i32>,
    Json(payload): Json<AddMemberDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::BandLeader(band_id)])
        .await?;

    let member = BandService::new(&state.db)
        .add_member(band_id, payload)
        .await?
        .into_dto();

    state
        .realtime
        .publish(band_id, RealtimeEvent::MemberAdded, &member);

    Ok((StatusCode::CREATED, Json(member)))
}

/// Change a member's role.
///
/// # Access Control
/// - `BandLeader` - Caller must lead the band
///
/// # Returns
/// - `200 OK` - The member with the new role
/// - `400 Bad Request` - Demoting the band's only leader
/// - `404 Not Found` - The user is not a member
#[utoipa::path(
    put,
    path = "/api/bands/{band_id}/members/{user_id}",
    tag = BAND_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID"),
        ("user_id" = i32, Path, description = "Member's user ID")
    ),
    request_body = UpdateMemberRoleDto,
    responses(
        (status = 200, description = "Role updated", body = BandMemberDto),
        (status = 400, description = "A band must have at least one leader", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of this band", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((band_id, user_id)): Path<(i32, i32)>,
    Json(payload): Json<UpdateMemberRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::BandLeader(band_id)])
        .await?;

    let member = BandService::new(&state.db)
        .update_member_role(band_id, user_id, payload.role)
        .await?
        .into_dto();

    state
        .realtime
        .publish(band_id, RealtimeEvent::MemberUpdated, &member);

    Ok((StatusCode::OK, Json(member)))
}

/// Remove a member, or leave the band.
///
/// Leaders may remove anyone. Other members may only remove themselves. When the last
/// member leaves, the band is deleted.
///
/// # Access Control
/// - Leader, or the member themself
///
/// # Returns
/// - `204 No Content` - Member removed
/// - `400 Bad Request` - Removing the only leader while other members remain
/// - `403 Forbidden` - Not a member, or a non-leader removing someone else
/// - `404 Not Found` - The user is not a member
#[utoipa::path(
    delete,
    path = "/api/bands/{band_id}/members/{user_id}",
    tag = BAND_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID"),
        ("user_id" = i32, Path, description = "Member's user ID")
    ),
    responses(
        (status = 204, description = "Member removed"),
        (status = 400, description = "A band must have at least one leader", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not allowed to remove this member", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn remove_member(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((band_id, user_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let removal = BandService::new(&state.db)
        .remove_member(actor.id, band_id, user_id)
        .await?;

    state.realtime.publish(
        band_id,
        RealtimeEvent::MemberRemoved,
        &json!({
            "userId": user_id,
            "bandDeleted": removal == MemberRemoval::BandDeleted,
        }),
    );

    Ok(StatusCode::NO_CONTENT)
}
