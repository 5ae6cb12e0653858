use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        equipment::{CreateEquipmentDto, EquipmentDto, UpdateEquipmentDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::equipment::{CreateEquipmentParams, UpdateEquipmentParams},
        service::equipment::EquipmentService,
        state::AppState,
    },
};

/// Tag for grouping equipment endpoints in OpenAPI documentation
pub static EQUIPMENT_TAG: &str = "equipment";

/// List the caller's equipment.
#[utoipa::path(
    get,
    path = "/api/equipment",
    tag = EQUIPMENT_TAG,
    responses(
        (status = 200, description = "Caller's equipment", body = Vec<EquipmentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_my_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let items = EquipmentService::new(&state.db)
        .list_for_owner(user.id)
        .await?;

    let items: Vec<EquipmentDto> = items.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// Add an item of equipment, optionally shared with one of the caller's bands.
///
/// # Returns
/// - `201 Created` - The new item
/// - `400 Bad Request` - Blank name
/// - `403 Forbidden` - Sharing with a band the caller is not in
#[utoipa::path(
    post,
    path = "/api/equipment",
    tag = EQUIPMENT_TAG,
    request_body = CreateEquipmentDto,
    responses(
        (status = 201, description = "Equipment created", body = EquipmentDto),
        (status = 400, description = "Invalid equipment data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<CreateEquipmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = CreateEquipmentParams::from_dto(user.id, payload);
    let item = EquipmentService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

/// List equipment shared with a band.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the band
#[utoipa::path(
    get,
    path = "/api/equipment/band/{band_id}",
    tag = EQUIPMENT_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    responses(
        (status = 200, description = "Equipment shared with the band", body = Vec<EquipmentDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_band_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(band_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::BandMember(band_id)])
        .await?;

    let items = EquipmentService::new(&state.db)
        .list_for_band(band_id)
        .await?;

    let items: Vec<EquipmentDto> = items.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// Get one of the caller's items.
///
/// # Access Control
/// - Owner only
#[utoipa::path(
    get,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    responses(
        (status = 200, description = "Equipment", body = EquipmentDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let item = EquipmentService::new(&state.db)
        .get_owned(user.id, id)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Update one of the caller's items.
///
/// # Access Control
/// - Owner only; a new band must be one the owner belongs to
#[utoipa::path(
    put,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    request_body = UpdateEquipmentDto,
    responses(
        (status = 200, description = "Equipment updated", body = EquipmentDto),
        (status = 400, description = "Invalid equipment data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner or not a member of the band", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateEquipmentDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = UpdateEquipmentParams::from_dto(id, payload);
    let item = EquipmentService::new(&state.db)
        .update(user.id, params)
        .await?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

/// Delete one of the caller's items.
///
/// # Access Control
/// - Owner only
#[utoipa::path(
    delete,
    path = "/api/equipment/{id}",
    tag = EQUIPMENT_TAG,
    params(
        ("id" = i32, Path, description = "Equipment ID")
    ),
    responses(
        (status = 204, description = "Equipment deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the owner", body = ErrorDto),
        (status = 404, description = "Equipment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_equipment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    EquipmentService::new(&state.db).delete(user.id, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
