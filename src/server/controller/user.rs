use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        user::{ChangePasswordDto, UpdateUserDto, UserDto},
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::user::UpdateUserParams,
        service::user::UserService, state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get a user's public profile.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The profile, never including the password hash
/// - `401 Unauthorized` - User not authenticated
/// - `404 Not Found` - No such user
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User profile", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let user = UserService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update the caller's profile.
///
/// Names, phone number and notification preferences. An empty phone number clears it.
///
/// # Returns
/// - `200 OK` - The updated profile
/// - `400 Bad Request` - A name was blank
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Profile updated", body = UserDto),
        (status = 400, description = "Invalid profile data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_me(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    let params = UpdateUserParams::from_dto(user.id, payload);
    let updated = UserService::new(&state.db).update_profile(params).await?;

    Ok((StatusCode::OK, Json(updated.into_dto())))
}

/// Change the caller's password.
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Current password wrong or new password too short
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    put,
    path = "/api/users/me/password",
    tag = USER_TAG,
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Current password is incorrect", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    UserService::new(&state.db)
        .change_password(user.id, payload)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password updated".to_string(),
        }),
    ))
}

/// Delete the caller's account.
///
/// Memberships go with the account. Bands where the caller was the only member are
/// deleted too.
///
/// # Returns
/// - `204 No Content` - Account deleted
/// - `400 Bad Request` - Caller is the last leader of a band that has other members
/// - `401 Unauthorized` - User not authenticated
#[utoipa::path(
    delete,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 204, description = "Account deleted"),
        (status = 400, description = "Caller is the last leader of a band", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    UserService::new(&state.db).delete_account(user.id).await?;

    Ok(StatusCode::NO_CONTENT)
}
