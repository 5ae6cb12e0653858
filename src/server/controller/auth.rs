use axum::{extract::State, http::HeaderMap, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto, ValidationErrorDto},
        auth::{
            AuthResponseDto, CurrentUserDto, ForgotPasswordDto, LoginDto, RegisterDto,
            ResetPasswordDto,
        },
    },
    server::{
        error::AppError, middleware::auth::AuthGuard, model::user::User,
        service::auth::AuthService, state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// Creates the user with a bcrypt-hashed password and returns a session token so the
/// client is logged in straight away. Email notifications are on by default; SMS is on
/// only when a phone number was given.
///
/// # Returns
/// - `201 Created` - Token and the new user
/// - `400 Bad Request` - Invalid email, short password or missing names
/// - `409 Conflict` - Email already registered
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = AuthResponseDto),
        (status = 400, description = "Invalid registration data", body = ValidationErrorDto),
        (status = 409, description = "Email already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let (token, user) = service.register(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Token and the user
/// - `400 Bad Request` - Invalid input or wrong password
/// - `404 Not Found` - No account with that email
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = AuthResponseDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    let (token, user) = service.login(payload).await?;

    Ok((
        StatusCode::OK,
        Json(AuthResponseDto {
            token,
            user: user.into_dto(),
        }),
    ))
}

/// Get the currently authenticated user.
///
/// The client calls this on load to check whether its stored token is still valid.
///
/// # Returns
/// - `200 OK` - The user behind the bearer token
/// - `401 Unauthorized` - Missing, invalid or expired token
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Current user", body = CurrentUserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn me(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[])
        .await?;

    Ok((
        StatusCode::OK,
        Json(CurrentUserDto {
            user: User::from_entity(user).into_dto(),
        }),
    ))
}

/// Request a password reset link by email.
///
/// # Returns
/// - `200 OK` - Reset email sent
/// - `404 Not Found` - No account with that email
#[utoipa::path(
    post,
    path = "/api/auth/forgot-password",
    tag = AUTH_TAG,
    request_body = ForgotPasswordDto,
    responses(
        (status = 200, description = "Reset email sent", body = MessageDto),
        (status = 400, description = "Invalid email", body = ValidationErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(payload): Json<ForgotPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    service
        .forgot_password(payload, state.mailer.as_ref(), &state.app_url)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password reset email sent".to_string(),
        }),
    ))
}

/// Set a new password using a reset token.
///
/// # Returns
/// - `200 OK` - Password updated
/// - `400 Bad Request` - Invalid, expired or wrong-purpose token, or short password
/// - `404 Not Found` - The user no longer exists
#[utoipa::path(
    post,
    path = "/api/auth/reset-password",
    tag = AUTH_TAG,
    request_body = ResetPasswordDto,
    responses(
        (status = 200, description = "Password reset", body = MessageDto),
        (status = 400, description = "Invalid or expired token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(payload): Json<ResetPasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.jwt);

    service.reset_password(payload).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Password has been reset".to_string(),
        }),
    ))
}
