use crate::{
    client::{api::helper, model::error::ApiError},
    model::{
        api::MessageDto,
        auth::{
            AuthResponseDto, CurrentUserDto, ForgotPasswordDto, LoginDto, RegisterDto,
            ResetPasswordDto,
        },
    },
};

pub async fn register(payload: &RegisterDto) -> Result<AuthResponseDto, ApiError> {
    helper::post("/api/auth/register", payload).await
}

pub async fn login(payload: &LoginDto) -> Result<AuthResponseDto, ApiError> {
    helper::post("/api/auth/login", payload).await
}

pub async fn get_current_user() -> Result<CurrentUserDto, ApiError> {
    helper::get("/api/auth/me").await
}

pub async fn forgot_password(payload: &ForgotPasswordDto) -> Result<MessageDto, ApiError> {
    helper::post("/api/auth/forgot-password", payload).await
}

pub async fn reset_password(payload: &ResetPasswordDto) -> Result<MessageDto, ApiError> {
    helper::post("/api/auth/reset-password", payload).await
}
