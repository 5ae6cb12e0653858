use crate::{
    client::{api::helper, model::error::ApiError},
    model::{
        api::MessageDto,
        user::{ChangePasswordDto, UpdateUserDto, UserDto},
    },
};

pub async fn update_profile(payload: &UpdateUserDto) -> Result<UserDto, ApiError> {
    helper::put("/api/users/me", payload).await
}

pub async fn change_password(payload: &ChangePasswordDto) -> Result<MessageDto, ApiError> {
    helper::put("/api/users/me/password", payload).await
}

pub async fn delete_account() -> Result<(), ApiError> {
    helper::delete("/api/users/me").await
}
