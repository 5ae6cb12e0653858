use crate::{
    client::{api::helper, model::error::ApiError},
    model::band::{
        AddMemberDto, BandDetailDto, BandDto, BandMemberDto, CreateBandDto, UpdateBandDto,
        UpdateMemberRoleDto, UserBandDto,
    },
};

pub async fn get_bands() -> Result<Vec<UserBandDto>, ApiError> {
    helper::get("/api/bands").await
}

pub async fn create_band(payload: &CreateBandDto) -> Result<BandDetailDto, ApiError> {
    helper::post("/api/bands", payload).await
}

pub async fn get_band(band_id: i32) -> Result<BandDetailDto, ApiError> {
    helper::get(&format!("/api/bands/{}", band_id)).await
}

pub async fn update_band(band_id: i32, payload: &UpdateBandDto) -> Result<BandDto, ApiError> {
    helper::put(&format!("/api/bands/{}", band_id), payload).await
}

pub async fn delete_band(band_id: i32) -> Result<(), ApiError> {
    helper::delete(&format!("/api/bands/{}", band_id)).await
}

pub async fn add_member(band_id: i32, payload: &AddMemberDto) -> Result<BandMemberDto, ApiError> {
    helper::post(&format!("/api/bands/{}/members", band_id), payload).await
}

pub async fn update_member_role(
    band_id: i32,
    user_id: i32,
    payload: &UpdateMemberRoleDto,
) -> Result<BandMemberDto, ApiError> {
    helper::put(
        &format!("/api/bands/{}/members/{}", band_id, user_id),
        payload,
    )
    .await
}

pub async fn remove_member(band_id: i32, user_id: i32) -> Result<(), ApiError> {
    helper::delete(&format!("/api/bands/{}/members/{}", band_id, user_id)).await
}
