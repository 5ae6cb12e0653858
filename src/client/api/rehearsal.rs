use crate::{
    client::{api::helper, model::error::ApiError},
    model::rehearsal::{
        AttendanceDto, CreateRehearsalDto, RehearsalDetailDto, RehearsalDto,
        UpcomingRehearsalDto, UpdateAttendanceDto, UpdateRehearsalDto,
    },
};

pub async fn get_upcoming() -> Result<Vec<UpcomingRehearsalDto>, ApiError> {
    helper::get("/api/rehearsals/upcoming").await
}

pub async fn get_band_rehearsals(band_id: i32) -> Result<Vec<RehearsalDto>, ApiError> {
    helper::get(&format!("/api/rehearsals/band/{}", band_id)).await
}

pub async fn create_rehearsal(
    band_id: i32,
    payload: &CreateRehearsalDto,
) -> Result<RehearsalDto, ApiError> {
    helper::post(&format!("/api/rehearsals/band/{}", band_id), payload).await
}

pub async fn get_rehearsal(id: i32) -> Result<RehearsalDetailDto, ApiError> {
    helper::get(&format!("/api/rehearsals/{}", id)).await
}

pub async fn update_rehearsal(
    id: i32,
    payload: &UpdateRehearsalDto,
) -> Result<RehearsalDto, ApiError> {
    helper::put(&format!("/api/rehearsals/{}", id), payload).await
}

pub async fn delete_rehearsal(id: i32) -> Result<(), ApiError> {
    helper::delete(&format!("/api/rehearsals/{}", id)).await
}

pub async fn update_attendance(
    id: i32,
    payload: &UpdateAttendanceDto,
) -> Result<AttendanceDto, ApiError> {
    helper::put(&format!("/api/rehearsals/{}/attendance", id), payload).await
}
