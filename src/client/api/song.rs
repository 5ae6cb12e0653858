use crate::{
    client::{api::helper, model::error::ApiError},
    model::song::{CreateSongDto, SongDto, UpdateSongDto},
};

pub async fn get_band_songs(band_id: i32) -> Result<Vec<SongDto>, ApiError> {
    helper::get(&format!("/api/songs/band/{}", band_id)).await
}

pub async fn create_song(band_id: i32, payload: &CreateSongDto) -> Result<SongDto, ApiError> {
    helper::post(&format!("/api/songs/band/{}", band_id), payload).await
}

pub async fn get_song(id: i32) -> Result<SongDto, ApiError> {
    helper::get(&format!("/api/songs/{}", id)).await
}

pub async fn update_song(id: i32, payload: &UpdateSongDto) -> Result<SongDto, ApiError> {
    helper::put(&format!("/api/songs/{}", id), payload).await
}

pub async fn delete_song(id: i32) -> Result<(), ApiError> {
    helper::delete(&format!("/api/songs/{}", id)).await
}
