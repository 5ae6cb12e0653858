use crate::{
    client::{api::helper, model::error::ApiError},
    model::setlist::{
        CreateSetlistDto, SetlistDetailDto, SetlistDto, UpdateSetlistDto, UpdateSetlistSongsDto,
    },
};

pub async fn get_band_setlists(band_id: i32) -> Result<Vec<SetlistDto>, ApiError> {
    helper::get(&format!("/api/setlists/band/{}", band_id)).await
}

pub async fn create_setlist(
    band_id: i32,
    payload: &CreateSetlistDto,
) -> Result<SetlistDetailDto, ApiError> {
    helper::post(&format!("/api/setlists/band/{}", band_id), payload).await
}

pub async fn get_setlist(id: i32) -> Result<SetlistDetailDto, ApiError> {
    helper::get(&format!("/api/setlists/{}", id)).await
}

pub async fn update_setlist(
    id: i32,
    payload: &UpdateSetlistDto,
) -> Result<SetlistDetailDto, ApiError> {
    helper::put(&format!("/api/setlists/{}", id), payload).await
}

pub async fn update_setlist_songs(
    id: i32,
    payload: &UpdateSetlistSongsDto,
) -> Result<SetlistDetailDto, ApiError> {
    helper::put(&format!("/api/setlists/{}/songs", id), payload).await
}

pub async fn delete_setlist(id: i32) -> Result<(), ApiError> {
    helper::delete(&format!("/api/setlists/{}", id)).await
}
