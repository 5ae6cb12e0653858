use sea_orm::DatabaseConnection;

use crate::server::{
    data::song::SongRepository,
    error::AppError,
    model::song::{CreateSongParams, Song, UpdateSongParams},
    util::validate::Validator,
};

pub struct SongService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SongService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Songs of a band ordered by title.
    pub async fn list(&self, band_id: i32) -> Result<Vec<Song>, AppError> {
        Ok(SongRepository::new(self.db).get_by_band(band_id).await?)
    }

    /// Adds a song to a band's catalogue.
    ///
    /// # Returns
    /// - `Ok(Song)` - The created song
    /// - `Err(AppError::Validation)` - Blank title or non-positive duration/tempo
    pub async fn create(&self, params: CreateSongParams) -> Result<Song, AppError> {
        Validator::new()
            .required("title", &params.title)
            .positive("durationSeconds", params.duration_seconds)
            .positive("tempo", params.tempo)
            .finish()?;

        Ok(SongRepository::new(self.db).create(params).await?)
    }

    pub async fn get(&self, id: i32) -> Result<Song, AppError> {
        SongRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(song_not_found)
    }

    pub async fn update(&self, params: UpdateSongParams) -> Result<Song, AppError> {
        Validator::new()
            .not_blank("title", params.title.as_deref())
            .positive("durationSeconds", params.duration_seconds.flatten())
            .positive("tempo", params.tempo.flatten())
            .finish()?;

        SongRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(song_not_found)
    }

    /// Deletes a song. It is removed from every setlist that used it.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !SongRepository::new(self.db).delete(id).await? {
            return Err(song_not_found());
        }

        Ok(())
    }
}

fn song_not_found() -> AppError {
    AppError::NotFound("Song not found".to_string())
}
