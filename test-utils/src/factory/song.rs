//! Song factory for creating test song entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test songs with customizable fields.
pub struct SongFactory<'a> {
    db: &'a DatabaseConnection,
    band_id: i32,
    title: String,
    artist: Option<String>,
    duration_seconds: Option<i32>,
    tempo: Option<i32>,
}

impl<'a> SongFactory<'a> {
    /// Creates a new SongFactory with default title `"Song {id}"` and a 3 minute duration.
    pub fn new(db: &'a DatabaseConnection, band_id: i32) -> Self {
        Self {
            db,
            band_id,
            title: format!("Song {}", next_id()),
            artist: None,
            duration_seconds: Some(180),
            tempo: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn artist(mut self, artist: Option<String>) -> Self {
        self.artist = artist;
        self
    }

    pub fn duration_seconds(mut self, duration_seconds: Option<i32>) -> Self {
        self.duration_seconds = duration_seconds;
        self
    }

    pub fn tempo(mut self, tempo: Option<i32>) -> Self {
        self.tempo = tempo;
        self
    }

    /// Builds and inserts the song entity into the database.
    pub async fn build(self) -> Result<entity::song::Model, DbErr> {
        let now = Utc::now();
        entity::song::ActiveModel {
            band_id: ActiveValue::Set(self.band_id),
            title: ActiveValue::Set(self.title),
            artist: ActiveValue::Set(self.artist),
            duration_seconds: ActiveValue::Set(self.duration_seconds),
            song_key: ActiveValue::Set(None),
            tempo: ActiveValue::Set(self.tempo),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a song with default values for the band.
pub async fn create_song(
    db: &DatabaseConnection,
    band_id: i32,
) -> Result<entity::song::Model, DbErr> {
    SongFactory::new(db, band_id).build().await
}
