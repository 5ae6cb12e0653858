//! Setlist factory for creating test setlists and their ordered songs.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test setlists.
///
/// Songs passed to `songs()` are stored in the given order starting at position 0.
pub struct SetlistFactory<'a> {
    db: &'a DatabaseConnection,
    band_id: i32,
    name: String,
    description: Option<String>,
    song_ids: Vec<i32>,
}

impl<'a> SetlistFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, band_id: i32) -> Self {
        Self {
            db,
            band_id,
            name: format!("Setlist {}", next_id()),
            description: None,
            song_ids: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn songs(mut self, song_ids: Vec<i32>) -> Self {
        self.song_ids = song_ids;
        self
    }

    /// Builds and inserts the setlist and its song entries.
    pub async fn build(self) -> Result<entity::setlist::Model, DbErr> {
        let now = Utc::now();
        let setlist = entity::setlist::ActiveModel {
            band_id: ActiveValue::Set(self.band_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for (position, song_id) in self.song_ids.into_iter().enumerate() {
            entity::setlist_song::ActiveModel {
                setlist_id: ActiveValue::Set(setlist.id),
                song_id: ActiveValue::Set(song_id),
                position: ActiveValue::Set(position as i32),
            }
            .insert(self.db)
            .await?;
        }

        Ok(setlist)
    }
}

/// Creates an empty setlist with default values for the band.
pub async fn create_setlist(
    db: &DatabaseConnection,
    band_id: i32,
) -> Result<entity::setlist::Model, DbErr> {
    SetlistFactory::new(db, band_id).build().await
}
