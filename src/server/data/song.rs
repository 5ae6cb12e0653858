use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::song::{CreateSongParams, Song, UpdateSongParams};

pub struct SongRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SongRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateSongParams) -> Result<Song, DbErr> {
        let now = Utc::now();
        let song = entity::song::ActiveModel {
            band_id: ActiveValue::Set(params.band_id),
            title: ActiveValue::Set(params.title),
            artist: ActiveValue::Set(params.artist),
            duration_seconds: ActiveValue::Set(params.duration_seconds),
            song_key: ActiveValue::Set(params.key),
            tempo: ActiveValue::Set(params.tempo),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Song::from_entity(song))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Song>, DbErr> {
        let song = entity::prelude::Song::find_by_id(id).one(self.db).await?;

        Ok(song.map(Song::from_entity))
    }

    /// Gets a band's repertoire ordered by title.
    pub async fn get_by_band(&self, band_id: i32) -> Result<Vec<Song>, DbErr> {
        let songs = entity::prelude::Song::find()
            .filter(entity::song::Column::BandId.eq(band_id))
            .order_by_asc(entity::song::Column::Title)
            .all(self.db)
            .await?;

        Ok(songs.into_iter().map(Song::from_entity).collect())
    }

    /// Counts how many of `song_ids` belong to the band.
    pub async fn count_in_band(&self, band_id: i32, song_ids: Vec<i32>) -> Result<u64, DbErr> {
        if song_ids.is_empty() {
            return Ok(0);
        }

        entity::prelude::Song::find()
            .filter(entity::song::Column::BandId.eq(band_id))
            .filter(entity::song::Column::Id.is_in(song_ids))
            .count(self.db)
            .await
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Song))` - The updated song
    /// - `Ok(None)` - No song with that id
    pub async fn update(&self, params: UpdateSongParams) -> Result<Option<Song>, DbErr> {
        let Some(song) = entity::prelude::Song::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::song::ActiveModel = song.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(artist) = params.artist {
            active.artist = ActiveValue::Set(artist);
        }
        if let Some(duration_seconds) = params.duration_seconds {
            active.duration_seconds = ActiveValue::Set(duration_seconds);
        }
        if let Some(key) = params.key {
            active.song_key = ActiveValue::Set(key);
        }
        if let Some(tempo) = params.tempo {
            active.tempo = ActiveValue::Set(tempo);
        }
        if let Some(notes) = params.notes {
            active.notes = ActiveValue::Set(notes);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let song = active.update(self.db).await?;

        Ok(Some(Song::from_entity(song)))
    }

    /// Deletes a song; it is removed from every setlist.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Song::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
