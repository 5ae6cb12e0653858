use chrono::{DateTime, Utc};

use crate::{
    model::song::{CreateSongDto, SongDto, UpdateSongDto},
    server::util::validate::{clearable, normalize_optional},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Song {
    pub id: i32,
    pub band_id: i32,
    pub title: String,
    pub artist: Option<String>,
    pub duration_seconds: Option<i32>,
    pub key: Option<String>,
    pub tempo: Option<i32>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Song {
    pub fn from_entity(entity: entity::song::Model) -> Self {
        Self {
            id: entity.id,
            band_id: entity.band_id,
            title: entity.title,
            artist: entity.artist,
            duration_seconds: entity.duration_seconds,
            key: entity.song_key,
            tempo: entity.tempo,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SongDto {
        SongDto {
            id: self.id,
            band_id: self.band_id,
            title: self.title,
            artist: self.artist,
            duration_seconds: self.duration_seconds,
            key: self.key,
            tempo: self.tempo,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSongParams {
    pub band_id: i32,
    pub title: String,
    pub artist: Option<String>,
    pub duration_seconds: Option<i32>,
    pub key: Option<String>,
    pub tempo: Option<i32>,
    pub notes: Option<String>,
}

/// Partial song update. Outer `None` leaves a field unchanged, `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateSongParams {
    pub id: i32,
    pub title: Option<String>,
    pub artist: Option<Option<String>>,
    pub duration_seconds: Option<Option<i32>>,
    pub key: Option<Option<String>>,
    pub tempo: Option<Option<i32>>,
    pub notes: Option<Option<String>>,
}

impl CreateSongParams {
    pub fn from_dto(band_id: i32, dto: CreateSongDto) -> Self {
        Self {
            band_id,
            title: dto.title.trim().to_string(),
            artist: normalize_optional(dto.artist),
            duration_seconds: dto.duration_seconds,
            key: normalize_optional(dto.key),
            tempo: dto.tempo,
            notes: normalize_optional(dto.notes),
        }
    }
}

impl UpdateSongParams {
    pub fn from_dto(id: i32, dto: UpdateSongDto) -> Self {
        Self {
            id,
            title: dto.title.map(|v| v.trim().to_string()),
            artist: clearable(dto.artist),
            duration_seconds: dto.duration_seconds.map(Some),
            key: clearable(dto.key),
            tempo: dto.tempo.map(Some),
            notes: clearable(dto.notes),
        }
    }
}
