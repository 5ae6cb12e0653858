use chrono::{DateTime, Utc};

use crate::{
    model::setlist::{CreateSetlistDto, SetlistDetailDto, SetlistDto, UpdateSetlistDto},
    server::{
        model::song::Song,
        util::validate::{clearable, normalize_optional},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Setlist {
    pub id: i32,
    pub band_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Setlist {
    pub fn from_entity(entity: entity::setlist::Model) -> Self {
        Self {
            id: entity.id,
            band_id: entity.band_id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// Setlist list item with the number of songs it holds.
#[derive(Debug, Clone, PartialEq)]
pub struct SetlistWithCount {
    pub setlist: Setlist,
    pub song_count: u64,
}

impl SetlistWithCount {
    pub fn into_dto(self) -> SetlistDto {
        SetlistDto {
            id: self.setlist.id,
            band_id: self.setlist.band_id,
            name: self.setlist.name,
            description: self.setlist.description,
            song_count: self.song_count,
            created_at: self.setlist.created_at,
            updated_at: self.setlist.updated_at,
        }
    }
}

/// Setlist with its songs in position order.
#[derive(Debug, Clone, PartialEq)]
pub struct SetlistWithSongs {
    pub setlist: Setlist,
    pub songs: Vec<Song>,
}

impl SetlistWithSongs {
    /// Sum of known song durations; songs without a duration count as zero.
    pub fn total_duration_seconds(&self) -> i32 {
        self.songs.iter().filter_map(|s| s.duration_seconds).sum()
    }

    pub fn into_dto(self) -> SetlistDetailDto {
        let total_duration_seconds = self.total_duration_seconds();
        SetlistDetailDto {
            id: self.setlist.id,
            band_id: self.setlist.band_id,
            name: self.setlist.name,
            description: self.setlist.description,
            songs: self.songs.into_iter().map(|s| s.into_dto()).collect(),
            total_duration_seconds,
            created_at: self.setlist.created_at,
            updated_at: self.setlist.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSetlistParams {
    pub band_id: i32,
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateSetlistParams {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<Option<String>>,
}

impl CreateSetlistParams {
    pub fn from_dto(band_id: i32, dto: CreateSetlistDto) -> Self {
        Self {
            band_id,
            name: dto.name.trim().to_string(),
            description: normalize_optional(dto.description),
        }
    }
}

impl UpdateSetlistParams {
    pub fn from_dto(id: i32, dto: UpdateSetlistDto) -> Self {
        Self {
            id,
            name: dto.name.map(|v| v.trim().to_string()),
            description: clearable(dto.description),
        }
    }
}
