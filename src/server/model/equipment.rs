use chrono::{DateTime, Utc};

use crate::{
    model::equipment::{CreateEquipmentDto, EquipmentDto, UpdateEquipmentDto},
    server::util::validate::{clearable, normalize_optional},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Equipment {
    pub id: i32,
    pub owner_id: i32,
    pub band_id: Option<i32>,
    pub name: String,
    pub category: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Equipment {
    pub fn from_entity(entity: entity::equipment::Model) -> Self {
        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            band_id: entity.band_id,
            name: entity.name,
            category: entity.category,
            notes: entity.notes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> EquipmentDto {
        EquipmentDto {
            id: self.id,
            owner_id: self.owner_id,
            band_id: self.band_id,
            name: self.name,
            category: self.category,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateEquipmentParams {
    pub owner_id: i32,
    pub band_id: Option<i32>,
    pub name: String,
    pub category: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEquipmentParams {
    pub id: i32,
    pub name: Option<String>,
    pub category: Option<Option<String>>,
    pub notes: Option<Option<String>>,
    pub band_id: Option<Option<i32>>,
}

impl CreateEquipmentParams {
    pub fn from_dto(owner_id: i32, dto: CreateEquipmentDto) -> Self {
        Self {
            owner_id,
            band_id: dto.band_id,
            name: dto.name.trim().to_string(),
            category: normalize_optional(dto.category),
            notes: normalize_optional(dto.notes),
        }
    }
}

impl UpdateEquipmentParams {
    pub fn from_dto(id: i32, dto: UpdateEquipmentDto) -> Self {
        Self {
            id,
            name: dto.name.map(|v| v.trim().to_string()),
            category: clearable(dto.category),
            notes: clearable(dto.notes),
            band_id: dto.band_id,
        }
    }
}
