//! Band and membership domain models.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::band::{
        BandDetailDto, BandDto, BandMemberDto, BandRole, CreateBandDto, UpdateBandDto,
        UserBandDto,
    },
    server::util::validate::{clearable, normalize_optional},
};

/// Parses a stored role string, failing loudly on unexpected values.
pub fn parse_role(value: &str) -> Result<BandRole, DbErr> {
    BandRole::parse(value).ok_or_else(|| DbErr::Custom(format!("Unknown band role '{}'", value)))
}

#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Band {
    pub fn from_entity(entity: entity::band::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> BandDto {
        BandDto {
            id: self.id,
            name: self.name,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// A band from the perspective of one member.
#[derive(Debug, Clone, PartialEq)]
pub struct UserBand {
    pub band: Band,
    pub role: BandRole,
    pub member_count: u64,
}

impl UserBand {
    pub fn into_dto(self) -> UserBandDto {
        UserBandDto {
            id: self.band.id,
            name: self.band.name,
            description: self.band.description,
            role: self.role,
            member_count: self.member_count,
        }
    }
}

/// A membership row joined with the member's user record.
#[derive(Debug, Clone, PartialEq)]
pub struct BandMember {
    pub band_id: i32,
    pub user_id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: BandRole,
    pub joined_at: DateTime<Utc>,
}

impl BandMember {
    /// Converts a membership entity and its user into a domain model.
    ///
    /// # Returns
    /// - `Ok(BandMember)` - Successfully converted
    /// - `Err(DbErr::Custom)` - Stored role is not a known value
    pub fn from_entity(
        member: entity::band_member::Model,
        user: entity::user::Model,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            band_id: member.band_id,
            user_id: member.user_id,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            role: parse_role(&member.role)?,
            joined_at: member.joined_at,
        })
    }

    pub fn into_dto(self) -> BandMemberDto {
        BandMemberDto {
            user_id: self.user_id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            role: self.role,
            joined_at: self.joined_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BandWithMembers {
    pub band: Band,
    pub members: Vec<BandMember>,
}

impl BandWithMembers {
    pub fn into_dto(self) -> BandDetailDto {
        BandDetailDto {
            id: self.band.id,
            name: self.band.name,
            description: self.band.description,
            created_at: self.band.created_at,
            updated_at: self.band.updated_at,
            members: self.members.into_iter().map(|m| m.into_dto()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBandParams {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct UpdateBandParams {
    pub id: i32,
    pub name: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
}

impl CreateBandParams {
    pub fn from_dto(dto: CreateBandDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: normalize_optional(dto.description),
        }
    }
}

impl UpdateBandParams {
    pub fn from_dto(id: i32, dto: UpdateBandDto) -> Self {
        Self {
            id,
            name: dto.name.map(|v| v.trim().to_string()),
            description: clearable(dto.description),
        }
    }
}
