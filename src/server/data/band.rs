use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;

use crate::server::{
    data::band_member::BandMemberRepository,
    model::band::{
        parse_role, Band, BandWithMembers, CreateBandParams, UpdateBandParams, UserBand,
    },
};

pub struct BandRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BandRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateBandParams) -> Result<Band, DbErr> {
        let now = Utc::now();
        let band = entity::band::ActiveModel {
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Band::from_entity(band))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Band>, DbErr> {
        let band = entity::prelude::Band::find_by_id(id).one(self.db).await?;

        Ok(band.map(Band::from_entity))
    }

    /// Gets a band with every member, ordered by join date.
    pub async fn get_with_members(&self, id: i32) -> Result<Option<BandWithMembers>, DbErr> {
        let Some(band) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let members = BandMemberRepository::new(self.db).get_members(id).await?;

        Ok(Some(BandWithMembers { band, members }))
    }

    /// Gets every band the user belongs to with the user's role, ordered by band name.
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<UserBand>, DbErr> {
        let memberships = entity::prelude::BandMember::find()
            .filter(entity::band_member::Column::UserId.eq(user_id))
            .find_also_related(entity::prelude::Band)
            .order_by_asc(entity::band::Column::Name)
            .all(self.db)
            .await?;

        let band_ids: Vec<i32> = memberships.iter().map(|(m, _)| m.band_id).collect();

        // Member counts for all of the user's bands in one query
        let mut counts: HashMap<i32, u64> = HashMap::new();
        if !band_ids.is_empty() {
            let all_members = entity::prelude::BandMember::find()
                .filter(entity::band_member::Column::BandId.is_in(band_ids))
                .all(self.db)
                .await?;
            for member in all_members {
                *counts.entry(member.band_id).or_default() += 1;
            }
        }

        memberships
            .into_iter()
            .filter_map(|(member, band)| band.map(|band| (member, band)))
            .map(|(member, band)| {
                Ok(UserBand {
                    role: parse_role(&member.role)?,
                    member_count: counts.get(&band.id).copied().unwrap_or(0),
                    band: Band::from_entity(band),
                })
            })
            .collect()
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Band))` - The updated band
    /// - `Ok(None)` - No band with that id
    pub async fn update(&self, params: UpdateBandParams) -> Result<Option<Band>, DbErr> {
        let Some(band) = entity::prelude::Band::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::band::ActiveModel = band.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let band = active.update(self.db).await?;

        Ok(Some(Band::from_entity(band)))
    }

    /// Deletes a band. Memberships, rehearsals, setlists and songs cascade; shared
    /// equipment is unlinked.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Band::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
