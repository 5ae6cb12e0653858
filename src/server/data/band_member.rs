use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::band::BandRole,
    server::model::band::{parse_role, BandMember},
};

pub struct BandMemberRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BandMemberRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Adds a user to a band.
    ///
    /// # Returns
    /// - `Ok(Model)` - The new membership row
    /// - `Err(DbErr)` - Duplicate membership or missing band/user
    pub async fn add(
        &self,
        band_id: i32,
        user_id: i32,
        role: BandRole,
    ) -> Result<entity::band_member::Model, DbErr> {
        entity::band_member::ActiveModel {
            band_id: ActiveValue::Set(band_id),
            user_id: ActiveValue::Set(user_id),
            role: ActiveValue::Set(role.as_str().to_string()),
            joined_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    /// Gets the user's role in the band, or `None` if they are not a member.
    pub async fn get_role(&self, band_id: i32, user_id: i32) -> Result<Option<BandRole>, DbErr> {
        let member = entity::prelude::BandMember::find_by_id((band_id, user_id))
            .one(self.db)
            .await?;

        member.map(|m| parse_role(&m.role)).transpose()
    }

    /// Gets one member joined with their user record.
    pub async fn get_member(
        &self,
        band_id: i32,
        user_id: i32,
    ) -> Result<Option<BandMember>, DbErr> {
        let result = entity::prelude::BandMember::find_by_id((band_id, user_id))
            .find_also_related(entity::prelude::User)
            .one(self.db)
            .await?;

        match result {
            Some((member, Some(user))) => BandMember::from_entity(member, user).map(Some),
            _ => Ok(None),
        }
    }

    /// Gets all members of a band ordered by join date.
    pub async fn get_members(&self, band_id: i32) -> Result<Vec<BandMember>, DbErr> {
        let rows = entity::prelude::BandMember::find()
            .filter(entity::band_member::Column::BandId.eq(band_id))
            .find_also_related(entity::prelude::User)
            .order_by_asc(entity::band_member::Column::JoinedAt)
            .all(self.db)
            .await?;

        rows.into_iter()
            .filter_map(|(member, user)| user.map(|user| (member, user)))
            .map(|(member, user)| BandMember::from_entity(member, user))
            .collect()
    }

    /// Gets the user records of members who opted in to email notifications.
    pub async fn get_email_recipients(
        &self,
        band_id: i32,
    ) -> Result<Vec<entity::user::Model>, DbErr> {
        let rows = entity::prelude::BandMember::find()
            .filter(entity::band_member::Column::BandId.eq(band_id))
            .find_also_related(entity::prelude::User)
            .filter(entity::user::Column::NotifyEmail.eq(true))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().filter_map(|(_, user)| user).collect())
    }

    /// Ids of every band the user belongs to.
    pub async fn get_band_ids_for_user(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        let rows = entity::prelude::BandMember::find()
            .filter(entity::band_member::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        Ok(rows.into_iter().map(|m| m.band_id).collect())
    }

    /// Changes a member's role. Returns false if the membership does not exist.
    pub async fn update_role(
        &self,
        band_id: i32,
        user_id: i32,
        role: BandRole,
    ) -> Result<bool, DbErr> {
        let Some(member) = entity::prelude::BandMember::find_by_id((band_id, user_id))
            .one(self.db)
            .await?
        else {
            return Ok(false);
        };

        let mut active: entity::band_member::ActiveModel = member.into();
        active.role = ActiveValue::Set(role.as_str().to_string());
        active.update(self.db).await?;

        Ok(true)
    }

    /// Removes a member. Returns false if the membership does not exist.
    pub async fn remove(&self, band_id: i32, user_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::BandMember::delete_by_id((band_id, user_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    pub async fn count(&self, band_id: i32) -> Result<u64, DbErr> {
        entity::prelude::BandMember::find()
            .filter(entity::band_member::Column::BandId.eq(band_id))
            .count(self.db)
            .await
    }

    pub async fn count_with_role(&self, band_id: i32, role: BandRole) -> Result<u64, DbErr> {
        entity::prelude::BandMember::find()
            .filter(entity::band_member::Column::BandId.eq(band_id))
            .filter(entity::band_member::Column::Role.eq(role.as_str()))
            .count(self.db)
            .await
    }
}
