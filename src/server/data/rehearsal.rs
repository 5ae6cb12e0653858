use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::rehearsal::{
    CreateRehearsalParams, Rehearsal, UpcomingRehearsal, UpdateRehearsalParams,
};

pub struct RehearsalRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RehearsalRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateRehearsalParams) -> Result<Rehearsal, DbErr> {
        insert(self.db, params).await
    }

    /// Inserts every rehearsal of a series in one transaction.
    ///
    /// Either all occurrences are stored or none are.
    pub async fn create_many(
        &self,
        params: Vec<CreateRehearsalParams>,
    ) -> Result<Vec<Rehearsal>, DbErr> {
        let txn = self.db.begin().await?;

        let mut created = Vec::with_capacity(params.len());
        for p in params {
            created.push(insert(&txn, p).await?);
        }

        txn.commit().await?;

        Ok(created)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Rehearsal>, DbErr> {
        let rehearsal = entity::prelude::Rehearsal::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(rehearsal.map(Rehearsal::from_entity))
    }

    /// Gets all rehearsals of a band ordered by start time.
    pub async fn get_by_band(&self, band_id: i32) -> Result<Vec<Rehearsal>, DbErr> {
        let rehearsals = entity::prelude::Rehearsal::find()
            .filter(entity::rehearsal::Column::BandId.eq(band_id))
            .order_by_asc(entity::rehearsal::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(rehearsals.into_iter().map(Rehearsal::from_entity).collect())
    }

    /// Gets rehearsals starting after `now` across the given bands, soonest first.
    pub async fn get_upcoming_for_bands(
        &self,
        band_ids: Vec<i32>,
        now: DateTime<Utc>,
    ) -> Result<Vec<UpcomingRehearsal>, DbErr> {
        if band_ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = entity::prelude::Rehearsal::find()
            .filter(entity::rehearsal::Column::BandId.is_in(band_ids))
            .filter(entity::rehearsal::Column::StartTime.gt(now))
            .find_also_related(entity::prelude::Band)
            .order_by_asc(entity::rehearsal::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(rehearsal, band)| UpcomingRehearsal {
                rehearsal: Rehearsal::from_entity(rehearsal),
                band_name: band.map(|b| b.name).unwrap_or_default(),
            })
            .collect())
    }

    /// Gets rehearsals starting in `(now, until]` that have not had a reminder yet.
    pub async fn get_due_for_reminder(
        &self,
        now: DateTime<Utc>,
        until: DateTime<Utc>,
    ) -> Result<Vec<Rehearsal>, DbErr> {
        let rehearsals = entity::prelude::Rehearsal::find()
            .filter(entity::rehearsal::Column::StartTime.gt(now))
            .filter(entity::rehearsal::Column::StartTime.lte(until))
            .filter(entity::rehearsal::Column::ReminderSentAt.is_null())
            .order_by_asc(entity::rehearsal::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(rehearsals.into_iter().map(Rehearsal::from_entity).collect())
    }

    /// Records that the reminder for a rehearsal went out.
    pub async fn mark_reminder_sent(&self, id: i32, sent_at: DateTime<Utc>) -> Result<(), DbErr> {
        entity::rehearsal::ActiveModel {
            id: ActiveValue::Unchanged(id),
            reminder_sent_at: ActiveValue::Set(Some(sent_at)),
            ..Default::default()
        }
        .update(self.db)
        .await?;

        Ok(())
    }

    /// Applies a partial update.
    ///
    /// # Returns
    /// - `Ok(Some(Rehearsal))` - The updated rehearsal
    /// - `Ok(None)` - No rehearsal with that id
    pub async fn update(&self, params: UpdateRehearsalParams) -> Result<Option<Rehearsal>, DbErr> {
        let Some(rehearsal) = entity::prelude::Rehearsal::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::rehearsal::ActiveModel = rehearsal.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        if let Some(location) = params.location {
            active.location = ActiveValue::Set(location);
        }
        if let Some(start_time) = params.start_time {
            active.start_time = ActiveValue::Set(start_time);
        }
        if let Some(end_time) = params.end_time {
            active.end_time = ActiveValue::Set(end_time);
        }
        if let Some(setlist_id) = params.setlist_id {
            active.setlist_id = ActiveValue::Set(setlist_id);
        }
        if params.clear_reminder {
            active.reminder_sent_at = ActiveValue::Set(None);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let rehearsal = active.update(self.db).await?;

        Ok(Some(Rehearsal::from_entity(rehearsal)))
    }

    /// Deletes a rehearsal; attendance cascades.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Rehearsal::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

async fn insert<C: ConnectionTrait>(
    db: &C,
    params: CreateRehearsalParams,
) -> Result<Rehearsal, DbErr> {
    let now = Utc::now();
    let rehearsal = entity::rehearsal::ActiveModel {
        band_id: ActiveValue::Set(params.band_id),
        title: ActiveValue::Set(params.title),
        description: ActiveValue::Set(params.description),
        location: ActiveValue::Set(params.location),
        start_time: ActiveValue::Set(params.start_time),
        end_time: ActiveValue::Set(params.end_time),
        setlist_id: ActiveValue::Set(params.setlist_id),
        series_id: ActiveValue::Set(params.series_id),
        reminder_sent_at: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(Rehearsal::from_entity(rehearsal))
}
