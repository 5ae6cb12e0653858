use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use std::collections::HashMap;

use crate::server::model::{
    setlist::{
        CreateSetlistParams, Setlist, SetlistWithCount, SetlistWithSongs, UpdateSetlistParams,
    },
    song::Song,
};

pub struct SetlistRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SetlistRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a setlist together with its songs in order.
    ///
    /// Runs in one transaction so a failed song insert leaves no empty setlist behind.
    pub async fn create(
        &self,
        params: CreateSetlistParams,
        song_ids: Vec<i32>,
    ) -> Result<Setlist, DbErr> {
        let txn = self.db.begin().await?;

        let now = Utc::now();
        let setlist = entity::setlist::ActiveModel {
            band_id: ActiveValue::Set(params.band_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        insert_songs(&txn, setlist.id, song_ids).await?;
        txn.commit().await?;

        Ok(Setlist::from_entity(setlist))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Setlist>, DbErr> {
        let setlist = entity::prelude::Setlist::find_by_id(id).one(self.db).await?;

        Ok(setlist.map(Setlist::from_entity))
    }

    /// Gets a band's setlists ordered by name, each with its song count.
    pub async fn get_by_band(&self, band_id: i32) -> Result<Vec<SetlistWithCount>, DbErr> {
        let setlists = entity::prelude::Setlist::find()
            .filter(entity::setlist::Column::BandId.eq(band_id))
            .order_by_asc(entity::setlist::Column::Name)
            .all(self.db)
            .await?;

        let setlist_ids: Vec<i32> = setlists.iter().map(|s| s.id).collect();
        let mut counts: HashMap<i32, u64> = HashMap::new();
        if !setlist_ids.is_empty() {
            let entries = entity::prelude::SetlistSong::find()
                .filter(entity::setlist_song::Column::SetlistId.is_in(setlist_ids))
                .all(self.db)
                .await?;
            for entry in entries {
                *counts.entry(entry.setlist_id).or_default() += 1;
            }
        }

        Ok(setlists
            .into_iter()
            .map(|setlist| SetlistWithCount {
                song_count: counts.get(&setlist.id).copied().unwrap_or(0),
                setlist: Setlist::from_entity(setlist),
            })
            .collect())
    }

    /// Gets a setlist with its songs in position order.
    pub async fn get_with_songs(&self, id: i32) -> Result<Option<SetlistWithSongs>, DbErr> {
        let Some(setlist) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let rows = entity::prelude::SetlistSong::find()
            .filter(entity::setlist_song::Column::SetlistId.eq(id))
            .order_by_asc(entity::setlist_song::Column::Position)
            .find_also_related(entity::prelude::Song)
            .all(self.db)
            .await?;

        let songs = rows
            .into_iter()
            .filter_map(|(_, song)| song.map(Song::from_entity))
            .collect();

        Ok(Some(SetlistWithSongs { setlist, songs }))
    }

    /// Applies a partial update to the setlist's name and description.
    pub async fn update(&self, params: UpdateSetlistParams) -> Result<Option<Setlist>, DbErr> {
        let Some(setlist) = entity::prelude::Setlist::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::setlist::ActiveModel = setlist.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(description);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let setlist = active.update(self.db).await?;

        Ok(Some(Setlist::from_entity(setlist)))
    }

    /// Replaces the setlist's songs with `song_ids` in the given order.
    ///
    /// Runs in a transaction so a failed insert leaves the previous order intact.
    pub async fn replace_songs(&self, setlist_id: i32, song_ids: Vec<i32>) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::SetlistSong::delete_many()
            .filter(entity::setlist_song::Column::SetlistId.eq(setlist_id))
            .exec(&txn)
            .await?;

        insert_songs(&txn, setlist_id, song_ids).await?;

        entity::setlist::ActiveModel {
            id: ActiveValue::Unchanged(setlist_id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .update(&txn)
        .await?;

        txn.commit().await
    }

    /// Deletes a setlist. Rehearsals using it keep existing without a setlist.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Setlist::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

async fn insert_songs<C: ConnectionTrait>(
    conn: &C,
    setlist_id: i32,
    song_ids: Vec<i32>,
) -> Result<(), DbErr> {
    for (position, song_id) in song_ids.into_iter().enumerate() {
        entity::setlist_song::ActiveModel {
            setlist_id: ActiveValue::Set(setlist_id),
            song_id: ActiveValue::Set(song_id),
            position: ActiveValue::Set(position as i32),
        }
        .insert(conn)
        .await?;
    }

    Ok(())
}
