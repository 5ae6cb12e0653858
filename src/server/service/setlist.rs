//! Setlist service.
//!
//! A setlist only ever holds songs from its own band, each at most once, in the order
//! the client sent them.

use std::collections::HashSet;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{setlist::SetlistRepository, song::SongRepository},
    error::{AppError, FieldError},
    model::setlist::{
        CreateSetlistParams, Setlist, SetlistWithCount, SetlistWithSongs, UpdateSetlistParams,
    },
    util::validate::Validator,
};

pub struct SetlistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SetlistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list(&self, band_id: i32) -> Result<Vec<SetlistWithCount>, AppError> {
        Ok(SetlistRepository::new(self.db).get_by_band(band_id).await?)
    }

    /// Creates a setlist, optionally with an initial song order.
    ///
    /// # Returns
    /// - `Ok(SetlistWithSongs)` - The new setlist and its songs
    /// - `Err(AppError::Validation)` - Blank name, foreign or repeated songs
    pub async fn create(
        &self,
        params: CreateSetlistParams,
        song_ids: Vec<i32>,
    ) -> Result<SetlistWithSongs, AppError> {
        Validator::new().required("name", &params.name).finish()?;
        self.check_songs(params.band_id, &song_ids).await?;

        let setlist = SetlistRepository::new(self.db)
            .create(params, song_ids)
            .await?;

        self.get(setlist.id).await
    }

    /// Gets the setlist row alone, for permission checks.
    pub async fn find(&self, id: i32) -> Result<Setlist, AppError> {
        SetlistRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(setlist_not_found)
    }

    /// Gets a setlist with its songs in order.
    pub async fn get(&self, id: i32) -> Result<SetlistWithSongs, AppError> {
        SetlistRepository::new(self.db)
            .get_with_songs(id)
            .await?
            .ok_or_else(setlist_not_found)
    }

    pub async fn update(&self, params: UpdateSetlistParams) -> Result<SetlistWithSongs, AppError> {
        Validator::new()
            .not_blank("name", params.name.as_deref())
            .finish()?;

        let id = params.id;
        if SetlistRepository::new(self.db)
            .update(params)
            .await?
            .is_none()
        {
            return Err(setlist_not_found());
        }

        self.get(id).await
    }

    /// Replaces the ordered song list of a setlist.
    pub async fn replace_songs(
        &self,
        setlist: &Setlist,
        song_ids: Vec<i32>,
    ) -> Result<SetlistWithSongs, AppError> {
        self.check_songs(setlist.band_id, &song_ids).await?;

        SetlistRepository::new(self.db)
            .replace_songs(setlist.id, song_ids)
            .await?;

        self.get(setlist.id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !SetlistRepository::new(self.db).delete(id).await? {
            return Err(setlist_not_found());
        }

        Ok(())
    }

    async fn check_songs(&self, band_id: i32, song_ids: &[i32]) -> Result<(), AppError> {
        let unique: HashSet<i32> = song_ids.iter().copied().collect();
        if unique.len() != song_ids.len() {
            return Err(AppError::Validation(vec![FieldError::new(
                "songIds",
                "A song can only appear once in a setlist",
            )]));
        }

        if song_ids.is_empty() {
            return Ok(());
        }

        let found = SongRepository::new(self.db)
            .count_in_band(band_id, song_ids.to_vec())
            .await?;
        if found != song_ids.len() as u64 {
            return Err(AppError::Validation(vec![FieldError::new(
                "songIds",
                "Every song must belong to this band",
            )]));
        }

        Ok(())
    }
}

fn setlist_not_found() -> AppError {
    AppError::NotFound("Setlist not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn params(band_id: i32) -> CreateSetlistParams {
        CreateSetlistParams {
            band_id,
            name: "Friday gig".to_string(),
            description: None,
        }
    }

    /// Tests creating a setlist with an initial song order.
    ///
    /// Expected: Ok(SetlistWithSongs) with songs in the given order
    #[tokio::test]
    async fn creates_with_songs() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_setlist_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let band = factory::band::create_band(db).await?;
        let a = factory::song::create_song(db, band.id).await?;
        let b = factory::song::create_song(db, band.id).await?;

        let setlist = SetlistService::new(db)
            .create(params(band.id), vec![b.id, a.id])
            .await?;

        let ids: Vec<i32> = setlist.songs.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![b.id, a.id]);

        Ok(())
    }

    /// Tests songs from another band are rejected.
    ///
    /// Expected: Err(AppError::Validation), no setlist created
    #[tokio::test]
    async fn rejects_foreign_songs() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_setlist_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let band = factory::band::create_band(db).await?;
        let other = factory::band::create_band(db).await?;
        let foreign = factory::song::create_song(db, other.id).await?;
        let service = SetlistService::new(db);

        let result = service.create(params(band.id), vec![foreign.id]).await;

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(service.list(band.id).await?.is_empty());

        Ok(())
    }

    /// Tests a song cannot appear twice.
    ///
    /// Expected: Err(AppError::Validation)
    #[tokio::test]
    async fn rejects_repeated_songs() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_setlist_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let band = factory::band::create_band(db).await?;
        let song = factory::song::create_song(db, band.id).await?;
        let setlist = factory::setlist::create_setlist(db, band.id).await?;
        let service = SetlistService::new(db);

        let setlist = service.find(setlist.id).await?;
        let result = service
            .replace_songs(&setlist, vec![song.id, song.id])
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));

        Ok(())
    }
}
