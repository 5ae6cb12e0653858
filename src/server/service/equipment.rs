use sea_orm::DatabaseConnection;

use crate::server::{
    data::{band_member::BandMemberRepository, equipment::EquipmentRepository},
    error::{auth::AuthError, AppError},
    model::equipment::{CreateEquipmentParams, Equipment, UpdateEquipmentParams},
    util::validate::Validator,
};

/// Personal gear, optionally shared with one of the owner's bands.
///
/// Only the owner may read or change an item directly; band members see shared items
/// through the band listing.
pub struct EquipmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_for_owner(&self, owner_id: i32) -> Result<Vec<Equipment>, AppError> {
        Ok(EquipmentRepository::new(self.db)
            .get_by_owner(owner_id)
            .await?)
    }

    pub async fn list_for_band(&self, band_id: i32) -> Result<Vec<Equipment>, AppError> {
        Ok(EquipmentRepository::new(self.db)
            .get_by_band(band_id)
            .await?)
    }

    /// # Returns
    /// - `Ok(Equipment)` - The created item
    /// - `Err(AppError::Validation)` - Blank name
    /// - `Err(AuthError::NotBandMember)` - Sharing with a band the owner is not in
    pub async fn create(&self, params: CreateEquipmentParams) -> Result<Equipment, AppError> {
        Validator::new().required("name", &params.name).finish()?;

        if let Some(band_id) = params.band_id {
            self.require_member(params.owner_id, band_id).await?;
        }

        Ok(EquipmentRepository::new(self.db).create(params).await?)
    }

    /// Gets an item the user owns.
    ///
    /// # Returns
    /// - `Ok(Equipment)` - The item
    /// - `Err(AppError::NotFound)` - No such item
    /// - `Err(AuthError::NotOwner)` - The item belongs to someone else
    pub async fn get_owned(&self, user_id: i32, id: i32) -> Result<Equipment, AppError> {
        let Some(equipment) = EquipmentRepository::new(self.db).find_by_id(id).await? else {
            return Err(AppError::NotFound("Equipment not found".to_string()));
        };

        if equipment.owner_id != user_id {
            return Err(AuthError::NotOwner(user_id).into());
        }

        Ok(equipment)
    }

    pub async fn update(
        &self,
        user_id: i32,
        params: UpdateEquipmentParams,
    ) -> Result<Equipment, AppError> {
        self.get_owned(user_id, params.id).await?;

        Validator::new()
            .not_blank("name", params.name.as_deref())
            .finish()?;

        if let Some(Some(band_id)) = params.band_id {
            self.require_member(user_id, band_id).await?;
        }

        EquipmentRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(|| AppError::NotFound("Equipment not found".to_string()))
    }

    pub async fn delete(&self, user_id: i32, id: i32) -> Result<(), AppError> {
        self.get_owned(user_id, id).await?;

        EquipmentRepository::new(self.db).delete(id).await?;

        Ok(())
    }

    async fn require_member(&self, user_id: i32, band_id: i32) -> Result<(), AppError> {
        if BandMemberRepository::new(self.db)
            .get_role(band_id, user_id)
            .await?
            .is_none()
        {
            return Err(AuthError::NotBandMember(user_id, band_id).into());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests sharing gear with a band the owner does not belong to.
    ///
    /// Expected: Err(AuthError::NotBandMember)
    #[tokio::test]
    async fn cannot_share_with_foreign_band() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = factory::user::create_user(db).await?;
        let (_, band) = factory::helpers::create_band_with_leader(db).await?;

        let result = EquipmentService::new(db)
            .create(CreateEquipmentParams {
                owner_id: owner.id,
                band_id: Some(band.id),
                name: "Bass amp".to_string(),
                category: None,
                notes: None,
            })
            .await;

        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::NotBandMember(_, _)))
        ));

        Ok(())
    }

    /// Tests another user cannot read, change or delete an item.
    ///
    /// Expected: Err(AuthError::NotOwner) for each operation
    #[tokio::test]
    async fn only_owner_can_access() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = factory::user::create_user(db).await?;
        let other = factory::user::create_user(db).await?;
        let item = factory::equipment::create_equipment(db, owner.id).await?;
        let service = EquipmentService::new(db);

        let read = service.get_owned(other.id, item.id).await;
        let update = service
            .update(
                other.id,
                UpdateEquipmentParams {
                    id: item.id,
                    name: Some("Mine now".to_string()),
                    ..Default::default()
                },
            )
            .await;
        let delete = service.delete(other.id, item.id).await;

        for result in [read.map(|_| ()), update.map(|_| ()), delete] {
            assert!(matches!(
                result,
                Err(AppError::AuthErr(AuthError::NotOwner(_)))
            ));
        }
        assert!(service.get_owned(owner.id, item.id).await.is_ok());

        Ok(())
    }

    /// Tests the owner deletes their item.
    ///
    /// Expected: Ok(()), then NotFound
    #[tokio::test]
    async fn owner_deletes_item() -> Result<(), AppError> {
        let test = TestBuilder::new().with_all_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let owner = factory::user::create_user(db).await?;
        let item = factory::equipment::create_equipment(db, owner.id).await?;
        let service = EquipmentService::new(db);

        service.delete(owner.id, item.id).await?;

        assert!(matches!(
            service.get_owned(owner.id, item.id).await,
            Err(AppError::NotFound(_))
        ));

        Ok(())
    }
}
