//! User service for profile management.
//!
//! This module provides the `UserService` for reading and updating profiles, changing
//! passwords and deleting accounts. Account deletion enforces that no band is left
//! without a leader while it still has members.

use sea_orm::DatabaseConnection;

use crate::{
    model::{band::BandRole, user::ChangePasswordDto},
    server::{
        data::{band::BandRepository, band_member::BandMemberRepository, user::UserRepository},
        error::AppError,
        model::user::{UpdateUserParams, User},
        util::{
            password::{hash_password, verify_password},
            validate::{Validator, MIN_PASSWORD_LEN},
        },
    },
};

/// Service providing business logic for user profiles.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a user's public profile.
    ///
    /// # Returns
    /// - `Ok(User)` - The user, without password hash
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn get(&self, id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(id)
            .await?
            .map(User::from_entity)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Updates the caller's names, phone number and notification preferences.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated profile
    /// - `Err(AppError::Validation)` - A provided name is blank
    /// - `Err(AppError::NotFound)` - The user no longer exists
    pub async fn update_profile(&self, params: UpdateUserParams) -> Result<User, AppError> {
        Validator::new()
            .not_blank("firstName", params.first_name.as_deref())
            .not_blank("lastName", params.last_name.as_deref())
            .finish()?;

        UserRepository::new(self.db)
            .update(params)
            .await?
            .map(User::from_entity)
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Changes the caller's password after checking the current one.
    ///
    /// # Returns
    /// - `Ok(())` - Password replaced
    /// - `Err(AppError::Validation)` - New password too short
    /// - `Err(AppError::BadRequest)` - Current password is wrong
    pub async fn change_password(
        &self,
        user_id: i32,
        payload: ChangePasswordDto,
    ) -> Result<(), AppError> {
        Validator::new()
            .required("currentPassword", &payload.current_password)
            .min_len("newPassword", &payload.new_password, MIN_PASSWORD_LEN)
            .finish()?;

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !verify_password(payload.current_password, user.password_hash).await? {
            return Err(AppError::BadRequest(
                "Current password is incorrect".to_string(),
            ));
        }

        let password_hash = hash_password(payload.new_password).await?;
        user_repo.update_password(user_id, password_hash).await?;

        Ok(())
    }

    /// Deletes the caller's account.
    ///
    /// Bands where the user was the only member are deleted with the account. Memberships,
    /// attendance and equipment cascade.
    ///
    /// # Returns
    /// - `Ok(())` - Account deleted
    /// - `Err(AppError::BadRequest)` - User is the last leader of a band with other members
    pub async fn delete_account(&self, user_id: i32) -> Result<(), AppError> {
        let band_repo = BandRepository::new(self.db);
        let member_repo = BandMemberRepository::new(self.db);

        let bands = band_repo.get_for_user(user_id).await?;

        let mut sole_member_bands = Vec::new();
        for user_band in &bands {
            if user_band.member_count <= 1 {
                sole_member_bands.push(user_band.band.id);
                continue;
            }

            if user_band.role == BandRole::Leader
                && member_repo
                    .count_with_role(user_band.band.id, BandRole::Leader)
                    .await?
                    <= 1
            {
                return Err(AppError::BadRequest(format!(
                    "You are the only leader of {}. Promote another member before deleting your account",
                    user_band.band.name
                )));
            }
        }

        for band_id in sole_member_bands {
            band_repo.delete(band_id).await?;
        }

        if !UserRepository::new(self.db).delete(user_id).await? {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests updating a profile clears the phone number and keeps other fields.
    ///
    /// Expected: Ok(User) with new first name and no phone
    #[tokio::test]
    async fn updates_profile() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::UserFactory::new(db)
            .last_name("Lopez")
            .phone_number(Some("555-0100".to_string()))
            .build()
            .await?;

        let updated = UserService::new(db)
            .update_profile(UpdateUserParams {
                id: user.id,
                first_name: Some("Ana".to_string()),
                phone_number: Some(None),
                ..Default::default()
            })
            .await?;

        assert_eq!(updated.first_name, "Ana");
        assert_eq!(updated.last_name, "Lopez");
        assert!(updated.phone_number.is_none());

        Ok(())
    }

    /// Tests a blank name is rejected.
    ///
    /// Expected: Err(AppError::Validation)
    #[tokio::test]
    async fn rejects_blank_name() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;

        let result = UserService::new(db)
            .update_profile(UpdateUserParams {
                id: user.id,
                last_name: Some("".to_string()),
                ..Default::default()
            })
            .await;

        assert!(matches!(result, Err(AppError::Validation(_))));

        Ok(())
    }

    /// Tests changing the password requires the current one.
    ///
    /// Expected: BadRequest with a wrong current password, Ok with the right one
    #[tokio::test]
    async fn changes_password() -> Result<(), AppError> {
        let test = TestBuilder::new()
            .with_table(entity::prelude::User)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let hash = hash_password("old-secret".to_string()).await?;
        let user = factory::user::UserFactory::new(db)
            .password_hash(hash)
            .build()
            .await?;
        let service = UserService::new(db);

        let wrong = service
            .change_password(
                user.id,
                ChangePasswordDto {
                    current_password: "not-it".to_string(),
                    new_password: "new-secret".to_string(),
                },
            )
            .await;
        assert!(matches!(wrong, Err(AppError::BadRequest(_))));

        service
            .change_password(
                user.id,
                ChangePasswordDto {
                    current_password: "old-secret".to_string(),
                    new_password: "new-secret".to_string(),
                },
            )
            .await?;

        let stored = UserRepository::new(db).find_by_id(user.id).await?.unwrap();
        assert!(verify_password("new-secret".to_string(), stored.password_hash).await?);

        Ok(())
    }

    /// Tests the last leader of a band with other members cannot delete their account.
    ///
    /// Expected: Err(AppError::BadRequest), user still present
    #[tokio::test]
    async fn last_leader_cannot_delete_account() -> Result<(), AppError> {
        let test = TestBuilder::new().with_band_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (leader, _, _) = factory::helpers::create_band_with_member(db).await?;

        let result = UserService::new(db).delete_account(leader.id).await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
        assert!(UserRepository::new(db).find_by_id(leader.id).await?.is_some());

        Ok(())
    }

    /// Tests a regular member can delete their account and the band keeps its leader.
    ///
    /// Expected: Ok(()), membership gone
    #[tokio::test]
    async fn member_deletes_account() -> Result<(), AppError> {
        let test = TestBuilder::new().with_band_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, member, band) = factory::helpers::create_band_with_member(db).await?;

        UserService::new(db).delete_account(member.id).await?;

        let member_repo = BandMemberRepository::new(db);
        assert_eq!(member_repo.count(band.id).await?, 1);
        assert!(member_repo.get_role(band.id, member.id).await?.is_none());

        Ok(())
    }

    /// Tests a band whose only member deletes their account is removed too.
    ///
    /// Expected: Ok(()), band deleted
    #[tokio::test]
    async fn sole_member_band_is_deleted_with_account() -> Result<(), AppError> {
        let test = TestBuilder::new().with_band_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (leader, band) = factory::helpers::create_band_with_leader(db).await?;

        UserService::new(db).delete_account(leader.id).await?;

        assert!(BandRepository::new(db).find_by_id(band.id).await?.is_none());

        Ok(())
    }
}
