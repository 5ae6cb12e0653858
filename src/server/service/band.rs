//! Band and membership management.
//!
//! Enforces the membership invariant: a band that still has members always keeps at
//! least one leader.

use sea_orm::DatabaseConnection;

use crate::{
    model::band::{AddMemberDto, BandRole},
    server::{
        data::{band::BandRepository, band_member::BandMemberRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        model::band::{
            Band, BandMember, BandWithMembers, CreateBandParams, UpdateBandParams, UserBand,
        },
        service::auth::normalize_email,
        util::validate::Validator,
    },
};

const LAST_LEADER_MESSAGE: &str = "A band must have at least one leader";

/// Outcome of removing a member from a band.
#[derive(Debug, Clone, PartialEq)]
pub enum MemberRemoval {
    /// The member was removed and the band remains.
    Removed,
    /// The last member left, so the band itself was deleted.
    BandDeleted,
}

pub struct BandService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BandService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Bands the user belongs to, with the user's role in each.
    pub async fn list_for_user(&self, user_id: i32) -> Result<Vec<UserBand>, AppError> {
        Ok(BandRepository::new(self.db).get_for_user(user_id).await?)
    }

    /// Creates a band led by its creator.
    ///
    /// # Returns
    /// - `Ok(BandWithMembers)` - The new band with the creator as its only member
    /// - `Err(AppError::Validation)` - Name is blank
    pub async fn create(
        &self,
        creator_id: i32,
        params: CreateBandParams,
    ) -> Result<BandWithMembers, AppError> {
        Validator::new().required("name", &params.name).finish()?;

        let band_repo = BandRepository::new(self.db);
        let band = band_repo.create(params).await?;

        BandMemberRepository::new(self.db)
            .add(band.id, creator_id, BandRole::Leader)
            .await?;

        self.get(band.id).await
    }

    /// Gets a band with its members.
    pub async fn get(&self, band_id: i32) -> Result<BandWithMembers, AppError> {
        BandRepository::new(self.db)
            .get_with_members(band_id)
            .await?
            .ok_or_else(band_not_found)
    }

    pub async fn update(&self, params: UpdateBandParams) -> Result<Band, AppError> {
        Validator::new()
            .not_blank("name", params.name.as_deref())
            .finish()?;

        BandRepository::new(self.db)
            .update(params)
            .await?
            .ok_or_else(band_not_found)
    }

    /// Deletes a band with its rehearsals, setlists and songs.
    pub async fn delete(&self, band_id: i32) -> Result<(), AppError> {
        if !BandRepository::new(self.db).delete(band_id).await? {
            return Err(band_not_found());
        }

        Ok(())
    }

    pub async fn members(&self, band_id: i32) -> Result<Vec<BandMember>, AppError> {
        Ok(BandMemberRepository::new(self.db)
            .get_members(band_id)
            .await?)
    }

    /// Adds an existing user to the band by email.
    ///
    /// # Returns
    /// - `Ok(BandMember)` - The new member; role defaults to `MEMBER`
    /// - `Err(AppError::NotFound)` - No account uses that email
    /// - `Err(AppError::Conflict)` - The user is already a member
    pub async fn add_member(
        &self,
        band_id: i32,
        payload: AddMemberDto,
    ) -> Result<BandMember, AppError> {
        Validator::new().email("email", &payload.email).finish()?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&normalize_email(&payload.email))
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let member_repo = BandMemberRepository::new(self.db);
        if member_repo.get_role(band_id, user.id).await?.is_some() {
            return Err(AppError::Conflict(
                "User is already a member of this band".to_string(),
            ));
        }

        member_repo
            .add(band_id, user.id, payload.role.unwrap_or_default())
            .await?;

        member_repo
            .get_member(band_id, user.id)
            .await?
            .ok_or_else(member_not_found)
    }

    /// Changes a member's role.
    ///
    /// # Returns
    /// - `Ok(BandMember)` - The member with the new role
    /// - `Err(AppError::NotFound)` - The user is not a member
    /// - `Err(AppError::BadRequest)` - Demoting the only leader
    pub async fn update_member_role(
        &self,
        band_id: i32,
        user_id: i32,
        role: BandRole,
    ) -> Result<BandMember, AppError> {
        let member_repo = BandMemberRepository::new(self.db);

        let Some(current) = member_repo.get_role(band_id, user_id).await? else {
            return Err(member_not_found());
        };

        if current == BandRole::Leader
            && role != BandRole::Leader
            && member_repo.count_with_role(band_id, BandRole::Leader).await? <= 1
        {
            return Err(AppError::BadRequest(LAST_LEADER_MESSAGE.to_string()));
        }

        member_repo.update_role(band_id, user_id, role).await?;

        member_repo
            .get_member(band_id, user_id)
            .await?
            .ok_or_else(member_not_found)
    }

    /// Removes a member from the band.
    ///
    /// Leaders may remove anyone; other members may only remove themselves. When the last
    /// member leaves, the band is deleted.
    ///
    /// # Returns
    /// - `Ok(MemberRemoval)` - What happened to the band
    /// - `Err(AuthError::NotBandMember)` - The actor is not in the band
    /// - `Err(AuthError::NotBandLeader)` - A non-leader tried to remove someone else
    /// - `Err(AppError::NotFound)` - The user is not a member
    /// - `Err(AppError::BadRequest)` - Removing the only leader while others remain
    pub async fn remove_member(
        &self,
        actor_id: i32,
        band_id: i32,
        user_id: i32,
    ) -> Result<MemberRemoval, AppError> {
        let member_repo = BandMemberRepository::new(self.db);

        let Some(actor_role) = member_repo.get_role(band_id, actor_id).await? else {
            return Err(AuthError::NotBandMember(actor_id, band_id).into());
        };

        if actor_id != user_id && actor_role != BandRole::Leader {
            return Err(AuthError::NotBandLeader(actor_id, band_id).into());
        }

        let Some(role) = member_repo.get_role(band_id, user_id).await? else {
            return Err(member_not_found());
        };

        let member_count = member_repo.count(band_id).await?;
        if member_count <= 1 {
            BandRepository::new(self.db).delete(band_id).await?;
            return Ok(MemberRemoval::BandDeleted);
        }

        if role == BandRole::Leader
            && member_repo.count_with_role(band_id, BandRole::Leader).await? <= 1
        {
            return Err(AppError::BadRequest(LAST_LEADER_MESSAGE.to_string()));
        }

        member_repo.remove(band_id, user_id).await?;

        Ok(MemberRemoval::Removed)
    }
}

fn band_not_found() -> AppError {
    AppError::NotFound("Band not found".to_string())
}

fn member_not_found() -> AppError {
    AppError::NotFound("Member not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    /// Tests the creator of a band becomes its leader.
    ///
    /// Expected: Ok(BandWithMembers) with one LEADER member
    #[tokio::test]
    async fn creator_becomes_leader() -> Result<(), AppError> {
        let test = TestBuilder::new().with_band_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let user = factory::user::create_user(db).await?;

        let band = BandService::new(db)
            .create(
                user.id,
                CreateBandParams {
                    name: "The Tuesdays".to_string(),
                    description: None,
                },
            )
            .await?;

        assert_eq!(band.band.name, "The Tuesdays");
        assert_eq!(band.members.len(), 1);
        assert_eq!(band.members[0].user_id, user.id);
        assert_eq!(band.members[0].role, BandRole::Leader);

        Ok(())
    }

    /// Tests adding a member by email, case-insensitively.
    ///
    /// Expected: Ok(BandMember) with role MEMBER, then Conflict on a second add
    #[tokio::test]
    async fn adds_member_by_email() -> Result<(), AppError> {
        let test = TestBuilder::new().with_band_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, band) = factory::helpers::create_band_with_leader(db).await?;
        let user = factory::user::UserFactory::new(db)
            .email("bass@example.com")
            .build()
            .await?;
        let service = BandService::new(db);

        let member = service
            .add_member(
                band.id,
                AddMemberDto {
                    email: "Bass@Example.com".to_string(),
                    role: None,
                },
            )
            .await?;
        assert_eq!(member.user_id, user.id);
        assert_eq!(member.role, BandRole::Member);

        let again = service
            .add_member(
                band.id,
                AddMemberDto {
                    email: "bass@example.com".to_string(),
                    role: None,
                },
            )
            .await;
        assert!(matches!(again, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests adding an unknown email.
    ///
    /// Expected: Err(AppError::NotFound)
    #[tokio::test]
    async fn add_member_unknown_email() -> Result<(), AppError> {
        let test = TestBuilder::new().with_band_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (_, band) = factory::helpers::create_band_with_leader(db).await?;

        let result = BandService::new(db)
            .add_member(
                band.id,
                AddMemberDto {
                    email: "nobody@example.com".to_string(),
                    role: Some(BandRole::Leader),
                },
            )
            .await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }

    /// Tests the only leader cannot be demoted.
    ///
    /// Expected: BadRequest, then Ok once a second leader exists
    #[tokio::test]
    async fn keeps_at_least_one_leader_on_demotion() -> Result<(), AppError> {
        let test = TestBuilder::new().with_band_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (leader, member, band) = factory::helpers::create_band_with_member(db).await?;
        let service = BandService::new(db);

        let result = service
            .update_member_role(band.id, leader.id, BandRole::Member)
            .await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));

        service
            .update_member_role(band.id, member.id, BandRole::Leader)
            .await?;
        let demoted = service
            .update_member_role(band.id, leader.id, BandRole::Member)
            .await?;
        assert_eq!(demoted.role, BandRole::Member);

        Ok(())
    }

    /// Tests a member may leave but not remove others.
    ///
    /// Expected: NotBandLeader for removing someone else, Removed for leaving
    #[tokio::test]
    async fn member_can_only_remove_self() -> Result<(), AppError> {
        let test = TestBuilder::new().with_band_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (leader, member, band) = factory::helpers::create_band_with_member(db).await?;
        let service = BandService::new(db);

        let result = service
            .remove_member(member.id, band.id, leader.id)
            .await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::NotBandLeader(_, _)))
        ));

        let removal = service
            .remove_member(member.id, band.id, member.id)
            .await?;
        assert_eq!(removal, MemberRemoval::Removed);
        assert_eq!(BandMemberRepository::new(db).count(band.id).await?, 1);

        Ok(())
    }

    /// Tests the only leader cannot leave while members remain.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn last_leader_cannot_leave() -> Result<(), AppError> {
        let test = TestBuilder::new().with_band_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (leader, _, band) = factory::helpers::create_band_with_member(db).await?;

        let result = BandService::new(db)
            .remove_member(leader.id, band.id, leader.id)
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests the band is deleted when its last member leaves.
    ///
    /// Expected: Ok(MemberRemoval::BandDeleted)
    #[tokio::test]
    async fn last_member_leaving_deletes_band() -> Result<(), AppError> {
        let test = TestBuilder::new().with_band_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (leader, band) = factory::helpers::create_band_with_leader(db).await?;

        let removal = BandService::new(db)
            .remove_member(leader.id, band.id, leader.id)
            .await?;

        assert_eq!(removal, MemberRemoval::BandDeleted);
        assert!(BandRepository::new(db).find_by_id(band.id).await?.is_none());

        Ok(())
    }
}
