use super::*;

/// Tests adding a member to a band.
///
/// Expected: Ok(Model) with stored role "MEMBER"
#[tokio::test]
async fn adds_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let band = factory::band::create_band(db).await?;

    let member = BandMemberRepository::new(db)
        .add(band.id, user.id, BandRole::Member)
        .await?;

    assert_eq!(member.band_id, band.id);
    assert_eq!(member.user_id, user.id);
    assert_eq!(member.role, "MEMBER");

    Ok(())
}

/// Tests adding the same user twice.
///
/// Verifies that the composite primary key rejects duplicate memberships.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_membership() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, band) = factory::helpers::create_band_with_leader(db).await?;

    let result = BandMemberRepository::new(db)
        .add(band.id, leader.id, BandRole::Member)
        .await;

    assert!(result.is_err());

    Ok(())
}
