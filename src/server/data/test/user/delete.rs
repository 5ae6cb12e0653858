use super::*;

/// Tests deleting a user cascades to their memberships.
///
/// Verifies that the membership row is removed together with the user while the
/// band itself remains.
///
/// Expected: Ok(true), membership gone
#[tokio::test]
async fn deletes_user_and_memberships() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, band) = factory::helpers::create_band_with_leader(db).await?;

    let deleted = UserRepository::new(db).delete(leader.id).await?;

    assert!(deleted);
    let membership = entity::prelude::BandMember::find_by_id((band.id, leader.id))
        .one(db)
        .await?;
    assert!(membership.is_none());
    assert!(entity::prelude::Band::find_by_id(band.id)
        .one(db)
        .await?
        .is_some());

    Ok(())
}

/// Tests deleting a nonexistent user.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = UserRepository::new(db).delete(12345).await?;

    assert!(!deleted);

    Ok(())
}
