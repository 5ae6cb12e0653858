use super::*;

/// Tests getting a band with its members.
///
/// Expected: Ok(Some(BandWithMembers)) listing leader then member
#[tokio::test]
async fn gets_band_with_members_in_join_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, member, band) = factory::helpers::create_band_with_member(db).await?;

    let result = BandRepository::new(db)
        .get_with_members(band.id)
        .await?
        .unwrap();

    assert_eq!(result.band.id, band.id);
    assert_eq!(result.members.len(), 2);
    assert_eq!(result.members[0].user_id, leader.id);
    assert_eq!(result.members[0].role, BandRole::Leader);
    assert_eq!(result.members[1].user_id, member.id);
    assert_eq!(result.members[1].email, member.email);

    Ok(())
}

/// Tests getting a nonexistent band.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_band() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BandRepository::new(db).get_with_members(404).await?;

    assert!(result.is_none());

    Ok(())
}
