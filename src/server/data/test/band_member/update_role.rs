use super::*;

/// Tests promoting a member to leader.
///
/// Expected: Ok(true) and role becomes Leader
#[tokio::test]
async fn promotes_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, member, band) = factory::helpers::create_band_with_member(db).await?;

    let repo = BandMemberRepository::new(db);
    let updated = repo
        .update_role(band.id, member.id, BandRole::Leader)
        .await?;

    assert!(updated);
    assert_eq!(repo.get_role(band.id, member.id).await?, Some(BandRole::Leader));

    Ok(())
}

/// Tests updating the role of a non-member.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_non_member() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let user = factory::user::create_user(db).await?;

    let updated = BandMemberRepository::new(db)
        .update_role(band.id, user.id, BandRole::Leader)
        .await?;

    assert!(!updated);

    Ok(())
}
