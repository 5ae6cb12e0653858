use super::*;

/// Tests role lookup for leaders, members and outsiders.
///
/// Expected: Some(Leader), Some(Member), None respectively
#[tokio::test]
async fn returns_role_or_none() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, member, band) = factory::helpers::create_band_with_member(db).await?;
    let outsider = factory::user::create_user(db).await?;

    let repo = BandMemberRepository::new(db);

    assert_eq!(repo.get_role(band.id, leader.id).await?, Some(BandRole::Leader));
    assert_eq!(repo.get_role(band.id, member.id).await?, Some(BandRole::Member));
    assert_eq!(repo.get_role(band.id, outsider.id).await?, None);

    Ok(())
}

/// Tests that an unknown stored role surfaces as an error rather than a guess.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn fails_on_unknown_stored_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let band = factory::band::create_band(db).await?;
    factory::band_member::create_band_member(db, band.id, user.id, "ROADIE").await?;

    let result = BandMemberRepository::new(db).get_role(band.id, user.id).await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}
