use super::*;

/// Tests listing the bands a user belongs to.
///
/// Verifies that each band carries the user's own role and the band's member
/// count, sorted by band name, and that bands the user is not in are excluded.
///
/// Expected: Ok(Vec<UserBand>) with two entries
#[tokio::test]
async fn lists_bands_with_role_and_member_count() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;

    let zebra = factory::band::BandFactory::new(db).name("Zebra").build().await?;
    let alpha = factory::band::BandFactory::new(db).name("Alpha").build().await?;
    let unrelated = factory::band::create_band(db).await?;

    factory::band_member::create_member(db, zebra.id, user.id).await?;
    factory::band_member::create_leader(db, zebra.id, other.id).await?;
    factory::band_member::create_leader(db, alpha.id, user.id).await?;
    factory::band_member::create_leader(db, unrelated.id, other.id).await?;

    let bands = BandRepository::new(db).get_for_user(user.id).await?;

    assert_eq!(bands.len(), 2);
    assert_eq!(bands[0].band.name, "Alpha");
    assert_eq!(bands[0].role, BandRole::Leader);
    assert_eq!(bands[0].member_count, 1);
    assert_eq!(bands[1].band.name, "Zebra");
    assert_eq!(bands[1].role, BandRole::Member);
    assert_eq!(bands[1].member_count, 2);

    Ok(())
}

/// Tests listing bands for a user with no memberships.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_user_without_bands() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;

    let bands = BandRepository::new(db).get_for_user(user.id).await?;

    assert!(bands.is_empty());

    Ok(())
}
