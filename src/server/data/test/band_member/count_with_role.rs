use super::*;

/// Tests counting leaders separately from members.
///
/// Expected: 1 leader, 2 members, 3 total
#[tokio::test]
async fn counts_by_role() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, band) = factory::helpers::create_band_with_member(db).await?;
    let another = factory::user::create_user(db).await?;
    factory::band_member::create_member(db, band.id, another.id).await?;

    let repo = BandMemberRepository::new(db);

    assert_eq!(repo.count_with_role(band.id, BandRole::Leader).await?, 1);
    assert_eq!(repo.count_with_role(band.id, BandRole::Member).await?, 2);
    assert_eq!(repo.count(band.id).await?, 3);

    Ok(())
}
