use super::*;

/// Tests removing a member.
///
/// Expected: Ok(true) once, then Ok(false)
#[tokio::test]
async fn removes_member_once() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, member, band) = factory::helpers::create_band_with_member(db).await?;

    let repo = BandMemberRepository::new(db);

    assert!(repo.remove(band.id, member.id).await?);
    assert!(!repo.remove(band.id, member.id).await?);
    assert_eq!(repo.count(band.id).await?, 1);

    Ok(())
}
