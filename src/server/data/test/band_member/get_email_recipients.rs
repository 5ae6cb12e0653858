use super::*;

/// Tests that only members who opted in to email are returned.
///
/// Expected: Ok(Vec) containing only the opted-in member
#[tokio::test]
async fn returns_only_opted_in_members() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let subscribed = factory::user::UserFactory::new(db)
        .notify_email(true)
        .build()
        .await?;
    let muted = factory::user::UserFactory::new(db)
        .notify_email(false)
        .build()
        .await?;
    factory::band_member::create_leader(db, band.id, subscribed.id).await?;
    factory::band_member::create_member(db, band.id, muted.id).await?;

    let recipients = BandMemberRepository::new(db)
        .get_email_recipients(band.id)
        .await?;

    assert_eq!(recipients.len(), 1);
    assert_eq!(recipients[0].id, subscribed.id);

    Ok(())
}
