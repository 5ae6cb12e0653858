use super::*;

/// Tests counting only songs that belong to the band.
///
/// Expected: 1 when one of the two ids belongs to another band
#[tokio::test]
async fn counts_only_band_songs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_setlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let other = factory::band::create_band(db).await?;
    let ours = factory::song::create_song(db, band.id).await?;
    let theirs = factory::song::create_song(db, other.id).await?;

    let repo = SongRepository::new(db);

    assert_eq!(repo.count_in_band(band.id, vec![ours.id, theirs.id]).await?, 1);
    assert_eq!(repo.count_in_band(band.id, vec![]).await?, 0);

    Ok(())
}
