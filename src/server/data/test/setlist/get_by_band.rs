use super::*;

/// Tests listing setlists with song counts.
///
/// Expected: Ok(Vec<SetlistWithCount>) sorted by name with correct counts
#[tokio::test]
async fn lists_setlists_with_song_counts() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_setlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let song_a = factory::song::create_song(db, band.id).await?;
    let song_b = factory::song::create_song(db, band.id).await?;

    factory::setlist::SetlistFactory::new(db, band.id)
        .name("Wedding")
        .songs(vec![song_a.id, song_b.id])
        .build()
        .await?;
    factory::setlist::SetlistFactory::new(db, band.id)
        .name("Acoustic")
        .build()
        .await?;

    let setlists = SetlistRepository::new(db).get_by_band(band.id).await?;

    assert_eq!(setlists.len(), 2);
    assert_eq!(setlists[0].setlist.name, "Acoustic");
    assert_eq!(setlists[0].song_count, 0);
    assert_eq!(setlists[1].setlist.name, "Wedding");
    assert_eq!(setlists[1].song_count, 2);

    Ok(())
}
