use super::*;

/// Tests clearing optional fields while keeping the title.
///
/// Expected: Ok(Some(Song)) with artist cleared and tempo changed
#[tokio::test]
async fn clears_and_sets_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_setlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let song = factory::song::SongFactory::new(db, band.id)
        .title("Hold On")
        .artist(Some("Alabama Shakes".to_string()))
        .build()
        .await?;

    let updated = SongRepository::new(db)
        .update(UpdateSongParams {
            id: song.id,
            artist: Some(None),
            tempo: Some(Some(82)),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Hold On");
    assert!(updated.artist.is_none());
    assert_eq!(updated.tempo, Some(82));

    Ok(())
}
