use super::*;

/// Tests creating a song with every optional field.
///
/// Expected: Ok(Song) with the key stored and returned
#[tokio::test]
async fn creates_song() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_setlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;

    let song = SongRepository::new(db)
        .create(CreateSongParams {
            band_id: band.id,
            title: "Superstition".to_string(),
            artist: Some("Stevie Wonder".to_string()),
            duration_seconds: Some(245),
            key: Some("Ebm".to_string()),
            tempo: Some(100),
            notes: Some("Clav intro".to_string()),
        })
        .await?;

    assert_eq!(song.band_id, band.id);
    assert_eq!(song.key.as_deref(), Some("Ebm"));
    assert_eq!(song.tempo, Some(100));

    Ok(())
}
