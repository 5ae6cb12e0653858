use super::*;

fn params(band_id: i32) -> CreateSetlistParams {
    CreateSetlistParams {
        band_id,
        name: "Friday gig".to_string(),
        description: None,
    }
}

/// Tests creating a setlist stores its songs in the given order.
///
/// Expected: setlist with songs [b, a]
#[tokio::test]
async fn creates_setlist_with_songs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_setlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let a = factory::song::create_song(db, band.id).await?;
    let b = factory::song::create_song(db, band.id).await?;

    let repo = SetlistRepository::new(db);
    let setlist = repo.create(params(band.id), vec![b.id, a.id]).await?;

    assert_eq!(setlist.name, "Friday gig");
    let stored = repo.get_with_songs(setlist.id).await?.unwrap();
    let ids: Vec<i32> = stored.songs.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![b.id, a.id]);

    Ok(())
}

/// Tests a failed song insert leaves no setlist behind.
///
/// Listing the same song twice violates the setlist/song primary key.
///
/// Expected: Err, band has no setlists
#[tokio::test]
async fn rolls_back_on_song_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_setlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let a = factory::song::create_song(db, band.id).await?;

    let repo = SetlistRepository::new(db);
    let result = repo.create(params(band.id), vec![a.id, a.id]).await;

    assert!(result.is_err());
    assert!(repo.get_by_band(band.id).await?.is_empty());

    Ok(())
}
