use super::*;

/// Tests replacing the song order.
///
/// Verifies that removed songs disappear and the new order is stored.
///
/// Expected: songs [b, c] after replacing [a, b]
#[tokio::test]
async fn replaces_song_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_setlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let a = factory::song::create_song(db, band.id).await?;
    let b = factory::song::create_song(db, band.id).await?;
    let c = factory::song::create_song(db, band.id).await?;
    let setlist = factory::setlist::SetlistFactory::new(db, band.id)
        .songs(vec![a.id, b.id])
        .build()
        .await?;

    let repo = SetlistRepository::new(db);
    repo.replace_songs(setlist.id, vec![b.id, c.id]).await?;

    let result = repo.get_with_songs(setlist.id).await?.unwrap();
    let ids: Vec<i32> = result.songs.iter().map(|s| s.id).collect();
    assert_eq!(ids, vec![b.id, c.id]);

    Ok(())
}

/// Tests replacing with an empty list clears the setlist.
///
/// Expected: no songs
#[tokio::test]
async fn clears_songs() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_setlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let a = factory::song::create_song(db, band.id).await?;
    let setlist = factory::setlist::SetlistFactory::new(db, band.id)
        .songs(vec![a.id])
        .build()
        .await?;

    let repo = SetlistRepository::new(db);
    repo.replace_songs(setlist.id, vec![]).await?;

    assert!(repo
        .get_with_songs(setlist.id)
        .await?
        .unwrap()
        .songs
        .is_empty());

    Ok(())
}
