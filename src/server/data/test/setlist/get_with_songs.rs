use super::*;

/// Tests songs come back in stored position order, not insertion or title order.
///
/// Expected: Ok(Some(SetlistWithSongs)) with songs ordered [c, a, b]
#[tokio::test]
async fn returns_songs_in_position_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_setlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let a = factory::song::SongFactory::new(db, band.id)
        .title("A")
        .duration_seconds(Some(100))
        .build()
        .await?;
    let b = factory::song::SongFactory::new(db, band.id)
        .title("B")
        .duration_seconds(None)
        .build()
        .await?;
    let c = factory::song::SongFactory::new(db, band.id)
        .title("C")
        .duration_seconds(Some(200))
        .build()
        .await?;
    let setlist = factory::setlist::SetlistFactory::new(db, band.id)
        .songs(vec![c.id, a.id, b.id])
        .build()
        .await?;

    let result = SetlistRepository::new(db)
        .get_with_songs(setlist.id)
        .await?
        .unwrap();

    let titles: Vec<&str> = result.songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["C", "A", "B"]);
    assert_eq!(result.total_duration_seconds(), 300);

    Ok(())
}

/// Tests a nonexistent setlist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_setlist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_setlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SetlistRepository::new(db).get_with_songs(77).await?;

    assert!(result.is_none());

    Ok(())
}
