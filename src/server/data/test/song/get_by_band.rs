use super::*;

/// Tests songs are ordered by title.
///
/// Expected: titles in alphabetical order
#[tokio::test]
async fn orders_by_title() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_setlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    for title in ["Valerie", "Crazy", "Mustang Sally"] {
        factory::song::SongFactory::new(db, band.id)
            .title(title)
            .build()
            .await?;
    }

    let songs = SongRepository::new(db).get_by_band(band.id).await?;

    let titles: Vec<&str> = songs.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Crazy", "Mustang Sally", "Valerie"]);

    Ok(())
}
