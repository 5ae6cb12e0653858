use super::*;

/// Tests upcoming rehearsals across several bands.
///
/// Verifies that past rehearsals are excluded, results carry the band name, and are
/// sorted soonest first.
///
/// Expected: Ok(Vec<UpcomingRehearsal>) with two future entries
#[tokio::test]
async fn returns_future_rehearsals_with_band_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rehearsal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::band::BandFactory::new(db).name("First").build().await?;
    let second = factory::band::BandFactory::new(db).name("Second").build().await?;
    let now = Utc::now();

    factory::rehearsal::RehearsalFactory::new(db, first.id)
        .start_time(now - Duration::days(1))
        .build()
        .await?;
    let in_three = factory::rehearsal::RehearsalFactory::new(db, first.id)
        .start_time(now + Duration::days(3))
        .build()
        .await?;
    let in_one = factory::rehearsal::RehearsalFactory::new(db, second.id)
        .start_time(now + Duration::days(1))
        .build()
        .await?;

    let upcoming = RehearsalRepository::new(db)
        .get_upcoming_for_bands(vec![first.id, second.id], now)
        .await?;

    assert_eq!(upcoming.len(), 2);
    assert_eq!(upcoming[0].rehearsal.id, in_one.id);
    assert_eq!(upcoming[0].band_name, "Second");
    assert_eq!(upcoming[1].rehearsal.id, in_three.id);
    assert_eq!(upcoming[1].band_name, "First");

    Ok(())
}

/// Tests no bands yields no rehearsals without querying.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_no_bands() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rehearsal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let upcoming = RehearsalRepository::new(db)
        .get_upcoming_for_bands(vec![], Utc::now())
        .await?;

    assert!(upcoming.is_empty());

    Ok(())
}
