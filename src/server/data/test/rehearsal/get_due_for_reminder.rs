use super::*;

/// Tests selection of rehearsals that need a reminder.
///
/// Verifies the window is `(now, now + 24h]`, and that rehearsals already reminded,
/// already started, or too far out are skipped.
///
/// Expected: Ok(Vec<Rehearsal>) containing only the due rehearsal
#[tokio::test]
async fn selects_unreminded_rehearsals_in_window() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rehearsal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let now = Utc::now();

    let due = factory::rehearsal::RehearsalFactory::new(db, band.id)
        .start_time(now + Duration::hours(5))
        .build()
        .await?;
    // Already reminded
    factory::rehearsal::RehearsalFactory::new(db, band.id)
        .start_time(now + Duration::hours(6))
        .reminder_sent_at(Some(now - Duration::hours(1)))
        .build()
        .await?;
    // Already started
    factory::rehearsal::RehearsalFactory::new(db, band.id)
        .start_time(now - Duration::hours(1))
        .build()
        .await?;
    // Outside window
    factory::rehearsal::RehearsalFactory::new(db, band.id)
        .start_time(now + Duration::hours(30))
        .build()
        .await?;

    let rehearsals = RehearsalRepository::new(db)
        .get_due_for_reminder(now, now + Duration::hours(24))
        .await?;

    assert_eq!(rehearsals.len(), 1);
    assert_eq!(rehearsals[0].id, due.id);

    Ok(())
}
