use super::*;

/// Tests stamping the reminder time excludes the rehearsal from the next run.
///
/// Expected: reminder_sent_at set and no longer due
#[tokio::test]
async fn stamps_reminder_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rehearsal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let now = Utc::now();
    let rehearsal = factory::rehearsal::RehearsalFactory::new(db, band.id)
        .start_time(now + Duration::hours(2))
        .build()
        .await?;

    let repo = RehearsalRepository::new(db);
    repo.mark_reminder_sent(rehearsal.id, now).await?;

    let stored = repo.find_by_id(rehearsal.id).await?.unwrap();
    assert!(stored.reminder_sent_at.is_some());
    assert_eq!(stored.title, rehearsal.title);
    assert!(repo
        .get_due_for_reminder(now, now + Duration::hours(24))
        .await?
        .is_empty());

    Ok(())
}
