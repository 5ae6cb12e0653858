use super::*;

/// Tests rescheduling clears the reminder stamp and detaches the setlist.
///
/// Expected: Ok(Some(Rehearsal)) with new times, no reminder, no setlist
#[tokio::test]
async fn reschedules_and_clears_reminder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rehearsal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let setlist = factory::setlist::create_setlist(db, band.id).await?;
    let rehearsal = factory::rehearsal::RehearsalFactory::new(db, band.id)
        .setlist_id(Some(setlist.id))
        .reminder_sent_at(Some(Utc::now()))
        .build()
        .await?;

    let new_start = rehearsal.start_time + Duration::days(1);
    let updated = RehearsalRepository::new(db)
        .update(UpdateRehearsalParams {
            id: rehearsal.id,
            start_time: Some(new_start),
            end_time: Some(new_start + Duration::hours(3)),
            setlist_id: Some(None),
            clear_reminder: true,
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.start_time, new_start);
    assert_eq!(updated.end_time, new_start + Duration::hours(3));
    assert!(updated.reminder_sent_at.is_none());
    assert!(updated.setlist_id.is_none());
    assert_eq!(updated.title, rehearsal.title);

    Ok(())
}

/// Tests updating only the title leaves the reminder stamp alone.
///
/// Expected: reminder_sent_at unchanged
#[tokio::test]
async fn keeps_reminder_when_not_rescheduled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rehearsal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let rehearsal = factory::rehearsal::RehearsalFactory::new(db, band.id)
        .reminder_sent_at(Some(Utc::now()))
        .build()
        .await?;

    let updated = RehearsalRepository::new(db)
        .update(UpdateRehearsalParams {
            id: rehearsal.id,
            title: Some("Renamed".to_string()),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.title, "Renamed");
    assert!(updated.reminder_sent_at.is_some());

    Ok(())
}
