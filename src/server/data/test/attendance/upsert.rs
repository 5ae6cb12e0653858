use super::*;

/// Tests recording and then changing an attendance response.
///
/// Verifies that the second call replaces the first rather than adding a row.
///
/// Expected: status Maybe after the update, one row total
#[tokio::test]
async fn inserts_then_replaces_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rehearsal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, band) = factory::helpers::create_band_with_leader(db).await?;
    let rehearsal = factory::rehearsal::create_rehearsal(db, band.id).await?;

    let repo = AttendanceRepository::new(db);
    let first = repo
        .upsert(rehearsal.id, leader.id, AttendanceStatus::Attending)
        .await?;
    let second = repo
        .upsert(rehearsal.id, leader.id, AttendanceStatus::Maybe)
        .await?;

    assert_eq!(first.status, AttendanceStatus::Attending);
    assert_eq!(second.status, AttendanceStatus::Maybe);
    assert_eq!(second.first_name, leader.first_name);
    assert_eq!(repo.get_by_rehearsal(rehearsal.id).await?.len(), 1);

    Ok(())
}
