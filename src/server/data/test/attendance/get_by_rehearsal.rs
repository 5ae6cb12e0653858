use super::*;

/// Tests listing responses for a single rehearsal.
///
/// Expected: Ok(Vec<Attendance>) with both members, other rehearsal excluded
#[tokio::test]
async fn lists_responses_for_rehearsal() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rehearsal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, member, band) = factory::helpers::create_band_with_member(db).await?;
    let rehearsal = factory::rehearsal::create_rehearsal(db, band.id).await?;
    let other = factory::rehearsal::create_rehearsal(db, band.id).await?;

    let repo = AttendanceRepository::new(db);
    repo.upsert(rehearsal.id, leader.id, AttendanceStatus::Attending)
        .await?;
    repo.upsert(rehearsal.id, member.id, AttendanceStatus::NotAttending)
        .await?;
    repo.upsert(other.id, member.id, AttendanceStatus::Maybe)
        .await?;

    let responses = repo.get_by_rehearsal(rehearsal.id).await?;

    assert_eq!(responses.len(), 2);
    assert!(responses
        .iter()
        .any(|a| a.user_id == member.id && a.status == AttendanceStatus::NotAttending));
    assert!(responses.iter().all(|a| a.rehearsal_id == rehearsal.id));

    Ok(())
}
