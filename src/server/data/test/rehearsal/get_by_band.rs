use super::*;

/// Tests rehearsals are returned in start time order for the band only.
///
/// Expected: Ok(Vec<Rehearsal>) sorted ascending, other band excluded
#[tokio::test]
async fn orders_by_start_time() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rehearsal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let other = factory::band::create_band(db).await?;

    let later = factory::rehearsal::RehearsalFactory::new(db, band.id)
        .start_time(Utc::now() + Duration::days(10))
        .build()
        .await?;
    let sooner = factory::rehearsal::RehearsalFactory::new(db, band.id)
        .start_time(Utc::now() + Duration::days(1))
        .build()
        .await?;
    factory::rehearsal::create_rehearsal(db, other.id).await?;

    let rehearsals = RehearsalRepository::new(db).get_by_band(band.id).await?;

    let ids: Vec<i32> = rehearsals.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![sooner.id, later.id]);

    Ok(())
}
