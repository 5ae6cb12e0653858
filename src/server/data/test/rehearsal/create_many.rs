use super::*;

/// Tests inserting a rehearsal series.
///
/// Verifies that every occurrence is stored with the shared series id.
///
/// Expected: Ok(Vec<Rehearsal>) with three entries sharing the series id
#[tokio::test]
async fn creates_series() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rehearsal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let params = (1..=3)
        .map(|i| CreateRehearsalParams {
            series_id: Some("series-1".to_string()),
            ..create_params(band.id, i * 7)
        })
        .collect();

    let repo = RehearsalRepository::new(db);
    let created = repo.create_many(params).await?;

    assert_eq!(created.len(), 3);
    assert!(created
        .iter()
        .all(|r| r.series_id.as_deref() == Some("series-1")));
    assert_eq!(repo.get_by_band(band.id).await?.len(), 3);

    Ok(())
}

/// Tests that a failing occurrence rolls back the whole series.
///
/// Expected: Err(DbErr) and no rehearsals stored
#[tokio::test]
async fn rolls_back_on_failure() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rehearsal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let params = vec![create_params(band.id, 1), create_params(999_999, 2)];

    let repo = RehearsalRepository::new(db);
    let result = repo.create_many(params).await;

    assert!(result.is_err());
    assert!(repo.get_by_band(band.id).await?.is_empty());

    Ok(())
}
