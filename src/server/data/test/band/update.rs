use super::*;

/// Tests renaming a band and clearing its description.
///
/// Expected: Ok(Some(Band)) with new name and no description
#[tokio::test]
async fn updates_name_and_clears_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::BandFactory::new(db)
        .description(Some("old".to_string()))
        .build()
        .await?;

    let updated = BandRepository::new(db)
        .update(UpdateBandParams {
            id: band.id,
            name: Some("Renamed".to_string()),
            description: Some(None),
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert!(updated.description.is_none());
    assert!(updated.updated_at >= band.updated_at);

    Ok(())
}
