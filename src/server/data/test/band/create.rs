use super::*;

/// Tests creating a band.
///
/// Expected: Ok(Band) with the provided name and description
#[tokio::test]
async fn creates_band() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let band = BandRepository::new(db)
        .create(CreateBandParams {
            name: "The Rehearsals".to_string(),
            description: Some("Tuesday night covers".to_string()),
        })
        .await?;

    assert!(band.id > 0);
    assert_eq!(band.name, "The Rehearsals");
    assert_eq!(band.description.as_deref(), Some("Tuesday night covers"));

    Ok(())
}
