use super::*;

/// Tests renaming a setlist.
///
/// Expected: Ok(Some(Setlist)) with the new name and description kept
#[tokio::test]
async fn renames_setlist() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_setlist_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let setlist = factory::setlist::SetlistFactory::new(db, band.id)
        .description(Some("Summer".to_string()))
        .build()
        .await?;

    let updated = SetlistRepository::new(db)
        .update(UpdateSetlistParams {
            id: setlist.id,
            name: Some("Summer Gig".to_string()),
            description: None,
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "Summer Gig");
    assert_eq!(updated.description.as_deref(), Some("Summer"));

    Ok(())
}
