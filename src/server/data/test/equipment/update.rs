use super::*;

/// Tests unsharing equipment from a band and renaming it.
///
/// Expected: Ok(Some(Equipment)) with no band and the new name
#[tokio::test]
async fn unshares_and_renames() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, band) = factory::helpers::create_band_with_leader(db).await?;
    let equipment = factory::equipment::EquipmentFactory::new(db, leader.id)
        .band_id(Some(band.id))
        .build()
        .await?;

    let updated = EquipmentRepository::new(db)
        .update(UpdateEquipmentParams {
            id: equipment.id,
            name: Some("PA system".to_string()),
            band_id: Some(None),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.name, "PA system");
    assert!(updated.band_id.is_none());
    assert_eq!(updated.category, equipment.category);

    Ok(())
}
