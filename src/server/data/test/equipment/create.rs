use super::*;

/// Tests creating personal equipment that is not shared with a band.
///
/// Expected: Ok(Equipment) with no band
#[tokio::test]
async fn creates_personal_equipment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;

    let equipment = EquipmentRepository::new(db)
        .create(CreateEquipmentParams {
            owner_id: owner.id,
            band_id: None,
            name: "Fender Twin".to_string(),
            category: Some("Amplifier".to_string()),
            notes: None,
        })
        .await?;

    assert_eq!(equipment.owner_id, owner.id);
    assert!(equipment.band_id.is_none());
    assert_eq!(equipment.name, "Fender Twin");

    Ok(())
}
