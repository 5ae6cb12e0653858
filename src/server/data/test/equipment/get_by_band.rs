use super::*;

/// Tests listing equipment shared with a band.
///
/// Expected: only the shared item is returned
#[tokio::test]
async fn lists_shared_equipment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, band) = factory::helpers::create_band_with_leader(db).await?;
    let shared = factory::equipment::EquipmentFactory::new(db, leader.id)
        .band_id(Some(band.id))
        .build()
        .await?;
    factory::equipment::create_equipment(db, leader.id).await?;

    let items = EquipmentRepository::new(db).get_by_band(band.id).await?;

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, shared.id);

    Ok(())
}
