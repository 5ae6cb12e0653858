use super::*;

/// Tests listing only the caller's equipment.
///
/// Expected: Ok(Vec<Equipment>) with the owner's two items sorted by name
#[tokio::test]
async fn lists_owner_equipment() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    factory::equipment::EquipmentFactory::new(db, owner.id)
        .name("Snare")
        .build()
        .await?;
    factory::equipment::EquipmentFactory::new(db, owner.id)
        .name("Cymbal")
        .build()
        .await?;
    factory::equipment::create_equipment(db, other.id).await?;

    let items = EquipmentRepository::new(db).get_by_owner(owner.id).await?;

    let names: Vec<&str> = items.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Cymbal", "Snare"]);

    Ok(())
}
