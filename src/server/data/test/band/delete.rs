use super::*;
use sea_orm::EntityTrait;

/// Tests deleting a band cascades to its rehearsals, songs and memberships.
///
/// Expected: Ok(true) and no dependent rows left
#[tokio::test]
async fn deletes_band_and_dependents() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (leader, band) = factory::helpers::create_band_with_leader(db).await?;
    let rehearsal = factory::rehearsal::create_rehearsal(db, band.id).await?;
    let song = factory::song::create_song(db, band.id).await?;
    let equipment = factory::equipment::EquipmentFactory::new(db, leader.id)
        .band_id(Some(band.id))
        .build()
        .await?;

    let deleted = BandRepository::new(db).delete(band.id).await?;

    assert!(deleted);
    assert!(entity::prelude::Rehearsal::find_by_id(rehearsal.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::Song::find_by_id(song.id)
        .one(db)
        .await?
        .is_none());
    assert!(entity::prelude::BandMember::find_by_id((band.id, leader.id))
        .one(db)
        .await?
        .is_none());

    // Shared equipment stays with its owner
    let equipment = entity::prelude::Equipment::find_by_id(equipment.id)
        .one(db)
        .await?
        .unwrap();
    assert!(equipment.band_id.is_none());

    Ok(())
}
