use super::*;
use sea_orm::EntityTrait;

/// Tests deleting a setlist detaches it from rehearsals instead of deleting them.
///
/// Expected: Ok(true), rehearsal kept with no setlist
#[tokio::test]
async fn detaches_setlist_from_rehearsals() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_rehearsal_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let band = factory::band::create_band(db).await?;
    let setlist = factory::setlist::create_setlist(db, band.id).await?;
    let rehearsal = factory::rehearsal::RehearsalFactory::new(db, band.id)
        .setlist_id(Some(setlist.id))
        .build()
        .await?;

    let deleted = SetlistRepository::new(db).delete(setlist.id).await?;

    assert!(deleted);
    let rehearsal = entity::prelude::Rehearsal::find_by_id(rehearsal.id)
        .one(db)
        .await?
        .unwrap();
    assert!(rehearsal.setlist_id.is_none());

    Ok(())
}
