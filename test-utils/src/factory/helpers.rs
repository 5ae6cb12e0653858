//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and a band led by that user.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((leader, band))` - The created leader and band entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_band_with_leader(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::band::Model), DbErr> {
    let leader = crate::factory::user::create_user(db).await?;
    let band = crate::factory::band::create_band(db).await?;
    crate::factory::band_member::create_leader(db, band.id, leader.id).await?;

    Ok((leader, band))
}

/// Creates a band with one leader and one regular member.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((leader, member, band))` - The created users and band
/// - `Err(DbErr)` - Database error during creation
pub async fn create_band_with_member(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::user::Model,
        entity::band::Model,
    ),
    DbErr,
> {
    let (leader, band) = create_band_with_leader(db).await?;
    let member = crate::factory::user::create_user(db).await?;
    crate::factory::band_member::create_member(db, band.id, member.id).await?;

    Ok((leader, member, band))
}
