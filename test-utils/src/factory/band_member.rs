//! Band member factory for linking users to bands.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a membership row with the provided stored role (`LEADER` or `MEMBER`).
///
/// # Arguments
/// - `db` - Database connection
/// - `band_id` - ID of the band
/// - `user_id` - ID of the user joining the band
/// - `role` - Stored role string
///
/// # Returns
/// - `Ok(entity::band_member::Model)` - Created membership
/// - `Err(DbErr)` - Database error, e.g. foreign key or duplicate key violation
pub async fn create_band_member(
    db: &DatabaseConnection,
    band_id: i32,
    user_id: i32,
    role: &str,
) -> Result<entity::band_member::Model, DbErr> {
    entity::band_member::ActiveModel {
        band_id: ActiveValue::Set(band_id),
        user_id: ActiveValue::Set(user_id),
        role: ActiveValue::Set(role.to_string()),
        joined_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Adds the user to the band as a leader.
pub async fn create_leader(
    db: &DatabaseConnection,
    band_id: i32,
    user_id: i32,
) -> Result<entity::band_member::Model, DbErr> {
    create_band_member(db, band_id, user_id, "LEADER").await
}

/// Adds the user to the band as a regular member.
pub async fn create_member(
    db: &DatabaseConnection,
    band_id: i32,
    user_id: i32,
) -> Result<entity::band_member::Model, DbErr> {
    create_band_member(db, band_id, user_id, "MEMBER").await
}
