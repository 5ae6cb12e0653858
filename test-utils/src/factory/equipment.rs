//! Equipment factory for creating test equipment entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test equipment owned by a user.
pub struct EquipmentFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: i32,
    band_id: Option<i32>,
    name: String,
    category: Option<String>,
}

impl<'a> EquipmentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, owner_id: i32) -> Self {
        Self {
            db,
            owner_id,
            band_id: None,
            name: format!("Amp {}", next_id()),
            category: Some("Amplifier".to_string()),
        }
    }

    pub fn band_id(mut self, band_id: Option<i32>) -> Self {
        self.band_id = band_id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the equipment entity into the database.
    pub async fn build(self) -> Result<entity::equipment::Model, DbErr> {
        let now = Utc::now();
        entity::equipment::ActiveModel {
            owner_id: ActiveValue::Set(self.owner_id),
            band_id: ActiveValue::Set(self.band_id),
            name: ActiveValue::Set(self.name),
            category: ActiveValue::Set(self.category),
            notes: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an equipment item with default values for the owner.
pub async fn create_equipment(
    db: &DatabaseConnection,
    owner_id: i32,
) -> Result<entity::equipment::Model, DbErr> {
    EquipmentFactory::new(db, owner_id).build().await
}
