//! Band factory for creating test band entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test bands with customizable fields.
pub struct BandFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    description: Option<String>,
}

impl<'a> BandFactory<'a> {
    /// Creates a new BandFactory with defaults `"Band {id}"` and no description.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Band {}", next_id()),
            description: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    /// Builds and inserts the band entity into the database.
    pub async fn build(self) -> Result<entity::band::Model, DbErr> {
        let now = Utc::now();
        entity::band::ActiveModel {
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a band with default values.
pub async fn create_band(db: &DatabaseConnection) -> Result<entity::band::Model, DbErr> {
    BandFactory::new(db).build().await
}
