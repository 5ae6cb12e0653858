use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::equipment::{CreateEquipmentParams, Equipment, UpdateEquipmentParams};

pub struct EquipmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EquipmentRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateEquipmentParams) -> Result<Equipment, DbErr> {
        let now = Utc::now();
        let equipment = entity::equipment::ActiveModel {
            owner_id: ActiveValue::Set(params.owner_id),
            band_id: ActiveValue::Set(params.band_id),
            name: ActiveValue::Set(params.name),
            category: ActiveValue::Set(params.category),
            notes: ActiveValue::Set(params.notes),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Equipment::from_entity(equipment))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Equipment>, DbErr> {
        let equipment = entity::prelude::Equipment::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(equipment.map(Equipment::from_entity))
    }

    pub async fn get_by_owner(&self, owner_id: i32) -> Result<Vec<Equipment>, DbErr> {
        let items = entity::prelude::Equipment::find()
            .filter(entity::equipment::Column::OwnerId.eq(owner_id))
            .order_by_asc(entity::equipment::Column::Name)
            .all(self.db)
            .await?;

        Ok(items.into_iter().map(Equipment::from_entity).collect())
    }

    /// Gets equipment members have shared with the band.
    pub async fn get_by_band(&self, band_id: i32) -> Result<Vec<Equipment>, DbErr> {
        let items = entity::prelude::Equipment::find()
            .filter(entity::equipment::Column::BandId.eq(band_id))
            .order_by_asc(entity::equipment::Column::Name)
            .all(self.db)
            .await?;

        Ok(items.into_iter().map(Equipment::from_entity).collect())
    }

    pub async fn update(&self, params: UpdateEquipmentParams) -> Result<Option<Equipment>, DbErr> {
        let Some(equipment) = entity::prelude::Equipment::find_by_id(params.id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::equipment::ActiveModel = equipment.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(category) = params.category {
            active.category = ActiveValue::Set(category);
        }
        if let Some(notes) = params.notes {
            active.notes = ActiveValue::Set(notes);
        }
        if let Some(band_id) = params.band_id {
            active.band_id = ActiveValue::Set(band_id);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let equipment = active.update(self.db).await?;

        Ok(Some(Equipment::from_entity(equipment)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Equipment::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
