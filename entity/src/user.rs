use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub notify_email: bool,
    pub notify_sms: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::band_member::Entity")]
    BandMember,
    #[sea_orm(has_many = "super::equipment::Entity")]
    Equipment,
    #[sea_orm(has_many = "super::rehearsal_attendance::Entity")]
    RehearsalAttendance,
}

impl Related<super::band_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BandMember.def()
    }
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl Related<super::rehearsal_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RehearsalAttendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
