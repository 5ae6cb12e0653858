use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "band")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::band_member::Entity")]
    BandMember,
    #[sea_orm(has_many = "super::rehearsal::Entity")]
    Rehearsal,
    #[sea_orm(has_many = "super::setlist::Entity")]
    Setlist,
    #[sea_orm(has_many = "super::song::Entity")]
    Song,
    #[sea_orm(has_many = "super::equipment::Entity")]
    Equipment,
}

impl Related<super::band_member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BandMember.def()
    }
}

impl Related<super::rehearsal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rehearsal.def()
    }
}

impl Related<super::setlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Setlist.def()
    }
}

impl Related<super::song::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Song.def()
    }
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
