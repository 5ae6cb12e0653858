use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "rehearsal")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub band_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start_time: DateTimeUtc,
    pub end_time: DateTimeUtc,
    pub setlist_id: Option<i32>,
    /// Shared by every occurrence created from one recurring request.
    pub series_id: Option<String>,
    pub reminder_sent_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::band::Entity",
        from = "Column::BandId",
        to = "super::band::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Band,
    #[sea_orm(
        belongs_to = "super::setlist::Entity",
        from = "Column::SetlistId",
        to = "super::setlist::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Setlist,
    #[sea_orm(has_many = "super::rehearsal_attendance::Entity")]
    RehearsalAttendance,
}

impl Related<super::band::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Band.def()
    }
}

impl Related<super::setlist::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Setlist.def()
    }
}

impl Related<super::rehearsal_attendance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RehearsalAttendance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
