use sea_orm::entity::prelude::*;

/// A member's availability for a rehearsal. `status` is stored as `ATTENDING`,
/// `NOT_ATTENDING` or `MAYBE`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "rehearsal_attendance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub rehearsal_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    pub status: String,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rehearsal::Entity",
        from = "Column::RehearsalId",
        to = "super::rehearsal::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Rehearsal,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::rehearsal::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rehearsal.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
