use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::rehearsal::AttendanceStatus, server::model::rehearsal::Attendance,
};

pub struct AttendanceRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AttendanceRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or replaces a member's attendance response for a rehearsal.
    pub async fn upsert(
        &self,
        rehearsal_id: i32,
        user_id: i32,
        status: AttendanceStatus,
    ) -> Result<Attendance, DbErr> {
        use sea_orm::sea_query::OnConflict;

        entity::prelude::RehearsalAttendance::insert(entity::rehearsal_attendance::ActiveModel {
            rehearsal_id: ActiveValue::Set(rehearsal_id),
            user_id: ActiveValue::Set(user_id),
            status: ActiveValue::Set(status.as_str().to_string()),
            updated_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::rehearsal_attendance::Column::RehearsalId,
                entity::rehearsal_attendance::Column::UserId,
            ])
            .update_columns([
                entity::rehearsal_attendance::Column::Status,
                entity::rehearsal_attendance::Column::UpdatedAt,
            ])
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        let (attendance, user) =
            entity::prelude::RehearsalAttendance::find_by_id((rehearsal_id, user_id))
                .find_also_related(entity::prelude::User)
                .one(self.db)
                .await?
                .ok_or_else(|| {
                    DbErr::RecordNotFound(format!(
                        "Attendance for rehearsal {} and user {} not found after upsert",
                        rehearsal_id, user_id
                    ))
                })?;

        let user = user.ok_or_else(|| DbErr::RecordNotFound(format!("User {}", user_id)))?;

        Attendance::from_entity(attendance, user)
    }

    /// Gets every attendance response for a rehearsal, most recent first.
    pub async fn get_by_rehearsal(&self, rehearsal_id: i32) -> Result<Vec<Attendance>, DbErr> {
        let rows = entity::prelude::RehearsalAttendance::find()
            .filter(entity::rehearsal_attendance::Column::RehearsalId.eq(rehearsal_id))
            .find_also_related(entity::prelude::User)
            .order_by_desc(entity::rehearsal_attendance::Column::UpdatedAt)
            .all(self.db)
            .await?;

        rows.into_iter()
            .filter_map(|(attendance, user)| user.map(|user| (attendance, user)))
            .map(|(attendance, user)| Attendance::from_entity(attendance, user))
            .collect()
    }
}
