use chrono::{DateTime, Utc};

use crate::{
    model::user::{NotificationPreferencesDto, UpdateUserDto, UserDto},
    server::util::validate::clearable,
};

/// A user account without credentials.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub notify_email: bool,
    pub notify_sms: bool,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts an entity model to a domain model, dropping the password hash.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            first_name: entity.first_name,
            last_name: entity.last_name,
            phone_number: entity.phone_number,
            notify_email: entity.notify_email,
            notify_sms: entity.notify_sms,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            notification_preferences: NotificationPreferencesDto {
                email: self.notify_email,
                sms: self.notify_sms,
            },
            created_at: self.created_at,
        }
    }
}

/// Parameters for inserting a new user. The password must already be hashed.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub notify_email: bool,
    pub notify_sms: bool,
}

/// Parameters for a partial profile update. `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParams {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// `Some(None)` clears the phone number.
    pub phone_number: Option<Option<String>>,
    pub notify_email: Option<bool>,
    pub notify_sms: Option<bool>,
}

impl UpdateUserParams {
    pub fn from_dto(id: i32, dto: UpdateUserDto) -> Self {
        let preferences = dto.notification_preferences;
        Self {
            id,
            first_name: dto.first_name.map(|v| v.trim().to_string()),
            last_name: dto.last_name.map(|v| v.trim().to_string()),
            phone_number: clearable(dto.phone_number),
            notify_email: preferences.map(|p| p.email),
            notify_sms: preferences.map(|p| p.sms),
        }
    }
}
