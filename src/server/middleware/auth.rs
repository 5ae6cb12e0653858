use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::{
    model::band::BandRole,
    server::{
        data::{band_member::BandMemberRepository, user::UserRepository},
        error::{auth::AuthError, AppError},
        util::jwt::JwtKeys,
    },
};

pub enum Permission {
    /// Caller must belong to the band.
    BandMember(i32),
    /// Caller must lead the band.
    BandLeader(i32),
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys, headers: &'a HeaderMap) -> Self {
        Self { db, jwt, headers }
    }

    /// Authenticates the request and checks every permission.
    ///
    /// # Returns
    /// - `Ok(User)` - The caller, when every permission holds
    /// - `Err(AuthError::MissingToken)` - No `Authorization: Bearer` header
    /// - `Err(AuthError::InvalidToken)` - Token undecodable, expired or not a session token
    /// - `Err(AuthError::UserNotInDatabase)` - Token names a deleted user
    /// - `Err(AuthError::NotBandMember)` / `Err(AuthError::NotBandLeader)` - Permission failed
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let token = bearer_token(self.headers)?;
        let user = authenticate_token(self.db, self.jwt, token).await?;

        self.check(user.id, permissions).await?;

        Ok(user)
    }

    /// Checks permissions for an already authenticated user.
    ///
    /// Used when the band is only known after loading the requested resource.
    pub async fn check(&self, user_id: i32, permissions: &[Permission]) -> Result<(), AppError> {
        let member_repo = BandMemberRepository::new(self.db);

        for permission in permissions {
            match permission {
                Permission::BandMember(band_id) => {
                    if member_repo.get_role(*band_id, user_id).await?.is_none() {
                        return Err(AuthError::NotBandMember(user_id, *band_id).into());
                    }
                }
                Permission::BandLeader(band_id) => {
                    match member_repo.get_role(*band_id, user_id).await? {
                        Some(BandRole::Leader) => {}
                        Some(BandRole::Member) => {
                            return Err(AuthError::NotBandLeader(user_id, *band_id).into())
                        }
                        None => return Err(AuthError::NotBandMember(user_id, *band_id).into()),
                    }
                }
            }
        }

        Ok(())
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or(AuthError::MissingToken)
}

/// Resolves a session token to its user.
pub async fn authenticate_token(
    db: &DatabaseConnection,
    jwt: &JwtKeys,
    token: &str,
) -> Result<entity::user::Model, AppError> {
    let user_id = jwt.verify_session(token)?;

    let Some(user) = UserRepository::new(db).find_by_id(user_id).await? else {
        return Err(AuthError::UserNotInDatabase(user_id).into());
    };

    Ok(user)
}
