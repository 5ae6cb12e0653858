//! Account registration, login and password recovery.

use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::auth::{ForgotPasswordDto, LoginDto, RegisterDto, ResetPasswordDto},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, User},
        service::mail::{Email, Mailer},
        util::{
            jwt::JwtKeys,
            password::{hash_password, verify_password},
            validate::{normalize_optional, Validator, MIN_PASSWORD_LEN},
        },
    },
};

/// Emails are compared case-insensitively.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Maps a unique-index violation on insert to `EmailTaken`.
///
/// The lookup in `register` misses a concurrent registration of the same email; the
/// index catches it.
fn email_conflict(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => AuthError::EmailTaken.into(),
        _ => err.into(),
    }
}

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    jwt: &'a JwtKeys,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection, jwt: &'a JwtKeys) -> Self {
        Self { db, jwt }
    }

    /// Creates an account and signs the new user in.
    ///
    /// SMS notifications start enabled only when a phone number was given.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Session token and the created user
    /// - `Err(AppError::Validation)` - Invalid email, short password or blank names
    /// - `Err(AuthError::EmailTaken)` - An account already uses the email
    pub async fn register(&self, payload: RegisterDto) -> Result<(String, User), AppError> {
        Validator::new()
            .email("email", &payload.email)
            .min_len("password", &payload.password, MIN_PASSWORD_LEN)
            .required("firstName", &payload.first_name)
            .required("lastName", &payload.last_name)
            .finish()?;

        let user_repo = UserRepository::new(self.db);
        let email = normalize_email(&payload.email);

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken.into());
        }

        let password_hash = hash_password(payload.password).await?;
        let phone_number = normalize_optional(payload.phone_number);

        let user = user_repo
            .create(CreateUserParams {
                email,
                password_hash,
                first_name: payload.first_name.trim().to_string(),
                last_name: payload.last_name.trim().to_string(),
                notify_email: true,
                notify_sms: phone_number.is_some(),
                phone_number,
            })
            .await
            .map_err(email_conflict)?;

        let token = self.jwt.issue_session(user.id)?;

        Ok((token, User::from_entity(user)))
    }

    /// Verifies credentials and issues a session token.
    ///
    /// # Returns
    /// - `Ok((token, User))` - Credentials matched
    /// - `Err(AppError::NotFound)` - No account with that email
    /// - `Err(AuthError::InvalidCredentials)` - Wrong password
    pub async fn login(&self, payload: LoginDto) -> Result<(String, User), AppError> {
        Validator::new()
            .email("email", &payload.email)
            .required("password", &payload.password)
            .finish()?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&normalize_email(&payload.email))
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        if !verify_password(payload.password, user.password_hash.clone()).await? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let token = self.jwt.issue_session(user.id)?;

        Ok((token, User::from_entity(user)))
    }

    /// Emails a one hour password reset link to the account owner.
    pub async fn forgot_password(
        &self,
        payload: ForgotPasswordDto,
        mailer: &dyn Mailer,
        app_url: &str,
    ) -> Result<(), AppError> {
        Validator::new().email("email", &payload.email).finish()?;

        let Some(user) = UserRepository::new(self.db)
            .find_by_email(&normalize_email(&payload.email))
            .await?
        else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let token = self.jwt.issue_password_reset(user.id)?;

        mailer
            .send(Email::password_reset(&user.email, app_url, &token))
            .await?;

        Ok(())
    }

    /// Replaces the password of the user named by a reset token.
    ///
    /// # Returns
    /// - `Ok(())` - Password changed
    /// - `Err(AuthError::InvalidResetToken)` - Token malformed or expired
    /// - `Err(AuthError::InvalidTokenPurpose)` - Token was not issued for a reset
    /// - `Err(AppError::NotFound)` - The user no longer exists
    pub async fn reset_password(&self, payload: ResetPasswordDto) -> Result<(), AppError> {
        Validator::new()
            .required("token", &payload.token)
            .min_len("password", &payload.password, MIN_PASSWORD_LEN)
            .finish()?;

        let user_id = self.jwt.verify_password_reset(payload.token.trim())?;

        let user_repo = UserRepository::new(self.db);
        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        let password_hash = hash_password(payload.password).await?;
        user_repo.update_password(user_id, password_hash).await?;

        Ok(())
    }
}
