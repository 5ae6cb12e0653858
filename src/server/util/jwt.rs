//! JSON Web Token issuing and verification.
//!
//! Session tokens carry only the user id and expire after seven days. Password reset
//! tokens additionally carry `purpose = "password_reset"`, expire after one hour and
//! are never accepted where a session token is expected.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::server::error::{auth::AuthError, AppError};

pub const PASSWORD_RESET_PURPOSE: &str = "password_reset";

const SESSION_TOKEN_DAYS: i64 = 7;
const RESET_TOKEN_HOURS: i64 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claims {
    pub user_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    pub iat: i64,
    pub exp: i64,
}

/// HS256 signing and verification keys derived from `JWT_SECRET`.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl JwtKeys {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// Issues a seven day session token for the user.
    pub fn issue_session(&self, user_id: i32) -> Result<String, AppError> {
        self.issue(user_id, None, Duration::days(SESSION_TOKEN_DAYS))
    }

    /// Issues a one hour password reset token for the user.
    pub fn issue_password_reset(&self, user_id: i32) -> Result<String, AppError> {
        self.issue(
            user_id,
            Some(PASSWORD_RESET_PURPOSE.to_string()),
            Duration::hours(RESET_TOKEN_HOURS),
        )
    }

    fn issue(
        &self,
        user_id: i32,
        purpose: Option<String>,
        lifetime: Duration,
    ) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            purpose,
            iat: now.timestamp(),
            exp: (now + lifetime).timestamp(),
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verifies a session token and returns the user id it names.
    ///
    /// # Returns
    /// - `Ok(user_id)` - Token is valid, unexpired and not a purpose-bound token
    /// - `Err(AuthError::InvalidToken)` - Anything else
    pub fn verify_session(&self, token: &str) -> Result<i32, AuthError> {
        let claims = self
            .decode(token)
            .map_err(|_| AuthError::InvalidToken)?;

        if claims.purpose.is_some() {
            return Err(AuthError::InvalidToken);
        }

        Ok(claims.user_id)
    }

    /// Verifies a password reset token and returns the user id it names.
    ///
    /// # Returns
    /// - `Ok(user_id)` - Token is a valid, unexpired reset token
    /// - `Err(AuthError::InvalidResetToken)` - Token is malformed, forged or expired
    /// - `Err(AuthError::InvalidTokenPurpose)` - Token is valid but not a reset token
    pub fn verify_password_reset(&self, token: &str) -> Result<i32, AuthError> {
        let claims = self
            .decode(token)
            .map_err(|_| AuthError::InvalidResetToken)?;

        if claims.purpose.as_deref() != Some(PASSWORD_RESET_PURPOSE) {
            return Err(AuthError::InvalidTokenPurpose);
        }

        Ok(claims.user_id)
    }

    fn decode(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        decode::<Claims>(token, &self.decoding, &Validation::default()).map(|data| data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> JwtKeys {
        JwtKeys::new("test-secret")
    }

    #[test]
    fn session_token_round_trips_user_id() {
        let keys = keys();
        let token = keys.issue_session(42).unwrap();

        assert_eq!(keys.verify_session(&token).unwrap(), 42);
    }

    #[test]
    fn rejects_token_signed_with_other_secret() {
        let token = JwtKeys::new("other-secret").issue_session(42).unwrap();

        assert!(matches!(
            keys().verify_session(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn rejects_expired_session_token() {
        let keys = keys();
        let past = Utc::now() - Duration::hours(2);
        let claims = Claims {
            user_id: 1,
            purpose: None,
            iat: (past - Duration::days(7)).timestamp(),
            exp: past.timestamp(),
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).unwrap();

        assert!(matches!(
            keys.verify_session(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn reset_token_is_not_a_session_token() {
        let keys = keys();
        let token = keys.issue_password_reset(7).unwrap();

        assert!(matches!(
            keys.verify_session(&token),
            Err(AuthError::InvalidToken)
        ));
        assert_eq!(keys.verify_password_reset(&token).unwrap(), 7);
    }

    #[test]
    fn session_token_is_not_a_reset_token() {
        let keys = keys();
        let token = keys.issue_session(7).unwrap();

        assert!(matches!(
            keys.verify_password_reset(&token),
            Err(AuthError::InvalidTokenPurpose)
        ));
    }

    #[test]
    fn garbage_reset_token_is_invalid() {
        assert!(matches!(
            keys().verify_password_reset("not-a-jwt"),
            Err(AuthError::InvalidResetToken)
        ));
    }
}
