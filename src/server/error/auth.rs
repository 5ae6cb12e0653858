use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No `Authorization: Bearer` header (or `token` query value) was supplied.
    #[error("No token provided")]
    MissingToken,

    /// Token could not be decoded, has expired, or is not a session token.
    #[error("Invalid token")]
    InvalidToken,

    /// Token is valid but the user it names no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// User is not a member of the band.
    #[error("User {0} is not a member of band {1}")]
    NotBandMember(i32, i32),

    /// User is a member of the band but not a leader.
    #[error("User {0} is not a leader of band {1}")]
    NotBandLeader(i32, i32),

    /// User attempted to access a resource owned by someone else.
    #[error("User {0} does not own the requested resource")]
    NotOwner(i32),

    /// Registration with an email that already has an account.
    #[error("Email already exists")]
    EmailTaken,

    /// Login password did not match.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Password reset token could not be decoded or has expired.
    #[error("Invalid or expired token")]
    InvalidResetToken,

    /// A token was presented for password reset that was not issued for it.
    #[error("Invalid token purpose")]
    InvalidTokenPurpose,
}

/// Converts authentication errors into HTTP responses.
///
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `NotBandMember` / `NotBandLeader` / `NotOwner` → 403 Forbidden
/// - `EmailTaken` → 409 Conflict
/// - `InvalidCredentials` / `InvalidResetToken` / `InvalidTokenPurpose` → 400 Bad Request
///
/// The detailed error (including user and band ids) is logged at debug level; clients
/// only receive the generic message.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken => (StatusCode::UNAUTHORIZED, "No token provided"),
            Self::InvalidToken => (StatusCode::UNAUTHORIZED, "Invalid token"),
            Self::UserNotInDatabase(_) => (StatusCode::UNAUTHORIZED, "User not found"),
            Self::NotBandMember(_, _) => {
                (StatusCode::FORBIDDEN, "You are not a member of this band")
            }
            Self::NotBandLeader(_, _) => (
                StatusCode::FORBIDDEN,
                "You must be a band leader to perform this action",
            ),
            Self::NotOwner(_) => (
                StatusCode::FORBIDDEN,
                "You do not have access to this resource",
            ),
            Self::EmailTaken => (StatusCode::CONFLICT, "Email already exists"),
            Self::InvalidCredentials => (StatusCode::BAD_REQUEST, "Invalid credentials"),
            Self::InvalidResetToken => (StatusCode::BAD_REQUEST, "Invalid or expired token"),
            Self::InvalidTokenPurpose => (StatusCode::BAD_REQUEST, "Invalid token purpose"),
        };

        error_response(status, message)
    }
}
