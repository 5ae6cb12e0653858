//! bcrypt password hashing.
//!
//! Hashing is CPU bound, so both operations run on the blocking thread pool.

use crate::server::error::AppError;

const HASH_COST: u32 = 10;

pub async fn hash_password(password: String) -> Result<String, AppError> {
    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, HASH_COST)).await??;

    Ok(hash)
}

/// Checks a password against a stored hash. A malformed stored hash never matches.
pub async fn verify_password(password: String, hash: String) -> Result<bool, AppError> {
    let matches =
        tokio::task::spawn_blocking(move || bcrypt::verify(password, &hash).unwrap_or(false))
            .await?;

    Ok(matches)
}
