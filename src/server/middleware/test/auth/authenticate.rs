use super::*;

/// Tests a valid session token resolves to its user.
///
/// Expected: Ok(User)
#[tokio::test]
async fn accepts_valid_session_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let user = factory::user::create_user(db).await?;
    let headers = bearer(&jwt.issue_session(user.id)?);

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await?;

    assert_eq!(result.id, user.id);

    Ok(())
}

/// Tests requests without a bearer header.
///
/// Verifies both a missing header and a non-Bearer scheme are reported as a missing token.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let empty = HeaderMap::new();
    let mut basic = HeaderMap::new();
    basic.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    for headers in [empty, basic] {
        let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::MissingToken))
        ));
    }

    Ok(())
}

/// Tests tokens that must not authenticate a session.
///
/// Verifies garbage, a token signed with another secret and a password reset token are
/// all refused.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_invalid_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let user = factory::user::create_user(db).await?;
    let forged = JwtKeys::new("another-secret").issue_session(user.id)?;
    let reset = jwt.issue_password_reset(user.id)?;

    for token in ["not-a-jwt".to_string(), forged, reset] {
        let headers = bearer(&token);
        let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;
        assert!(matches!(
            result,
            Err(AppError::AuthErr(AuthError::InvalidToken))
        ));
    }

    Ok(())
}

/// Tests a token for a deleted user.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_token_of_deleted_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let headers = bearer(&jwt.issue_session(4242)?);

    let result = AuthGuard::new(db, &jwt, &headers).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}
