use super::*;

/// Tests a leader passes the leader check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_leader() -> Result<(), AppError> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let (leader, band) = factory::helpers::create_band_with_leader(db).await?;
    let headers = bearer(&jwt.issue_session(leader.id)?);

    let user = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::BandLeader(band.id)])
        .await?;

    assert_eq!(user.id, leader.id);

    Ok(())
}

/// Tests a regular member fails the leader check with the leader-specific error.
///
/// Expected: Err(AuthError::NotBandLeader)
#[tokio::test]
async fn denies_regular_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let (_, member, band) = factory::helpers::create_band_with_member(db).await?;
    let headers = bearer(&jwt.issue_session(member.id)?);

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::BandLeader(band.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotBandLeader(_, _)))
    ));

    Ok(())
}

/// Tests an outsider fails the leader check as a non-member.
///
/// Expected: Err(AuthError::NotBandMember)
#[tokio::test]
async fn denies_outsider_as_non_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let (_, band) = factory::helpers::create_band_with_leader(db).await?;
    let outsider = factory::user::create_user(db).await?;
    let headers = bearer(&jwt.issue_session(outsider.id)?);

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::BandLeader(band.id)])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotBandMember(_, _)))
    ));

    Ok(())
}
