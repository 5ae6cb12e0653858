use super::*;

/// Tests a member passes the membership check.
///
/// Expected: Ok(User)
#[tokio::test]
async fn grants_access_to_member() -> Result<(), AppError> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let (_, member, band) = factory::helpers::create_band_with_member(db).await?;
    let headers = bearer(&jwt.issue_session(member.id)?);

    let user = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::BandMember(band.id)])
        .await?;

    assert_eq!(user.id, member.id);

    Ok(())
}

/// Tests an outsider fails the membership check.
///
/// Expected: Err(AuthError::NotBandMember)
#[tokio::test]
async fn denies_access_to_outsider() -> Result<(), AppError> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let (_, band) = factory::helpers::create_band_with_leader(db).await?;
    let outsider = factory::user::create_user(db).await?;
    let headers = bearer(&jwt.issue_session(outsider.id)?);

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[Permission::BandMember(band.id)])
        .await;

    match result {
        Err(AppError::AuthErr(AuthError::NotBandMember(user_id, band_id))) => {
            assert_eq!(user_id, outsider.id);
            assert_eq!(band_id, band.id);
        }
        other => panic!("Expected NotBandMember, got: {:?}", other),
    }

    Ok(())
}

/// Tests every permission in the list must hold.
///
/// Expected: Err(AuthError::NotBandMember) for the band the user is not in
#[tokio::test]
async fn requires_all_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new().with_band_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let jwt = keys();

    let (leader, band) = factory::helpers::create_band_with_leader(db).await?;
    let other = factory::band::create_band(db).await?;
    let headers = bearer(&jwt.issue_session(leader.id)?);

    let result = AuthGuard::new(db, &jwt, &headers)
        .require(&[
            Permission::BandMember(band.id),
            Permission::BandMember(other.id),
        ])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotBandMember(_, id))) if id == other.id
    ));

    Ok(())
}
