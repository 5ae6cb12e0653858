use super::*;

/// Tests finding a user by email.
///
/// Expected: Ok(Some(Model)) for the matching user
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .email("bassist@example.com")
        .build()
        .await?;
    factory::user::create_user(db).await?;

    let found = UserRepository::new(db)
        .find_by_email("bassist@example.com")
        .await?;

    assert_eq!(found.map(|u| u.id), Some(user.id));

    Ok(())
}

/// Tests finding a nonexistent email.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let found = UserRepository::new(db)
        .find_by_email("nobody@example.com")
        .await?;

    assert!(found.is_none());

    Ok(())
}
