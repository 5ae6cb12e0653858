use super::*;

/// Tests replacing a user's password hash.
///
/// Expected: Ok(()) and the stored hash changes
#[tokio::test]
async fn replaces_password_hash() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .password_hash("old-hash")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    repo.update_password(user.id, "new-hash".to_string()).await?;

    let stored = repo.find_by_id(user.id).await?.unwrap();
    assert_eq!(stored.password_hash, "new-hash");
    assert_eq!(stored.first_name, user.first_name);

    Ok(())
}
