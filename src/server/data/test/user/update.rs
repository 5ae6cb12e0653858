use super::*;

/// Tests a partial profile update.
///
/// Verifies that only provided fields change and that the phone number can be cleared.
///
/// Expected: Ok(Some(Model)) with updated names and cleared phone
#[tokio::test]
async fn updates_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::UserFactory::new(db)
        .first_name("Old")
        .last_name("Name")
        .phone_number(Some("555-0199".to_string()))
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(UpdateUserParams {
            id: user.id,
            first_name: Some("New".to_string()),
            phone_number: Some(None),
            notify_email: Some(false),
            ..Default::default()
        })
        .await?
        .unwrap();

    assert_eq!(updated.first_name, "New");
    assert_eq!(updated.last_name, "Name");
    assert!(updated.phone_number.is_none());
    assert!(!updated.notify_email);
    assert_eq!(updated.email, user.email);

    Ok(())
}

/// Tests updating a nonexistent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(UpdateUserParams {
            id: 999,
            first_name: Some("Ghost".to_string()),
            ..Default::default()
        })
        .await?;

    assert!(result.is_none());

    Ok(())
}
