use super::*;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        password_hash: "hash".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        phone_number: Some("555-0100".to_string()),
        notify_email: true,
        notify_sms: true,
    }
}

/// Tests creating a new user.
///
/// Verifies that the repository stores every profile field and assigns an id.
///
/// Expected: Ok(Model) with matching fields
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("jane@example.com")).await?;

    assert!(user.id > 0);
    assert_eq!(user.email, "jane@example.com");
    assert_eq!(user.first_name, "Jane");
    assert_eq!(user.phone_number.as_deref(), Some("555-0100"));
    assert!(user.notify_sms);

    Ok(())
}

/// Tests creating a user with a duplicate email.
///
/// Verifies that the unique constraint on email rejects the second insert.
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn rejects_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("dup@example.com")).await?;
    let result = repo.create(params("dup@example.com")).await;

    assert!(result.is_err());

    Ok(())
}
