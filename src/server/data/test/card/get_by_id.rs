use super::*;

/// Tests getting an existing card by identifier.
///
/// Expected: Ok(Card)
#[tokio::test]
async fn gets_card_by_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::card::CardFactory::new(db)
        .title("Write docs")
        .section("doing")
        .build()
        .await?;
    factory::create_card(db).await?;

    let found = CardRepository::new(db).get_by_id(&card.id).await?;

    assert_eq!(found.id.to_hex(), card.id);
    assert_eq!(found.title, "Write docs");
    assert_eq!(found.section, "doing");

    Ok(())
}

/// Tests getting a card with a malformed identifier.
///
/// Expected: Err(AppError::InvalidIdentifier)
#[tokio::test]
async fn fails_for_malformed_identifier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CardRepository::new(db).get_by_id("not-an-id").await;

    assert!(matches!(result, Err(AppError::InvalidIdentifier(_))));

    Ok(())
}

/// Tests getting a card with a well-formed identifier that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_identifier() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CardRepository::new(db)
        .get_by_id(&ObjectId::new().to_hex())
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
