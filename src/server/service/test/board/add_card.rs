use super::*;

/// Tests adding a card to a board.
///
/// Expected: Ok(Board) containing the card
#[tokio::test]
async fn adds_card_to_board() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BoardService::new(db);
    let board = service.create_board("Sprint One".to_string()).await?;
    let card = factory::create_card(db).await?;

    let updated = service.add_card(&board.id.to_hex(), &card.id).await?;

    assert_eq!(updated.id, board.id);
    assert_eq!(updated.card_ids, vec![ObjectId::parse_str(&card.id)?]);

    Ok(())
}

/// Tests that adding the same card twice leaves a single entry.
///
/// Expected: Ok(Board) with one card after the second call
#[tokio::test]
async fn is_idempotent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BoardService::new(db);
    let board = service.create_board("Sprint One".to_string()).await?;
    let card = factory::create_card(db).await?;

    service.add_card(&board.id.to_hex(), &card.id).await?;
    let updated = service.add_card(&board.id.to_hex(), &card.id).await?;

    assert_eq!(updated.card_ids.len(), 1);

    Ok(())
}

/// Tests that an uppercase card identifier refers to the same card.
///
/// Expected: Ok(Board) with one card after adding both spellings
#[tokio::test]
async fn treats_identifier_case_as_equal() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BoardService::new(db);
    let board = service.create_board("Sprint One".to_string()).await?;
    let card = factory::create_card(db).await?;

    service.add_card(&board.id.to_hex(), &card.id).await?;
    let updated = service
        .add_card(&board.id.to_hex(), &card.id.to_uppercase())
        .await?;

    assert_eq!(updated.card_ids.len(), 1);

    Ok(())
}

/// Tests that a card that was never created can still be referenced.
///
/// Expected: Ok(Board) containing the dangling identifier
#[tokio::test]
async fn accepts_nonexistent_card() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BoardService::new(db);
    let board = service.create_board("Sprint One".to_string()).await?;
    let card_id = ObjectId::new();

    let updated = service
        .add_card(&board.id.to_hex(), &card_id.to_hex())
        .await?;

    assert_eq!(updated.card_ids, vec![card_id]);

    Ok(())
}

/// Tests adding a card with a malformed board identifier.
///
/// Verifies that validation fails before anything is written.
///
/// Expected: Err(AppError::InvalidIdentifier) and no membership rows
#[tokio::test]
async fn rejects_malformed_board_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BoardService::new(db);
    let board = service.create_board("Sprint One".to_string()).await?;
    let card = factory::create_card(db).await?;

    let result = service.add_card("not-an-id", &card.id).await;

    assert!(matches!(result, Err(AppError::InvalidIdentifier(_))));
    assert_eq!(entity::prelude::BoardCard::find().count(db).await?, 0);
    let unchanged = service.get_by_id(&board.id.to_hex()).await?;
    assert!(unchanged.card_ids.is_empty());

    Ok(())
}

/// Tests adding a card with a malformed card identifier.
///
/// Expected: Err(AppError::InvalidIdentifier) and no membership rows
#[tokio::test]
async fn rejects_malformed_card_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = BoardService::new(db);
    let board = service.create_board("Sprint One".to_string()).await?;

    let result = service.add_card(&board.id.to_hex(), "xyz").await;

    assert!(matches!(result, Err(AppError::InvalidIdentifier(_))));
    assert_eq!(entity::prelude::BoardCard::find().count(db).await?, 0);

    Ok(())
}

/// Tests adding a card to a well-formed identifier with no board behind it.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_board() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let card = factory::create_card(db).await?;

    let result = BoardService::new(db)
        .add_card(&ObjectId::new().to_hex(), &card.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
    assert_eq!(entity::prelude::BoardCard::find().count(db).await?, 0);

    Ok(())
}
