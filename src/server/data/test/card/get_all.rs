use super::*;

/// Tests getting cards from an empty store.
///
/// Expected: Ok(empty vec)
#[tokio::test]
async fn returns_empty_when_no_cards() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let cards = CardRepository::new(db).get_all().await?;

    assert!(cards.is_empty());

    Ok(())
}

/// Tests getting every card, oldest first.
///
/// Expected: Ok with cards ordered by creation time
#[tokio::test]
async fn returns_cards_oldest_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let newer = factory::card::CardFactory::new(db)
        .title("Newer")
        .created_at(now)
        .build()
        .await?;
    let older = factory::card::CardFactory::new(db)
        .title("Older")
        .created_at(now - Duration::minutes(5))
        .build()
        .await?;

    let cards = CardRepository::new(db).get_all().await?;

    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].id.to_hex(), older.id);
    assert_eq!(cards[1].id.to_hex(), newer.id);

    Ok(())
}

/// Tests that a stored card with a corrupt identifier is reported as a decode error.
///
/// Expected: Err(AppError::DecodeError)
#[tokio::test]
async fn fails_with_decode_error_for_corrupt_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_kanban_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let corrupt = test_utils::fixture::card::entity_builder()
        .id("corrupt")
        .build();
    entity::prelude::Card::insert(entity::card::ActiveModel::from(corrupt))
        .exec(db)
        .await?;

    let result = CardRepository::new(db).get_all().await;

    assert!(matches!(result, Err(AppError::DecodeError(_))));

    Ok(())
}
